use brickwork::plan::{plan, BuildPlan, RobotConfig, Strategy};
use brickwork::units::Millimeters;
use brickwork::wall::generator::generate_wall;
use brickwork::wall::{Brick, BrickStatus, WallConfig};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wall width in millimeters
    #[arg(long)]
    wall_width: Option<f32>,
    /// Wall height in millimeters
    #[arg(long)]
    wall_height: Option<f32>,
    /// Robot envelope width in millimeters
    #[arg(long)]
    envelope_width: Option<f32>,
    /// Robot envelope height in millimeters
    #[arg(long)]
    envelope_height: Option<f32>,
    /// Build-order strategy
    #[arg(long, value_enum, default_value_t = Strategy::Optimized)]
    strategy: Strategy,
    /// Write the layout and plan as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
    /// Walk the plan stride by stride, marking bricks built
    #[arg(long)]
    simulate: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    wall: &'a WallConfig,
    robot: &'a RobotConfig,
    strategy: String,
    bricks: &'a [Brick],
    plan: &'a BuildPlan,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut wall = WallConfig::default();
    if let Some(width) = args.wall_width {
        wall.width = Millimeters(width);
    }
    if let Some(height) = args.wall_height {
        wall.height = Millimeters(height);
    }
    let mut robot = RobotConfig::default();
    if let Some(width) = args.envelope_width {
        robot.envelope_width = Millimeters(width);
    }
    if let Some(height) = args.envelope_height {
        robot.envelope_height = Millimeters(height);
    }

    let bricks = generate_wall(&wall);
    println!(
        "wall {} x {}: {} bricks in {} courses",
        wall.width,
        wall.height,
        bricks.len(),
        wall.course_count()
    );

    let build_plan = plan(args.strategy, &bricks, &robot, &wall);
    println!(
        "{} strategy, envelope {} x {}: {} bricks in {} strides",
        args.strategy,
        robot.envelope_width,
        robot.envelope_height,
        build_plan.order.len(),
        build_plan.stride_count
    );
    if !build_plan.is_complete() {
        eprintln!(
            "plan is incomplete: {} bricks could not be placed: {}",
            build_plan.unplaced.len(),
            build_plan
                .unplaced
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if args.simulate {
        simulate(&bricks, &build_plan);
    }

    if let Some(path) = args.json {
        let snapshot = Snapshot {
            wall: &wall,
            robot: &robot,
            strategy: args.strategy.to_string(),
            bricks: &bricks,
            plan: &build_plan,
        };
        let file = File::create(&path).expect("Could not create JSON output file");
        serde_json::to_writer_pretty(file, &snapshot).expect("Could not write JSON snapshot");
        println!("snapshot written to {}", path.display());
    }
}

/// Walk the order one brick at a time, flipping statuses the way an external
/// consumer would, and report per-stride progress.
fn simulate(bricks: &[Brick], build_plan: &BuildPlan) {
    let mut wall_bricks = bricks.to_vec();
    let total = build_plan.order.len();
    let mut built = 0;
    let per_stride = build_plan.bricks_per_stride();
    for (stride, count) in per_stride.iter().enumerate() {
        for laid in build_plan.order.iter().filter(|b| b.stride == Some(stride)) {
            if let Some(brick) = wall_bricks.iter_mut().find(|b| b.id == laid.id) {
                brick.status = BrickStatus::Built;
                built += 1;
            }
        }
        println!("stride {stride:3}: {count:3} bricks laid ({built} / {total} built)");
    }
}
