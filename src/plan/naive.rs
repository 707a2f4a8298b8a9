//! Course-by-course sweep.
//!
//! The envelope slides left to right across each course, bottom course
//! first. Because a course is finished completely before the next begins,
//! the bond dependency is always trivially satisfied and the vertical
//! envelope extent never matters.

use crate::plan::{clamp_origin, BuildPlan, RobotConfig};
use crate::wall::{Brick, WallConfig};
use log::warn;

pub fn plan(bricks: &[Brick], robot: &RobotConfig, wall: &WallConfig) -> BuildPlan {
    let envelope_width = *robot.envelope_width;
    let wall_width = *wall.width;

    let mut courses: Vec<usize> = bricks.iter().map(|b| b.course()).collect();
    courses.sort_unstable();
    courses.dedup();

    let mut order: Vec<Brick> = Vec::with_capacity(bricks.len());
    let mut stride = 0;
    let mut started = false;

    for course in courses {
        let mut pending: Vec<Brick> = bricks
            .iter()
            .filter(|b| b.course() == course)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        let mut robot_x = 0.0;
        if started {
            // Moving up to the next course is a repositioning
            stride += 1;
        }

        while !pending.is_empty() {
            let window_end = robot_x + envelope_width;
            let in_window = |b: &Brick| b.position.x < window_end && b.right() > robot_x;
            if !pending.iter().any(|b| in_window(b)) {
                let target = clamp_origin(pending[0].position.x, wall_width, envelope_width);
                if (target - robot_x).abs() <= f32::EPSILON {
                    warn!(
                        "course {course}: envelope cannot reach {}; abandoning the course",
                        pending[0].id
                    );
                    break;
                }
                robot_x = target;
                continue;
            }

            let mut rest = Vec::new();
            for mut brick in pending {
                if in_window(&brick) {
                    brick.stride = Some(stride);
                    order.push(brick);
                    started = true;
                } else {
                    rest.push(brick);
                }
            }
            pending = rest;

            if let Some(next) = pending.first() {
                robot_x = clamp_origin(next.position.x, wall_width, envelope_width);
                stride += 1;
            }
        }
    }
    BuildPlan::from_order(order, bricks)
}
