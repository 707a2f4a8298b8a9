use crate::units::Millimeters;
use crate::wall::generator::generate_wall;
use crate::wall::{Brick, BrickKind, WallConfig};

fn by_course(bricks: &[Brick]) -> Vec<Vec<&Brick>> {
    let course_count = bricks.iter().map(|b| b.course() + 1).max().unwrap_or(0);
    let mut courses = vec![Vec::new(); course_count];
    for brick in bricks {
        courses[brick.course()].push(brick);
    }
    courses
}

#[test]
fn default_wall_covers_every_course_flush() {
    let config = WallConfig::default();
    let bricks = generate_wall(&config);
    let courses = by_course(&bricks);
    assert_eq!(courses.len(), 32, "2000 mm wall at 62.5 mm per course");

    for (index, course) in courses.iter().enumerate() {
        assert!(!course.is_empty(), "course {index} should not be empty");
        let first = course[0];
        assert_eq!(first.position.x, 0.0, "course {index} starts at the wall edge");
        let expected_kind = if index % 2 == 0 {
            BrickKind::Full
        } else {
            BrickKind::Half
        };
        assert_eq!(
            first.kind, expected_kind,
            "course {index} leading brick follows the running bond"
        );
        assert!(
            (first.position.y - index as f32 * 62.5).abs() < 1e-3,
            "course {index} sits at its course height"
        );
        for pair in course.windows(2) {
            let gap = pair[1].position.x - pair[0].right();
            assert!(
                (gap - *config.head_joint).abs() < 1e-3,
                "course {index}: gap between {} and {} is {gap:.2} mm, not one head joint",
                pair[0].id,
                pair[1].id
            );
        }
        let last = course[course.len() - 1];
        assert!(
            (last.right() - *config.width).abs() < 1e-3,
            "course {index} closes flush with the wall edge, got {:.2}",
            last.right()
        );
    }
}

#[test]
fn running_bond_staggers_joints() {
    let bricks = generate_wall(&WallConfig::default());
    let courses = by_course(&bricks);
    for pair in courses.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        // Internal joints are the right edges of all but the last brick
        let lower_joints: Vec<f32> = lower[..lower.len() - 1].iter().map(|b| b.right()).collect();
        for brick in &upper[..upper.len() - 1] {
            let joint = brick.right();
            assert!(
                lower_joints.iter().all(|&x| (x - joint).abs() > 1e-3),
                "joint at {joint:.1} in course {} aligns with the course below",
                brick.course()
            );
        }
    }
}

#[test]
fn concrete_420_scenario() {
    let config = WallConfig {
        width: Millimeters(420.0),
        height: Millimeters(112.5),
        ..WallConfig::default()
    };
    let bricks = generate_wall(&config);
    let courses = by_course(&bricks);
    assert_eq!(courses.len(), 2);

    let bottom = &courses[0];
    assert_eq!(bottom.len(), 2, "course 0 is two full bricks");
    assert_eq!(bottom[0].position.x, 0.0);
    assert_eq!(bottom[0].kind, BrickKind::Full);
    assert_eq!(bottom[0].width, 210.0);
    assert_eq!(bottom[1].position.x, 220.0);
    assert_eq!(bottom[1].kind, BrickKind::Full);
    assert!(
        (bottom[1].width - 200.0).abs() < 1e-3,
        "second brick is cut to close the course flush"
    );

    let top = &courses[1];
    assert_eq!(top[0].position.x, 0.0);
    assert_eq!(top[0].kind, BrickKind::Half);
    assert_eq!(top[1].position.x, 110.0);
    assert_eq!(top[1].kind, BrickKind::Full);
    assert_eq!(top[1].width, 210.0);
}

#[test]
fn generation_is_idempotent() {
    let config = WallConfig::default();
    let first = generate_wall(&config);
    let second = generate_wall(&config);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.position, b.position);
        assert_eq!(a.width, b.width);
        assert_eq!(a.kind, b.kind);
    }
}

#[test]
fn trailing_half_repair_on_odd_course() {
    // With a large minimum closer width, course 1 would end with a stranded
    // half brick at x=110; the repair pass merges it into a full brick.
    let config = WallConfig {
        width: Millimeters(325.0),
        height: Millimeters(125.0),
        min_closer: Millimeters(120.0),
        ..WallConfig::default()
    };
    let bricks = generate_wall(&config);
    let courses = by_course(&bricks);
    let top = &courses[1];
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].kind, BrickKind::Half);
    assert_eq!(top[1].position.x, 110.0);
    assert_eq!(
        top[1].kind,
        BrickKind::Full,
        "trailing half replaced by a full brick"
    );
    assert_eq!(top[1].width, 210.0);
    assert!(top[1].right() <= *config.width + 1e-3);
}

#[test]
fn degenerate_configs_yield_minimal_layouts() {
    let sliver_wall = WallConfig {
        width: Millimeters(30.0),
        ..WallConfig::default()
    };
    assert!(
        generate_wall(&sliver_wall).is_empty(),
        "wall narrower than the minimum closer holds no bricks"
    );

    let flat_wall = WallConfig {
        height: Millimeters(0.0),
        ..WallConfig::default()
    };
    assert!(generate_wall(&flat_wall).is_empty());
}
