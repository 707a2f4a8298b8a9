//! Running-bond layout generation.
//!
//! Courses are laid bottom-to-top, bricks left-to-right. Odd courses lead
//! with a half brick so that vertical joints stagger by half a brick length
//! against the course below. The last brick of a course is cut to close the
//! course flush with the wall edge, unless the leftover is narrower than the
//! configured minimum closer width.

use crate::wall::{Brick, BrickId, BrickKind, BrickStatus, WallConfig};
use cgmath::Point2;
use log::debug;

/// Tolerance for comparing accumulated millimeter positions
const EPSILON: f32 = 1e-3;

/// Generate the full brick layout for the configured wall. Deterministic:
/// the same config always yields identical ids, positions, and sizes.
pub fn generate_wall(config: &WallConfig) -> Vec<Brick> {
    let wall_width = *config.width;
    let full = *config.full_brick;
    let half = *config.half_brick;
    let joint = *config.head_joint;
    let min_closer = *config.min_closer;

    let mut bricks = Vec::new();
    for course in 0..config.course_count() {
        let y = course as f32 * *config.course_height();
        let odd_course = course % 2 == 1;
        let mut index = 0;
        let mut x = 0.0;

        if odd_course && wall_width + EPSILON >= half {
            bricks.push(brick_at(course, index, x, y, half, BrickKind::Half, config));
            index += 1;
            x += half + joint;
        }

        loop {
            let remaining = wall_width - x;
            if remaining < min_closer - EPSILON {
                if remaining > EPSILON {
                    debug!("course {course}: skipping {remaining:.1} mm leftover at the wall edge");
                }
                break;
            }
            let (width, kind, closes) = if remaining + EPSILON >= full + joint + min_closer {
                // A full brick fits and leaves room for at least one more
                (full, BrickKind::Full, false)
            } else if (remaining - full).abs() <= EPSILON {
                (full, BrickKind::Full, true)
            } else if remaining < full {
                // Cut brick closes the course flush with the wall edge
                let kind = if remaining <= half + EPSILON {
                    BrickKind::Half
                } else {
                    BrickKind::Full
                };
                (remaining, kind, true)
            } else {
                // A full brick would strand an unfillable leftover; lay a
                // half brick and let the next iteration close the course
                (half, BrickKind::Half, false)
            };
            bricks.push(brick_at(course, index, x, y, width, kind, config));
            index += 1;
            x += width;
            if closes {
                break;
            }
            x += joint;
        }

        if odd_course {
            repair_trailing_half(&mut bricks, course, config);
        }
    }
    bricks
}

/// A trailing half brick on an odd course is replaced by a full brick when
/// the full brick still fits inside the wall with correct joint spacing.
/// Local greedy repair only; earlier bricks in the course are untouched.
fn repair_trailing_half(bricks: &mut Vec<Brick>, course: usize, config: &WallConfig) {
    let in_course = bricks.iter().filter(|b| b.course() == course).count();
    if in_course < 2 {
        return;
    }
    let Some(last) = bricks.last() else {
        return;
    };
    if last.kind != BrickKind::Half {
        return;
    }
    let previous = &bricks[bricks.len() - 2];
    let x = previous.right() + *config.head_joint;
    if x + *config.full_brick <= *config.width + EPSILON {
        let index = last.index_in_course();
        let y = last.position.y;
        debug!(
            "course {course}: merging trailing half brick into a full brick at x={x:.1}"
        );
        bricks.pop();
        bricks.push(brick_at(
            course,
            index,
            x,
            y,
            *config.full_brick,
            BrickKind::Full,
            config,
        ));
    }
}

fn brick_at(
    course: usize,
    index: usize,
    x: f32,
    y: f32,
    width: f32,
    kind: BrickKind,
    config: &WallConfig,
) -> Brick {
    Brick {
        id: BrickId { course, index },
        position: Point2::new(x, y),
        width,
        height: *config.brick_height,
        kind,
        status: BrickStatus::Planned,
        stride: None,
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
