//! Stride-minimizing greedy planner.
//!
//! Each stride fills the current envelope: every buildable brick inside the
//! envelope rectangle is laid, rescanning until nothing new unlocks. The
//! next envelope position is chosen by scoring a bounded set of candidate
//! placements by how many currently-buildable bricks they would cover. Exact
//! stride minimization is a geometric set-cover variant under precedence
//! constraints; the bounded search keeps per-stride cost tractable while
//! optimizing the metric that defines a stride.

use crate::plan::{clamp_origin, support, BuildPlan, RobotConfig};
use crate::wall::{Brick, BrickId, Rect, WallConfig};
use cgmath::Point2;
use log::{debug, warn};
use std::collections::HashSet;

/// Candidate anchor bricks considered per repositioning
const MAX_ANCHORS: usize = 5;

pub fn plan(bricks: &[Brick], robot: &RobotConfig, wall: &WallConfig) -> BuildPlan {
    let mut all: Vec<Brick> = bricks.to_vec();
    for brick in &mut all {
        brick.stride = None;
    }
    // Course-then-x order makes scans deterministic and lets dependency
    // unlocking cascade in a single direction
    all.sort_by(|a, b| {
        a.course()
            .cmp(&b.course())
            .then(a.position.x.total_cmp(&b.position.x))
    });

    for id in support::unsupported(&all) {
        warn!("{id} sits above course 0 with no supporters and can never be laid");
    }

    let envelope_width = *robot.envelope_width;
    let envelope_height = *robot.envelope_height;
    let wall_width = *wall.width;
    let wall_height = *wall.height;
    let envelope_at = |x: f32, y: f32| Rect {
        origin: Point2::new(x, y),
        width: envelope_width,
        height: envelope_height,
    };

    let mut laid: HashSet<BrickId> = HashSet::new();
    let mut order: Vec<Brick> = Vec::with_capacity(all.len());
    let mut stride = 0;
    let mut robot_x = 0.0;
    let mut robot_y = 0.0;
    let mut barren_repositions = 0;

    while laid.len() < all.len() {
        // Fill the current envelope. Laying a brick may unlock others in the
        // same envelope, so rescan until a full pass places nothing.
        let mut laid_this_stride = 0;
        loop {
            let envelope = envelope_at(robot_x, robot_y);
            let mut progress = false;
            for i in 0..all.len() {
                if laid.contains(&all[i].id) || !all[i].rect().intersects(&envelope) {
                    continue;
                }
                if !support::is_buildable(&all[i], &laid, &all) {
                    continue;
                }
                all[i].stride = Some(stride);
                laid.insert(all[i].id);
                order.push(all[i].clone());
                laid_this_stride += 1;
                progress = true;
            }
            if !progress {
                break;
            }
        }
        if laid.len() == all.len() {
            break;
        }
        if laid_this_stride > 0 {
            debug!("stride {stride}: laid {laid_this_stride} bricks from ({robot_x:.0}, {robot_y:.0})");
            barren_repositions = 0;
        } else {
            barren_repositions += 1;
            if barren_repositions > 1 {
                // Repositioning stopped producing progress; without this
                // check an unsupported brick would spin the loop forever
                warn!(
                    "deadlock after stride {stride}: abandoning {} unplaced bricks",
                    all.len() - laid.len()
                );
                break;
            }
        }

        let candidates: Vec<&Brick> = all
            .iter()
            .filter(|b| !laid.contains(&b.id) && support::is_buildable(b, &laid, &all))
            .collect();

        if candidates.is_empty() {
            // Nothing is buildable anywhere. Head for the lowest, leftmost
            // unplaced brick as an emergency target; if that stride also
            // lays nothing, the progress check above ends the plan.
            let Some(target) = all.iter().find(|b| !laid.contains(&b.id)) else {
                break;
            };
            warn!("no buildable bricks; emergency repositioning towards {}", target.id);
            robot_x = clamp_origin(target.position.x, wall_width, envelope_width);
            robot_y = clamp_origin(target.position.y, wall_height, envelope_height);
            stride += 1;
            continue;
        }

        // Score a bounded set of placements: for each of the first few
        // candidates, four envelope alignments relative to that brick
        let mut best: Option<(f32, f32, usize)> = None;
        for anchor in &candidates[..candidates.len().min(MAX_ANCHORS)] {
            let placements = [
                // Bottom-left corners aligned
                (anchor.position.x, anchor.position.y),
                // Envelope horizontally centered on the brick
                (
                    anchor.position.x + anchor.width / 2.0 - envelope_width / 2.0,
                    anchor.position.y,
                ),
                // Bottom-right corners aligned
                (anchor.right() - envelope_width, anchor.position.y),
                // Envelope vertically centered on the brick
                (
                    anchor.position.x,
                    anchor.position.y + anchor.height / 2.0 - envelope_height / 2.0,
                ),
            ];
            for (x, y) in placements {
                let x = clamp_origin(x, wall_width, envelope_width);
                let y = clamp_origin(y, wall_height, envelope_height);
                let envelope = envelope_at(x, y);
                let coverage = candidates
                    .iter()
                    .filter(|b| b.rect().intersects(&envelope))
                    .count();
                if best.map_or(true, |(_, _, high)| coverage > high) {
                    best = Some((x, y, coverage));
                }
            }
        }

        match best {
            Some((x, y, coverage)) if coverage > 0 => {
                robot_x = x;
                robot_y = y;
            }
            _ => {
                // No scored placement covers a candidate; center on the
                // first candidate instead
                let first = candidates[0];
                robot_x = clamp_origin(
                    first.position.x + first.width / 2.0 - envelope_width / 2.0,
                    wall_width,
                    envelope_width,
                );
                robot_y = clamp_origin(first.position.y, wall_height, envelope_height);
            }
        }
        stride += 1;
    }
    BuildPlan::from_order(order, bricks)
}

#[cfg(test)]
#[path = "optimized_test.rs"]
mod optimized_test;
