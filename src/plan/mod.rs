//! Build-order planning.
//!
//! Both strategies share one contract: they take a snapshot of the layout and
//! a robot configuration, and return every brick annotated with the stride in
//! which it should be laid, stride numbers non-decreasing along the order.
//! The caller's bricks are never mutated.

use crate::units::Millimeters;
use crate::wall::{Brick, BrickId, WallConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod naive;
pub mod optimized;
pub mod support;

/// The rectangular footprint the robot can build within without repositioning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub envelope_width: Millimeters,
    pub envelope_height: Millimeters,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            envelope_width: Millimeters(800.0),
            envelope_height: Millimeters(1300.0),
        }
    }
}

/// Closed set of build-order strategies. Dispatch is a `match`, so adding a
/// strategy forces every call site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, clap::ValueEnum)]
pub enum Strategy {
    /// Sweep the envelope left to right across each course, bottom first
    Naive,
    /// Greedy 2D search that fills the whole envelope per stride and scores
    /// candidate repositionings by how many buildable bricks they cover
    Optimized,
}

/// The ordered result of planning. `order` holds every placed brick exactly
/// once; `unplaced` lists bricks the planner had to abandon (empty for a
/// well-formed layout).
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub order: Vec<Brick>,
    pub stride_count: usize,
    pub unplaced: Vec<BrickId>,
}

impl BuildPlan {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Number of bricks laid in each stride
    pub fn bricks_per_stride(&self) -> Vec<usize> {
        let mut counts = vec![0; self.stride_count];
        for brick in &self.order {
            if let Some(stride) = brick.stride {
                counts[stride] += 1;
            }
        }
        counts
    }

    pub(crate) fn from_order(order: Vec<Brick>, input: &[Brick]) -> Self {
        let placed: HashSet<BrickId> = order.iter().map(|b| b.id).collect();
        let unplaced = input
            .iter()
            .filter(|b| !placed.contains(&b.id))
            .map(|b| b.id)
            .collect();
        let stride_count = order
            .iter()
            .filter_map(|b| b.stride)
            .max()
            .map_or(0, |last| last + 1);
        Self {
            order,
            stride_count,
            unplaced,
        }
    }
}

/// Compute a build order for the given layout snapshot. The wall config
/// supplies the bounds the envelope is clamped into.
pub fn plan(
    strategy: Strategy,
    bricks: &[Brick],
    robot: &RobotConfig,
    wall: &WallConfig,
) -> BuildPlan {
    match strategy {
        Strategy::Naive => naive::plan(bricks, robot, wall),
        Strategy::Optimized => optimized::plan(bricks, robot, wall),
    }
}

/// Clamp an envelope origin so the envelope stays within the wall. An
/// envelope larger than the wall pins to the origin.
pub(crate) fn clamp_origin(value: f32, wall_extent: f32, envelope_extent: f32) -> f32 {
    value.min(wall_extent - envelope_extent).max(0.0)
}
