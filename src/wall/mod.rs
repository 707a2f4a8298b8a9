//! The wall data model: configuration, bricks, and the small amount of
//! rectangle geometry the planner needs.

use crate::units::Millimeters;
use cgmath::Point2;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod generator;

/// Configured dimensions of the wall and its bricks. All lengths in
/// millimeters. Immutable for the lifetime of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    pub width: Millimeters,
    pub height: Millimeters,
    pub full_brick: Millimeters,
    pub half_brick: Millimeters,
    pub brick_height: Millimeters,
    /// Horizontal gap between bricks within a course
    pub head_joint: Millimeters,
    /// Vertical gap between courses
    pub bed_joint: Millimeters,
    /// Minimum width for the cut brick that closes a course flush with the
    /// wall edge. Leftovers narrower than this are skipped.
    pub min_closer: Millimeters,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            width: Millimeters(2300.0),
            height: Millimeters(2000.0),
            full_brick: Millimeters(210.0),
            half_brick: Millimeters(100.0),
            brick_height: Millimeters(50.0),
            head_joint: Millimeters(10.0),
            bed_joint: Millimeters(12.5),
            min_closer: Millimeters(50.0),
        }
    }
}

impl WallConfig {
    /// Vertical distance from the bottom of one course to the next
    pub fn course_height(&self) -> Millimeters {
        self.brick_height + self.bed_joint
    }

    /// Number of courses needed to reach the wall height. The top course may
    /// be partially cut off by the wall height; that is accepted.
    pub fn course_count(&self) -> usize {
        if *self.height <= 0.0 || *self.course_height() <= 0.0 {
            return 0;
        }
        (*self.height / *self.course_height()).ceil() as usize
    }
}

/// Identity of a brick within a layout, derived from its course and its
/// position within the course. Two generations from the same config produce
/// identical ids, which lets consumers correlate bricks across recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrickId {
    pub course: usize,
    pub index: usize,
}

impl Display for BrickId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "brick-{}-{}", self.course, self.index)
    }
}

/// Full-length or half-length brick. A brick cut to close a course flush
/// with the wall edge keeps its kind with a custom width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    Full,
    Half,
}

/// Mutated only by consumers simulating construction progress; the core
/// never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickStatus {
    #[default]
    Planned,
    Built,
}

/// One brick of the layout. `position` is the bottom-left corner: x is the
/// left edge within the course, y the bottom of the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub position: Point2<f32>,
    pub width: f32,
    pub height: f32,
    pub kind: BrickKind,
    pub status: BrickStatus,
    /// Assigned by the planner; `None` before planning
    pub stride: Option<usize>,
}

impl Brick {
    pub fn course(&self) -> usize {
        self.id.course
    }

    pub fn index_in_course(&self) -> usize {
        self.id.index
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.position.y + self.height
    }

    /// Strict horizontal overlap; bricks separated by a head joint never
    /// overlap, even at zero joint width
    pub fn overlaps_x(&self, other: &Brick) -> bool {
        self.position.x < other.right() && self.right() > other.position.x
    }

    pub fn rect(&self) -> Rect {
        Rect {
            origin: self.position,
            width: self.width,
            height: self.height,
        }
    }
}

/// Axis-aligned rectangle, used for the robot envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Open-interval intersection on both axes
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.origin.x + other.width
            && self.origin.x + self.width > other.origin.x
            && self.origin.y < other.origin.y + other.height
            && self.origin.y + self.height > other.origin.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick(course: usize, index: usize, x: f32, width: f32) -> Brick {
        Brick {
            id: BrickId { course, index },
            position: Point2::new(x, course as f32 * 62.5),
            width,
            height: 50.0,
            kind: BrickKind::Full,
            status: BrickStatus::Planned,
            stride: None,
        }
    }

    #[test]
    fn course_count_rounds_up() {
        let config = WallConfig {
            height: Millimeters(112.5),
            ..WallConfig::default()
        };
        assert_eq!(config.course_count(), 2);
        let flat = WallConfig {
            height: Millimeters(0.0),
            ..WallConfig::default()
        };
        assert_eq!(flat.course_count(), 0);
    }

    #[test]
    fn x_overlap_is_strict() {
        let left = brick(0, 0, 0.0, 210.0);
        let touching = brick(1, 0, 210.0, 210.0);
        let overlapping = brick(1, 1, 100.0, 210.0);
        assert!(!left.overlaps_x(&touching), "shared edge is not overlap");
        assert!(left.overlaps_x(&overlapping));
    }

    #[test]
    fn rect_intersection_is_open() {
        let a = Rect {
            origin: Point2::new(0.0, 0.0),
            width: 800.0,
            height: 1300.0,
        };
        let b = Rect {
            origin: Point2::new(800.0, 0.0),
            width: 100.0,
            height: 50.0,
        };
        assert!(!a.intersects(&b), "abutting rectangles do not intersect");
        let c = Rect {
            origin: Point2::new(799.0, 1299.0),
            width: 100.0,
            height: 50.0,
        };
        assert!(a.intersects(&c));
    }
}
