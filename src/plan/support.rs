//! Structural support queries shared by both strategies.

use crate::wall::{Brick, BrickId};
use std::collections::HashSet;

/// Bricks in the course directly below whose horizontal span overlaps the
/// given brick's span. Every supporter must be laid before the brick itself.
pub fn supporters<'a>(brick: &Brick, all: &'a [Brick]) -> Vec<&'a Brick> {
    if brick.course() == 0 {
        return Vec::new();
    }
    all.iter()
        .filter(|s| s.course() + 1 == brick.course() && s.overlaps_x(brick))
        .collect()
}

/// A brick is buildable when it sits on the bottom course, or when all of
/// its supporters are already laid. A brick above course 0 with no
/// supporters at all can never become buildable.
pub fn is_buildable(brick: &Brick, laid: &HashSet<BrickId>, all: &[Brick]) -> bool {
    if brick.course() == 0 {
        return true;
    }
    let supporters = supporters(brick, all);
    if supporters.is_empty() {
        return false;
    }
    supporters.iter().all(|s| laid.contains(&s.id))
}

/// Ids of bricks above the bottom course with no supporters at all. A
/// non-empty result marks a structurally defective layout.
pub fn unsupported(all: &[Brick]) -> Vec<BrickId> {
    all.iter()
        .filter(|b| b.course() > 0 && supporters(b, all).is_empty())
        .map(|b| b.id)
        .collect()
}
