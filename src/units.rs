//! Linear units for wall and robot dimensions.
//!
//! A type-safe wrapper keeps configured lengths from being confused with the
//! raw coordinates the layout and planning code computes with.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Deref};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Millimeters(pub f32);

impl Deref for Millimeters {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Millimeters {
    type Output = Millimeters;
    fn add(self, rhs: Self) -> Self::Output {
        Millimeters(self.0 + rhs.0)
    }
}

impl Display for Millimeters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}
