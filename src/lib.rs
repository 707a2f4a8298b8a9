//! Planning for a wall-building robot.
//!
//! The crate has two halves, used in sequence: `wall::generator` lays out a
//! rectangular wall as running-bond brick courses, and `plan` computes an
//! order in which a robot with a fixed rectangular reach (its "envelope")
//! should lay those bricks. The order respects structural support (a brick is
//! laid only after the bricks beneath it) while keeping the number of robot
//! repositionings ("strides") low.

pub mod plan;
pub mod units;
pub mod wall;
