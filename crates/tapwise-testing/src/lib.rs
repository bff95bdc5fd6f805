//! Testing utilities for Tapwise.
//!
//! The [`GestureRobot`] drives a recogniser with scripted interactions
//! on a simulated clock, so timing-sensitive scenarios run instantly
//! and deterministically.

pub mod robot;


pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
}
