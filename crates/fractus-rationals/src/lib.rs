//! # fractus-rationals
//!
//! Exact signed rational arithmetic over arbitrary precision magnitudes.
//!
//! This crate wraps `dashu` unsigned integers to provide:
//! - A sign-and-magnitude rational value type (`Rational`)
//! - Arithmetic that never reduces results until `simplify` is asked for
//! - Division by zero as a catchable error (`RationalError`)
//!
//! ## Design Notes
//!
//! Results are kept unreduced so that no work is spent on GCDs during long
//! arithmetic chains; callers decide when to pay for reduction. The
//! magnitudes therefore grow across repeated operations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use num_traits::{One, Zero};
pub use rational::{Rational, RationalError};
