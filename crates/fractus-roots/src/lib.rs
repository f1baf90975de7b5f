//! # fractus-roots
//!
//! Square root approximation built purely on exact rational arithmetic.
//!
//! The iteration never touches floating point: every intermediate is a
//! `fractus_rationals::Rational`, so the only precision loss is the
//! caller-chosen convergence threshold.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod newton;

pub use newton::{default_precision, sqrt, sqrt_with_precision};
