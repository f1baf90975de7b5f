//! # Fractus
//!
//! Exact rational arithmetic with arbitrary precision square roots.
//!
//! Fractus avoids floating point rounding error entirely: values are signed
//! fractions over arbitrary precision integer magnitudes, arithmetic is
//! exact, and the square root iteration runs in rational arithmetic with a
//! caller-controlled convergence precision.
//!
//! ## Quick Start
//!
//! ```rust
//! use fractus::prelude::*;
//!
//! let two = Rational::from_u64(2, 1, false)?;
//! let precision = Rational::from_u64(1, 1_000_000, false)?;
//! let root = sqrt_with_precision(&two, &precision);
//! assert!((root.to_f64() - 1.414_213_562).abs() < 1e-6);
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fractus_rationals as rationals;
pub use fractus_roots as roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fractus_rationals::{One, Rational, RationalError, Zero};
    pub use fractus_roots::{default_precision, sqrt, sqrt_with_precision};
}
