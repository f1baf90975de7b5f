//! Newton-Raphson iteration over exact rationals.
//!
//! Starting from a guess of one, each step refines the guess via
//! `g = (g + x/g) / 2` until `|x/g - g|` drops below the convergence
//! precision. No simplification happens inside the loop, so the guess's
//! numerator and denominator grow with every step; tightening the precision
//! trades time and memory for accuracy.

use dashu::integer::UBig;
use num_traits::{One, Zero};

use fractus_rationals::Rational;

/// The convergence precision used when the caller does not supply one:
/// `1/10^100`.
///
/// Built fresh on every call; there is no mutable global behind this.
#[must_use]
pub fn default_precision() -> Rational {
    Rational::from_parts(UBig::ONE, UBig::from(10u8).pow(100), false)
        .expect("denominator is nonzero")
}

/// Computes the square root of `x` with [`default_precision`].
///
/// Orders of magnitude slower than `f64::sqrt`, but the result can be made
/// as precise as needed through [`sqrt_with_precision`].
#[must_use]
pub fn sqrt(x: &Rational) -> Rational {
    sqrt_with_precision(x, &default_precision())
}

/// Computes the square root of `x` to within `precision`.
///
/// A zero input returns zero immediately, with no iteration. Otherwise the
/// iteration runs until it converges, with no upper bound on the number of
/// steps: a precision too tight for the growth rate of the intermediate
/// magnitudes makes this run for a very long time, and a negative `x` has
/// no real root to converge to, so the loop will not finish (or will panic
/// once an intermediate guess lands exactly on zero). Callers needing a
/// timeout must supply their own.
#[must_use]
pub fn sqrt_with_precision(x: &Rational, precision: &Rational) -> Rational {
    if x.is_zero() {
        return Rational::zero();
    }

    let mut guess = Rational::one();
    while !close_enough(&(x / &guess), &guess, precision) {
        guess = better_guess(x, &guess);
    }

    guess
}

/// One refinement step: `(guess + x/guess) / 2`.
fn better_guess(x: &Rational, guess: &Rational) -> Rational {
    let half = Rational::from_u64(1, 2, false).expect("denominator is nonzero");
    ((x / guess) + guess) * half
}

/// `|a - b| < precision`
fn close_enough(a: &Rational, b: &Rational, precision: &Rational) -> bool {
    (a - b).abs().lt(precision)
}
