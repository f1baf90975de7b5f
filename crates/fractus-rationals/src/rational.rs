//! Arbitrary precision rational numbers.
//!
//! This module provides exact signed fractions backed by `dashu` unsigned
//! magnitudes. Unlike a canonicalizing rational type, arithmetic here never
//! reduces its results: `1/2 + 1/2` is `4/4`, not `1/1`. Reduction happens
//! only through [`Rational::simplify`], which the comparison operations
//! invoke internally.

use dashu::base::Gcd;
use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

/// Errors reported by the fallible rational operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator was supplied, or a division by a degenerate
    /// divisor was attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// An exact signed fraction `sign * (numerator / denominator)`.
///
/// The magnitudes are non-negative arbitrary precision integers and the
/// denominator is never zero. Values are immutable: every operation
/// constructs a new `Rational` and leaves its operands untouched.
///
/// Equality via `==` is structural (`1/2 != 2/4`); use
/// [`Rational::eq_magnitude`] for value comparison.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    /// True for negative values. A zero numerator may carry either flag.
    negative: bool,
    numerator: UBig,
    denominator: UBig,
}

impl Rational {
    /// Creates a new rational from magnitude parts, unreduced.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_parts(
        numerator: UBig,
        denominator: UBig,
        negative: bool,
    ) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self {
            negative,
            numerator,
            denominator,
        })
    }

    /// Creates a new rational from machine-word magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_u64(numerator: u64, denominator: u64, negative: bool) -> Result<Self, RationalError> {
        Self::from_parts(UBig::from(numerator), UBig::from(denominator), negative)
    }

    /// Returns the numerator magnitude.
    #[must_use]
    pub fn numerator(&self) -> &UBig {
        &self.numerator
    }

    /// Returns the denominator magnitude.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        &self.denominator
    }

    /// Returns true if the sign flag is set.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.numerator.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the raw reciprocal: numerator and denominator swapped, sign
    /// kept as-is. The inverse of a negative rational is negative.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the numerator is zero,
    /// since the swap would manufacture a zero denominator.
    pub fn inverse(&self) -> Result<Self, RationalError> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self {
            negative: self.negative,
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        })
    }

    /// Divides by `divisor`, reporting degenerate divisors as errors.
    ///
    /// The `/` operator forwards here and panics on error; use this method
    /// when the divisor is not known to be nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the divisor's numerator
    /// is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, RationalError> {
        Ok(mul_signed(self, &divisor.inverse()?))
    }

    /// Reduces to lowest terms, preserving the sign.
    ///
    /// A numerator of 0 or 1 is already in lowest terms and the value is
    /// returned unchanged, denominator included: `0/7` simplifies to `0/7`.
    #[must_use]
    pub fn simplify(&self) -> Self {
        if self.numerator.is_zero() || self.numerator.is_one() {
            return self.clone();
        }
        let divisor = self.numerator.clone().gcd(self.denominator.clone());
        Self {
            negative: self.negative,
            numerator: &self.numerator / &divisor,
            denominator: &self.denominator / &divisor,
        }
    }

    /// Strict less-than over values.
    ///
    /// Both sides are simplified first. When signs and reduced denominators
    /// agree the numerators are compared directly, with the order inverted
    /// for negative pairs; otherwise the sign of the difference decides.
    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        let a = self.simplify();
        let b = other.simplify();
        if a.negative == b.negative && a.denominator == b.denominator {
            return if a.negative {
                a.numerator > b.numerator
            } else {
                a.numerator < b.numerator
            };
        }

        (&a - &b).negative
    }

    /// Value equality up to sign.
    ///
    /// Zeros are equal regardless of denominator or sign flag. Nonzero
    /// values are equal when their reduced numerators and denominators
    /// match; the sign flag is deliberately not compared, so `-5/1` equals
    /// `5/1`. This mirrors the behavior of the system this library
    /// replaces; see DESIGN.md before "fixing" it.
    #[must_use]
    pub fn eq_magnitude(&self, other: &Self) -> bool {
        if self.numerator.is_zero() && other.numerator.is_zero() {
            return true;
        }
        let a = self.simplify();
        let b = other.simplify();
        a.numerator == b.numerator && a.denominator == b.denominator
    }

    /// Lossy conversion to a native float, for diagnostics and tests.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.numerator.to_f64().value() / self.denominator.to_f64().value();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            negative: false,
            numerator: UBig::ZERO,
            denominator: UBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            negative: false,
            numerator: UBig::ONE,
            denominator: UBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.numerator.is_one() && self.denominator.is_one()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.numerator.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed addition over unreduced fractions.
///
/// Matching signs add the magnitudes and keep the common sign. Differing
/// signs subtract the smaller cross product from the larger and take the
/// sign of the side that contributed the larger one; an exact tie is
/// positive zero. The result denominator is always the product of the
/// operand denominators.
fn add_signed(a: &Rational, b: &Rational) -> Rational {
    let denominator = &a.denominator * &b.denominator;

    if a.negative == b.negative {
        let numerator = &a.numerator * &b.denominator + &b.numerator * &a.denominator;
        return Rational {
            negative: a.negative,
            numerator,
            denominator,
        };
    }

    let left = &a.numerator * &b.denominator;
    let right = &b.numerator * &a.denominator;
    match left.cmp(&right) {
        Ordering::Greater => Rational {
            negative: a.negative,
            numerator: left - right,
            denominator,
        },
        Ordering::Less => Rational {
            negative: b.negative,
            numerator: right - left,
            denominator,
        },
        Ordering::Equal => Rational {
            negative: false,
            numerator: UBig::ZERO,
            denominator,
        },
    }
}

/// Signed multiplication: same signs give positive, differing signs give
/// negative. Magnitudes multiply componentwise, unreduced.
fn mul_signed(a: &Rational, b: &Rational) -> Rational {
    Rational {
        negative: a.negative != b.negative,
        numerator: &a.numerator * &b.numerator,
        denominator: &a.denominator * &b.denominator,
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(&self, &rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        add_signed(&self, rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        add_signed(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(&self, &-rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        add_signed(&self, &-rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        add_signed(self, &-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_signed(&self, &rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        mul_signed(&self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_signed(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            negative: !self.negative,
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            negative: !self.negative,
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }
}
