//! Magnitude representations and the trait that abstracts over them.

use core::fmt::{Debug, Display};

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{Num, One, Signed, ToPrimitive, Zero};

use crate::dimension::Exponent;

/// Numeric magnitude of a [`crate::Quantity`].
///
/// The quantity core is representation-agnostic: any type with the usual
/// field operations, an absolute value, comparisons and exponentiation by a
/// rational exponent can carry a quantity. Two implementations are provided:
///
/// - `f64` — the everyday choice; powers go through [`f64::powf`] and carry
///   ordinary floating-point error.
/// - [`BigRational`] — exact arithmetic; integer powers are exact, and
///   fractional powers stay exact whenever the operand is a perfect power
///   (e.g. `(4/9)^(1/2) = 2/3`).
pub trait Magnitude:
    Clone + PartialEq + PartialOrd + Debug + Display + Num + Signed + ToPrimitive
{
    /// Floored division, used by [`crate::Quantity::div_floor`].
    fn floor_div(&self, rhs: &Self) -> Self;

    /// Raises `self` to a rational power.
    ///
    /// For `f64` this is `powf` of the exponent's float value. For
    /// [`BigRational`] an integer exponent is computed exactly; a fractional
    /// exponent is exact when numerator and denominator are perfect powers
    /// of the root degree, and otherwise degrades through `f64` to the
    /// nearest representable rational (a negative operand under an even
    /// root has no real result and degrades to zero).
    fn pow(&self, exp: Exponent) -> Self;
}

impl Magnitude for f64 {
    #[inline]
    fn floor_div(&self, rhs: &Self) -> Self {
        (self / rhs).floor()
    }

    #[inline]
    fn pow(&self, exp: Exponent) -> Self {
        self.powf(exp.to_f64().unwrap_or(f64::NAN))
    }
}

impl Magnitude for BigRational {
    fn floor_div(&self, rhs: &Self) -> Self {
        (self / rhs).floor()
    }

    fn pow(&self, exp: Exponent) -> Self {
        let rooted = match u32::try_from(*exp.denom()) {
            Ok(1) => Some(self.clone()),
            Ok(degree) => exact_root(self, degree),
            // A root degree beyond u32 is never a perfect power we can
            // verify; take the approximate path.
            Err(_) => None,
        };
        match rooted {
            Some(base) => pow_integer(&base, *exp.numer()),
            None => approximate_pow(self, exp),
        }
    }
}

/// Exact `degree`-th root of a rational, if one exists.
fn exact_root(value: &BigRational, degree: u32) -> Option<BigRational> {
    if value.is_negative() && degree % 2 == 0 {
        return None;
    }
    let numer = exact_int_root(value.numer(), degree)?;
    let denom = exact_int_root(value.denom(), degree)?;
    Some(BigRational::new(numer, denom))
}

fn exact_int_root(value: &BigInt, degree: u32) -> Option<BigInt> {
    let root = value.nth_root(degree);
    (num_traits::pow(root.clone(), degree as usize) == *value).then_some(root)
}

/// Exact integer power, with negative exponents via the reciprocal.
fn pow_integer(base: &BigRational, exp: i64) -> BigRational {
    if exp == 0 {
        return BigRational::one();
    }
    let power = num_traits::pow(base.clone(), exp.unsigned_abs() as usize);
    if exp < 0 {
        power.recip()
    } else {
        power
    }
}

/// Fallback for non-perfect powers: round-trip through `f64`.
fn approximate_pow(base: &BigRational, exp: Exponent) -> BigRational {
    let approx = base
        .to_f64()
        .unwrap_or(f64::NAN)
        .powf(exp.to_f64().unwrap_or(f64::NAN));
    BigRational::from_float(approx).unwrap_or_else(BigRational::zero)
}
