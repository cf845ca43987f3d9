//! Quantity type and its implementations.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg};

use num_rational::BigRational;

use crate::dimension::{Dimension, Exponent, IntoExponent};
use crate::error::{QuantityError, QuantityResult};
use crate::magnitude::Magnitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric magnitude tagged with a runtime dimension vector.
///
/// `Quantity<M>` pairs a magnitude of type `M` (see [`Magnitude`]) with a
/// [`Dimension`] mapping labels to rational exponents. Dimensions are data,
/// not types: `Quantity(3.3, m=1)` and `Quantity(50.0, s=1)` have the same
/// Rust type, and dimensional consistency is enforced at runtime through
/// `Result`-returning operations.
///
/// Quantities are values: every operation produces a new quantity and no
/// operand is ever mutated. Construction never simplifies — explicit
/// zero-exponent entries survive until [`Quantity::simplify`] (which
/// multiplication and division apply for you).
///
/// # Examples
///
/// ```rust
/// use dimq_core::{qty, Quantity, Simplified};
///
/// let distance = qty!(100.0; m: 1);
/// let time = qty!(20.0; s: 1);
///
/// let speed = (distance / time).into_quantity();
/// assert_eq!(speed, qty!(5.0; m: 1, s: -1));
///
/// // Division by a same-dimension quantity collapses to a bare scalar.
/// let ratio = qty!(10.0; m: 1) / qty!(2.0; m: 1);
/// assert_eq!(ratio, Simplified::Scalar(5.0));
/// ```
///
/// Adding quantities of different dimension is an error:
///
/// ```rust
/// use dimq_core::qty;
///
/// let sum = qty!(1.0; m: 1).try_add(&qty!(1.0; s: 1));
/// assert!(sum.is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<M: Magnitude = f64> {
    magnitude: M,
    dimension: Dimension,
}

/// Result of [`Quantity::simplify`], and the output of multiplication and
/// division.
///
/// Simplification is a pure function: it either narrows an all-zero
/// dimension down to the bare magnitude, or returns a new quantity with
/// zero-exponent entries pruned. No quantity is ever mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Simplified<M: Magnitude = f64> {
    /// The dimension vanished entirely; only the bare magnitude remains.
    Scalar(M),
    /// The dimension survived; zero-exponent entries have been stripped.
    Quantity(Quantity<M>),
}

impl<M: Magnitude> Quantity<M> {
    /// Creates a quantity from a magnitude and a dimension.
    ///
    /// The dimension is stored as given — zero-exponent entries included.
    ///
    /// ```rust
    /// use dimq_core::{dim, Quantity};
    ///
    /// let q = Quantity::new(42.0, dim!(m: 1, s: -1));
    /// assert_eq!(*q.value(), 42.0);
    /// assert_eq!(q.dimension(), &dim!(m: 1, s: -1));
    /// ```
    #[inline]
    pub fn new(magnitude: M, dimension: Dimension) -> Self {
        Self {
            magnitude,
            dimension,
        }
    }

    /// Creates a dimensionless quantity.
    #[inline]
    pub fn scalar(magnitude: M) -> Self {
        Self::new(magnitude, Dimension::new())
    }

    /// Creates a quantity with a single dimension label at exponent 1.
    ///
    /// This is the base-unit shape: `Quantity::base(1.0, "m")` is one metre.
    pub fn base(magnitude: M, label: impl Into<String>) -> Self {
        Self::new(magnitude, Dimension::base(label))
    }

    /// Returns the raw magnitude.
    #[inline]
    pub fn value(&self) -> &M {
        &self.magnitude
    }

    /// Returns the dimension vector.
    #[inline]
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Decomposes the quantity into magnitude and dimension.
    #[inline]
    pub fn into_parts(self) -> (M, Dimension) {
        (self.magnitude, self.dimension)
    }

    /// True when the dimension mapping is empty.
    ///
    /// Note that an unsimplified quantity with explicit zero exponents is
    /// *not* dimensionless until simplified, mirroring mapping equality.
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_empty()
    }

    /// Truthiness: true when the magnitude is zero, regardless of dimension.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns the absolute value; the dimension is untouched.
    pub fn abs(&self) -> Self {
        Self::new(self.magnitude.abs(), self.dimension.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Addition and subtraction
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds two quantities of identical dimension.
    ///
    /// ```rust
    /// use dimq_core::qty;
    ///
    /// let sum = qty!(1.5; m: 1).try_add(&qty!(2.5; m: 1)).unwrap();
    /// assert_eq!(sum, qty!(4.0; m: 1));
    /// ```
    pub fn try_add(&self, other: &Self) -> QuantityResult<Self> {
        if self.dimension != other.dimension {
            return Err(self.mismatch("add", other));
        }
        Ok(Self::new(
            self.magnitude.clone() + other.magnitude.clone(),
            self.dimension.clone(),
        ))
    }

    /// Subtracts a quantity of identical dimension.
    pub fn try_sub(&self, other: &Self) -> QuantityResult<Self> {
        if self.dimension != other.dimension {
            return Err(self.mismatch("subtract", other));
        }
        Ok(Self::new(
            self.magnitude.clone() - other.magnitude.clone(),
            self.dimension.clone(),
        ))
    }

    /// Adds a bare value.
    ///
    /// Zero is the identity for every dimension — `q + 0` is a copy of `q`
    /// no matter what unit `q` carries, which is what makes `sum()`-style
    /// folds over quantities work. Any other bare value is only addable to
    /// a dimensionless quantity.
    ///
    /// ```rust
    /// use dimq_core::qty;
    ///
    /// let q = qty!(5.0; m: 1);
    /// assert_eq!(q.try_add_value(&0.0).unwrap(), q);
    /// assert!(q.try_add_value(&1.0).is_err());
    /// ```
    pub fn try_add_value(&self, value: &M) -> QuantityResult<Self> {
        if value.is_zero() {
            return Ok(self.clone());
        }
        if self.dimension.is_empty() {
            return Ok(Self::scalar(self.magnitude.clone() + value.clone()));
        }
        Err(self.mismatch_value("add", value))
    }

    /// Subtracts a bare value; same rules as [`Quantity::try_add_value`].
    pub fn try_sub_value(&self, value: &M) -> QuantityResult<Self> {
        if value.is_zero() {
            return Ok(self.clone());
        }
        if self.dimension.is_empty() {
            return Ok(Self::scalar(self.magnitude.clone() - value.clone()));
        }
        Err(self.mismatch_value("subtract", value))
    }

    /// Subtracts this quantity *from* a bare value (`value - self`).
    ///
    /// `0 - q` is `-q` for any dimension; a nonzero bare value requires a
    /// dimensionless quantity.
    pub fn try_sub_from_value(&self, value: &M) -> QuantityResult<Self> {
        if value.is_zero() {
            return Ok(-self.clone());
        }
        if self.dimension.is_empty() {
            return Ok(Self::scalar(value.clone() - self.magnitude.clone()));
        }
        Err(QuantityError::DimensionMismatch {
            operation: "subtract",
            lhs: value.to_string(),
            rhs: self.to_string(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────

    /// Equality against a bare value.
    ///
    /// Defined only for dimensionless quantities; a dimensioned quantity has
    /// no equality relation with a bare number and fails with
    /// [`QuantityError::UnimplementedComparison`].
    pub fn try_eq_value(&self, value: &M) -> QuantityResult<bool> {
        if self.dimension.is_empty() {
            return Ok(self.magnitude == *value);
        }
        Err(QuantityError::UnimplementedComparison {
            quantity: self.to_string(),
            value: value.to_string(),
        })
    }

    /// Ordering between two quantities of identical dimension.
    ///
    /// Returns `Ok(None)` when the magnitudes are unordered (NaN), and
    /// [`QuantityError::DimensionMismatch`] when the dimensions differ.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use dimq_core::qty;
    ///
    /// let smaller = qty!(1.0; m: 1);
    /// let larger = qty!(2.0; m: 1);
    /// assert_eq!(smaller.try_partial_cmp(&larger).unwrap(), Some(Ordering::Less));
    /// assert!(smaller.try_partial_cmp(&qty!(1.0; s: 1)).is_err());
    /// ```
    pub fn try_partial_cmp(&self, other: &Self) -> QuantityResult<Option<Ordering>> {
        if self.dimension != other.dimension {
            return Err(self.mismatch("compare", other));
        }
        Ok(self.magnitude.partial_cmp(&other.magnitude))
    }

    /// Ordering against a bare value; defined only when dimensionless.
    pub fn try_partial_cmp_value(&self, value: &M) -> QuantityResult<Option<Ordering>> {
        if self.dimension.is_empty() {
            return Ok(self.magnitude.partial_cmp(value));
        }
        Err(self.mismatch_value("compare", value))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Multiplication, division, powers
    // ─────────────────────────────────────────────────────────────────────────

    /// Reciprocal: negated dimension, inverted magnitude, simplified.
    pub fn recip(&self) -> Simplified<M> {
        Quantity::new(
            M::one() / self.magnitude.clone(),
            self.dimension.inverse(),
        )
        .simplify()
    }

    /// Floored division by another quantity.
    ///
    /// The magnitude is floored; the dimension arithmetic is exactly that of
    /// true division, simplification included.
    pub fn div_floor(&self, other: &Self) -> Simplified<M> {
        Quantity::new(
            self.magnitude.floor_div(&other.magnitude),
            self.dimension.quotient(&other.dimension),
        )
        .simplify()
    }

    /// Floored division by a bare value; the dimension is kept.
    pub fn div_floor_value(&self, value: &M) -> Simplified<M> {
        Quantity::new(self.magnitude.floor_div(value), self.dimension.clone()).simplify()
    }

    /// Remainder is not defined for dimensional quantities; this fails
    /// unconditionally with [`QuantityError::Unsupported`].
    pub fn try_rem(&self, _other: &Self) -> QuantityResult<Self> {
        Err(QuantityError::Unsupported {
            operation: "remainder",
        })
    }

    /// Floored-division-with-remainder is not defined for dimensional
    /// quantities; this fails unconditionally.
    pub fn try_div_rem(&self, _other: &Self) -> QuantityResult<(Self, Self)> {
        Err(QuantityError::Unsupported {
            operation: "floored division with remainder",
        })
    }

    /// Raises the quantity to a rational power.
    ///
    /// Every dimension exponent is multiplied by `exp` and the magnitude is
    /// raised through [`Magnitude::pow`]. The result is *not* simplified:
    /// `q.pow(0)` keeps every label at an explicit zero exponent, and only a
    /// later [`Quantity::simplify`] collapses it. (Multiplication and
    /// division simplify; exponentiation deliberately does not.)
    ///
    /// ```rust
    /// use dimq_core::{dim, qty};
    ///
    /// let area = qty!(4.0; m: 2);
    /// let side = area.pow((1, 2));
    /// assert_eq!(side, qty!(2.0; m: 1));
    ///
    /// let zeroth = area.pow(0);
    /// assert_eq!(zeroth.dimension(), &dim!(m: 0));
    /// ```
    pub fn pow<E: IntoExponent>(&self, exp: E) -> Self {
        let exp = exp.into_exponent();
        Self::new(self.magnitude.pow(exp), self.dimension.scaled(exp))
    }

    /// Raises the quantity to a floating-point power.
    ///
    /// The exponent is converted to the nearest rational (exact for dyadic
    /// floats such as `0.5`); returns `None` for a non-finite exponent,
    /// which cannot scale a rational exponent vector.
    pub fn powf(&self, exp: f64) -> Option<Self> {
        Exponent::approximate_float(exp).map(|exp| self.pow(exp))
    }

    /// Simplifies the dimension.
    ///
    /// If every exponent is zero (or the mapping is empty) the quantity
    /// collapses to its bare magnitude; otherwise zero-exponent entries are
    /// pruned and a quantity is returned. This is a pure function — the
    /// operand is consumed, never mutated behind an alias.
    ///
    /// ```rust
    /// use dimq_core::{dim, qty, Quantity, Simplified};
    ///
    /// let trivial = qty!(5.0; m: 0);
    /// assert_eq!(trivial.simplify(), Simplified::Scalar(5.0));
    ///
    /// let mixed = qty!(5.0; m: 1, s: 0);
    /// assert_eq!(mixed.simplify(), Simplified::Quantity(qty!(5.0; m: 1)));
    /// ```
    pub fn simplify(self) -> Simplified<M> {
        if self.dimension.is_trivial() {
            Simplified::Scalar(self.magnitude)
        } else {
            Simplified::Quantity(Self::new(self.magnitude, self.dimension.pruned()))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Narrowing conversions
    // ─────────────────────────────────────────────────────────────────────────

    /// Extracts the bare magnitude of a dimensionless quantity.
    ///
    /// Fails with [`QuantityError::NotConvertible`] when the dimension
    /// mapping is non-empty.
    pub fn try_into_scalar(self) -> QuantityResult<M> {
        if self.dimension.is_empty() {
            return Ok(self.magnitude);
        }
        Err(QuantityError::NotConvertible {
            quantity: self.to_string(),
            target: core::any::type_name::<M>(),
        })
    }

    /// Converts a dimensionless quantity to `f64`.
    pub fn try_to_f64(&self) -> QuantityResult<f64> {
        let not_convertible = || QuantityError::NotConvertible {
            quantity: self.to_string(),
            target: "f64",
        };
        if !self.dimension.is_empty() {
            return Err(not_convertible());
        }
        self.magnitude.to_f64().ok_or_else(not_convertible)
    }

    /// Expresses this quantity as a bare scalar multiple of `unit`.
    ///
    /// Divides by `unit` and requires the ratio to simplify all the way to
    /// a scalar; a unit of any other dimension fails with
    /// [`QuantityError::UnitMismatch`]. This is the hook display formatters
    /// build on.
    ///
    /// ```rust
    /// use dimq_core::qty;
    ///
    /// let distance = qty!(2500.0; m: 1);
    /// let kilometer = qty!(1000.0; m: 1);
    /// assert_eq!(distance.value_in(&kilometer).unwrap(), 2.5);
    /// ```
    pub fn value_in(&self, unit: &Self) -> QuantityResult<M> {
        match self.clone() / unit.clone() {
            Simplified::Scalar(scalar) => Ok(scalar),
            Simplified::Quantity(_) => Err(QuantityError::UnitMismatch {
                quantity: self.to_string(),
                unit: unit.to_string(),
            }),
        }
    }

    fn mismatch(&self, operation: &'static str, other: &Self) -> QuantityError {
        QuantityError::DimensionMismatch {
            operation,
            lhs: self.to_string(),
            rhs: other.to_string(),
        }
    }

    fn mismatch_value(&self, operation: &'static str, value: &M) -> QuantityError {
        QuantityError::DimensionMismatch {
            operation,
            lhs: self.to_string(),
            rhs: value.to_string(),
        }
    }
}

impl<M: Magnitude> Simplified<M> {
    /// True for the scalar case.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Simplified::Scalar(_))
    }

    /// Borrows the magnitude, whichever case holds.
    pub fn value(&self) -> &M {
        match self {
            Simplified::Scalar(scalar) => scalar,
            Simplified::Quantity(quantity) => quantity.value(),
        }
    }

    /// Extracts the scalar case.
    pub fn scalar(self) -> Option<M> {
        match self {
            Simplified::Scalar(scalar) => Some(scalar),
            Simplified::Quantity(_) => None,
        }
    }

    /// Extracts the quantity case.
    pub fn quantity(self) -> Option<Quantity<M>> {
        match self {
            Simplified::Scalar(_) => None,
            Simplified::Quantity(quantity) => Some(quantity),
        }
    }

    /// Re-wraps either case as a quantity (a scalar becomes dimensionless).
    ///
    /// Lossless, and the usual way to keep chaining unit algebra:
    ///
    /// ```rust
    /// use dimq_core::qty;
    ///
    /// let newton = (qty!(1.0; kg: 1) * qty!(1.0; m: 1) / qty!(1.0; s: 1).pow(2))
    ///     .into_quantity();
    /// assert_eq!(newton, qty!(1.0; kg: 1, m: 1, s: -2));
    /// ```
    pub fn into_quantity(self) -> Quantity<M> {
        match self {
            Simplified::Scalar(scalar) => Quantity::scalar(scalar),
            Simplified::Quantity(quantity) => quantity,
        }
    }

    /// Raises either case to a rational power (see [`Quantity::pow`]).
    pub fn pow<E: IntoExponent>(self, exp: E) -> Quantity<M> {
        self.into_quantity().pow(exp)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<M: Magnitude> Mul for Quantity<M> {
    type Output = Simplified<M>;

    /// Exponents are added per label, magnitudes multiplied, and the result
    /// simplified — cancelled dimensions collapse to a bare scalar.
    fn mul(self, rhs: Self) -> Simplified<M> {
        Quantity::new(
            self.magnitude * rhs.magnitude,
            self.dimension.product(&rhs.dimension),
        )
        .simplify()
    }
}

impl<M: Magnitude> Div for Quantity<M> {
    type Output = Simplified<M>;

    /// True (non-truncating) division; exponents subtracted per label,
    /// result simplified.
    fn div(self, rhs: Self) -> Simplified<M> {
        Quantity::new(
            self.magnitude / rhs.magnitude,
            self.dimension.quotient(&rhs.dimension),
        )
        .simplify()
    }
}

impl<M: Magnitude> Mul<M> for Quantity<M> {
    type Output = Simplified<M>;

    /// Scales the magnitude by a bare value; the dimension is kept and the
    /// result simplified (so a prefix factor times a dimensionless quantity
    /// collapses correctly).
    fn mul(self, rhs: M) -> Simplified<M> {
        Quantity::new(self.magnitude * rhs, self.dimension).simplify()
    }
}

impl<M: Magnitude> Div<M> for Quantity<M> {
    type Output = Simplified<M>;

    fn div(self, rhs: M) -> Simplified<M> {
        Quantity::new(self.magnitude / rhs, self.dimension).simplify()
    }
}

impl<M: Magnitude> Neg for Quantity<M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.magnitude, self.dimension)
    }
}

impl<M: Magnitude> From<M> for Quantity<M> {
    /// A bare value is a dimensionless quantity.
    fn from(magnitude: M) -> Self {
        Self::scalar(magnitude)
    }
}

impl TryFrom<Quantity<f64>> for f64 {
    type Error = QuantityError;

    /// Narrowing conversion; fails on a dimensioned quantity.
    fn try_from(quantity: Quantity<f64>) -> QuantityResult<f64> {
        quantity.try_into_scalar()
    }
}

impl Mul<Quantity<f64>> for f64 {
    type Output = Simplified<f64>;

    fn mul(self, rhs: Quantity<f64>) -> Simplified<f64> {
        rhs * self
    }
}

impl Div<Quantity<f64>> for f64 {
    type Output = Simplified<f64>;

    /// `n / q`: negated dimension, `n` over the magnitude, simplified.
    fn div(self, rhs: Quantity<f64>) -> Simplified<f64> {
        rhs.recip() * self
    }
}

impl Mul<Quantity<BigRational>> for BigRational {
    type Output = Simplified<BigRational>;

    fn mul(self, rhs: Quantity<BigRational>) -> Simplified<BigRational> {
        rhs * self
    }
}

impl Div<Quantity<BigRational>> for BigRational {
    type Output = Simplified<BigRational>;

    fn div(self, rhs: Quantity<BigRational>) -> Simplified<BigRational> {
        rhs.recip() * self
    }
}

// Mixed chains: a `Simplified` composes with further quantities and bare
// values without unwrapping at every step.

impl<M: Magnitude> Mul<Quantity<M>> for Simplified<M> {
    type Output = Simplified<M>;

    fn mul(self, rhs: Quantity<M>) -> Simplified<M> {
        self.into_quantity() * rhs
    }
}

impl<M: Magnitude> Div<Quantity<M>> for Simplified<M> {
    type Output = Simplified<M>;

    fn div(self, rhs: Quantity<M>) -> Simplified<M> {
        self.into_quantity() / rhs
    }
}

impl<M: Magnitude> Mul<M> for Simplified<M> {
    type Output = Simplified<M>;

    fn mul(self, rhs: M) -> Simplified<M> {
        self.into_quantity() * rhs
    }
}

impl<M: Magnitude> Div<M> for Simplified<M> {
    type Output = Simplified<M>;

    fn div(self, rhs: M) -> Simplified<M> {
        self.into_quantity() / rhs
    }
}

impl<M: Magnitude> fmt::Display for Quantity<M> {
    /// `"<magnitude> <dimension>"`, or just the magnitude when
    /// dimensionless: `5 m`, `42 m s^-1`, `1 s^1/2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension.is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.dimension)
        }
    }
}

impl<M: Magnitude> fmt::Display for Simplified<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Simplified::Scalar(scalar) => write!(f, "{scalar}"),
            Simplified::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}
