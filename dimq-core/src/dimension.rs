//! Dimension vectors: label → rational exponent.

use core::fmt;
use std::collections::BTreeMap;

use num_rational::Rational64;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponent of a single dimension label.
///
/// Exponents are exact rationals so that fractional powers such as `s^1/2`
/// round-trip without floating-point error.
pub type Exponent = Rational64;

/// Conversion into an [`Exponent`], accepted by power operations.
///
/// Implemented for integers, `(numerator, denominator)` pairs and
/// [`Exponent`] itself, so `q.pow(2)`, `q.pow((1, 2))` and
/// `q.pow(Exponent::new(3, 2))` all read naturally.
pub trait IntoExponent {
    /// Converts into an exact rational exponent.
    fn into_exponent(self) -> Exponent;
}

impl IntoExponent for Exponent {
    fn into_exponent(self) -> Exponent {
        self
    }
}

impl IntoExponent for i64 {
    fn into_exponent(self) -> Exponent {
        Exponent::from(self)
    }
}

impl IntoExponent for i32 {
    fn into_exponent(self) -> Exponent {
        Exponent::from(i64::from(self))
    }
}

impl IntoExponent for (i64, i64) {
    /// # Panics
    ///
    /// Panics when the denominator is zero, as [`Exponent::new`] does.
    fn into_exponent(self) -> Exponent {
        Exponent::new(self.0, self.1)
    }
}

impl IntoExponent for (i32, i32) {
    /// # Panics
    ///
    /// Panics when the denominator is zero, as [`Exponent::new`] does.
    fn into_exponent(self) -> Exponent {
        Exponent::new(i64::from(self.0), i64::from(self.1))
    }
}

/// A dimension: a mapping from label to rational exponent.
///
/// Labels are opaque, user-chosen identifiers (`"m"`, `"s"`, `"kg"`, …);
/// there is no fixed registry. Two quantities are dimensionally compatible
/// iff their `Dimension`s are equal as mappings — same labels, same
/// exponents.
///
/// Entries with exponent zero are representable: construction keeps them,
/// and only simplification ([`crate::Quantity::simplify`]) strips them. An
/// empty mapping is the dimensionless dimension.
///
/// ```rust
/// use dimq_core::{dim, Dimension, Exponent};
///
/// let velocity = dim!(m: 1, s: -1);
/// assert_eq!(velocity.get("m"), Exponent::from(1));
/// assert_eq!(velocity.get("kg"), Exponent::from(0));
/// assert_eq!(velocity.to_string(), "m s^-1");
/// assert!(Dimension::new().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Dimension {
    exponents: BTreeMap<String, Exponent>,
}

impl Dimension {
    /// Creates the empty (dimensionless) dimension.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dimension with a single label at exponent 1.
    ///
    /// This is the shape every base unit is built from:
    ///
    /// ```rust
    /// use dimq_core::Dimension;
    ///
    /// let length = Dimension::base("m");
    /// assert_eq!(length.to_string(), "m");
    /// ```
    pub fn base(label: impl Into<String>) -> Self {
        let mut dimension = Self::new();
        dimension.insert(label, 1);
        dimension
    }

    /// Sets the exponent for a label.
    ///
    /// A zero exponent is stored as-is; it is pruned only by
    /// [`Dimension::pruned`] (via simplification), never on insertion.
    pub fn insert(&mut self, label: impl Into<String>, exponent: impl Into<Exponent>) {
        self.exponents.insert(label.into(), exponent.into());
    }

    /// Returns the exponent for `label`, zero if absent.
    pub fn get(&self, label: &str) -> Exponent {
        self.exponents
            .get(label)
            .copied()
            .unwrap_or_else(Exponent::zero)
    }

    /// Number of stored entries (zero-exponent entries count).
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// True when no entry is stored at all.
    ///
    /// An unsimplified dimension such as `m^0` is *not* empty; see
    /// [`Dimension::is_trivial`].
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// True when every stored exponent is zero (including the empty case).
    ///
    /// Simplification collapses a trivial dimension to a bare scalar.
    pub fn is_trivial(&self) -> bool {
        self.exponents.values().all(Zero::is_zero)
    }

    /// Iterates over `(label, exponent)` entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Exponent)> {
        self.exponents.iter().map(|(label, exp)| (label.as_str(), *exp))
    }

    /// Dimension of a product: the union of both mappings with exponents
    /// added per label.
    ///
    /// Labels that cancel are kept at exponent zero; the caller is expected
    /// to simplify.
    pub fn product(&self, other: &Self) -> Self {
        let mut exponents = self.exponents.clone();
        for (label, exp) in &other.exponents {
            let entry = exponents.entry(label.clone()).or_insert_with(Exponent::zero);
            *entry = *entry + *exp;
        }
        Self { exponents }
    }

    /// Dimension of a quotient: `self` minus `other` per label.
    pub fn quotient(&self, other: &Self) -> Self {
        self.product(&other.inverse())
    }

    /// Dimension of a reciprocal: every exponent negated.
    pub fn inverse(&self) -> Self {
        let exponents = self
            .exponents
            .iter()
            .map(|(label, exp)| (label.clone(), -*exp))
            .collect();
        Self { exponents }
    }

    /// Dimension of a power: every exponent multiplied by `factor`.
    ///
    /// A zero factor turns every entry into an explicit zero exponent; the
    /// entries are *kept*, matching the behavior of exponentiation (which
    /// never simplifies).
    pub fn scaled(&self, factor: Exponent) -> Self {
        let exponents = self
            .exponents
            .iter()
            .map(|(label, exp)| (label.clone(), *exp * factor))
            .collect();
        Self { exponents }
    }

    /// Copy with every zero-exponent entry removed.
    pub fn pruned(&self) -> Self {
        let exponents = self
            .exponents
            .iter()
            .filter(|(_, exp)| !exp.is_zero())
            .map(|(label, exp)| (label.clone(), *exp))
            .collect();
        Self { exponents }
    }
}

impl<L: Into<String>, E: Into<Exponent>> FromIterator<(L, E)> for Dimension {
    fn from_iter<I: IntoIterator<Item = (L, E)>>(iter: I) -> Self {
        let mut dimension = Self::new();
        for (label, exp) in iter {
            dimension.insert(label, exp);
        }
        dimension
    }
}

impl fmt::Display for Dimension {
    /// Renders entries in label order as `label^exp`, omitting `^1`:
    /// `m s^-2`, `s^1/2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, exp) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exp == Exponent::from(1) {
                write!(f, "{label}")?;
            } else {
                write!(f, "{label}^{exp}")?;
            }
        }
        Ok(())
    }
}
