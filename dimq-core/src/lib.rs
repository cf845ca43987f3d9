//! Core type system for runtime-checked dimensional quantities.
//!
//! `dimq-core` provides a small, dynamic units model:
//!
//! - A *dimension* is a runtime value: a mapping from user-chosen labels to
//!   exact rational exponents ([`Dimension`]).
//! - A value tagged with a dimension is a [`Quantity<M>`], generic over its
//!   numeric [`Magnitude`] (`f64` by default, exact rationals supported).
//! - Dimensional consistency is enforced per operation: incompatible
//!   additions, comparisons and conversions return a [`QuantityError`].
//! - Multiplication and division track exponents per label and simplify the
//!   result, collapsing fully cancelled dimensions to a bare scalar
//!   ([`Simplified`]).
//!
//! Most users should depend on `dimq` (the facade crate), which adds the SI
//! unit table and display helpers on top of these primitives.
//!
//! # What this crate solves
//!
//! - Unit-aware arithmetic over an *open* label set — `"m"`, `"s"`, `"kg"`,
//!   or anything else you calculate in; no fixed registry, no code
//!   generation per unit.
//! - Exact rational exponents, so `s^1/2` survives round trips unharmed.
//! - Typed dimensional errors instead of silently wrong numbers.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking (dimensions are data here, not types).
//! - Unit parsing or localized formatting of quantities.
//! - A unit-system registry; base units are whatever labels you pick.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::{qty, Simplified};
//!
//! let distance = qty!(217.26144; m: 1);
//! let time = qty!(10.0; s: 1);
//!
//! let speed = (distance / time).into_quantity();
//! assert_eq!(speed.dimension().to_string(), "m s^-1");
//!
//! // Same-dimension ratios collapse to bare numbers.
//! let ratio = qty!(10.0; m: 1) / qty!(2.0; m: 1);
//! assert_eq!(ratio, Simplified::Scalar(5.0));
//! ```
//!
//! Dimensional mistakes are errors, not numbers:
//!
//! ```rust
//! use dimq_core::qty;
//!
//! assert!(qty!(1.0; m: 1).try_add(&qty!(1.0; s: 1)).is_err());
//! assert!(qty!(1.0; m: 1).try_partial_cmp(&qty!(1.0; s: 1)).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Quantity`] and [`Dimension`];
//!   a quantity serializes as its magnitude plus the exponent mapping.
//!
//! # Panics and errors
//!
//! Dimensional failures are ordinary values of [`QuantityError`] returned
//! from the fallible (`try_*`) operations. Magnitude arithmetic follows the
//! numeric type: `f64` follows IEEE-754 (NaN and infinities propagate),
//! while exact-rational magnitudes panic on division by an exact zero, as
//! integer division does.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
mod magnitude;
mod quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dimension, Exponent, IntoExponent};
pub use error::{QuantityError, QuantityResult};
pub use magnitude::Magnitude;
pub use quantity::{Quantity, Simplified};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dim, qty};
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use num_traits::Zero;
    use proptest::prelude::*;

    fn big(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cross-module behavior: exact-rational magnitudes
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn rational_quantities_add_exactly() {
        let a = Quantity::new(big(1, 3), Dimension::base("m"));
        let b = Quantity::new(big(1, 6), Dimension::base("m"));
        let sum = a.try_add(&b).unwrap();
        assert_eq!(*sum.value(), big(1, 2));
    }

    #[test]
    fn rational_fractional_power_keeps_exactness() {
        let q = Quantity::new(big(4, 9), dim!(m: 2));
        let root = q.pow((1, 2));
        assert_eq!(*root.value(), big(2, 3));
        assert_eq!(root.dimension(), &dim!(m: 1));
    }

    #[test]
    fn rational_division_collapses_to_exact_scalar() {
        let a = Quantity::new(big(10, 1), dim!(m: 1));
        let b = Quantity::new(big(4, 1), dim!(m: 1));
        assert_eq!(a / b, Simplified::Scalar(big(5, 2)));
    }

    #[test]
    fn rational_reflected_scalar_ops() {
        let q = Quantity::new(big(2, 1), dim!(s: 1));
        let scaled = big(3, 1) * q.clone();
        assert_eq!(
            scaled,
            Simplified::Quantity(Quantity::new(big(6, 1), dim!(s: 1)))
        );
        let inverted = big(1, 1) / q;
        assert_eq!(
            inverted,
            Simplified::Quantity(Quantity::new(big(1, 2), dim!(s: -1)))
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // SI-style derivation scenario
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn newton_derivation_has_no_zero_exponents() {
        let kilogram = qty!(1.0; kg: 1);
        let meter = qty!(1.0; m: 1);
        let second = qty!(1.0; s: 1);

        let newton = (kilogram * meter / second.pow(2)).into_quantity();
        assert_eq!(newton, qty!(1.0; kg: 1, m: 1, s: -2));
        assert!(newton.dimension().iter().all(|(_, exp)| !exp.is_zero()));
    }

    #[test]
    fn round_trip_construction_preserves_parts() {
        let dimension = dim!(kg: 1, m: 2, s: -2);
        let q = Quantity::new(3.25, dimension.clone());
        assert_eq!(*q.value(), 3.25);
        assert_eq!(q.dimension(), &dimension);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_add_matches_magnitude_addition(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let qa = qty!(a; m: 1, s: -2);
            let qb = qty!(b; m: 1, s: -2);
            let sum = qa.try_add(&qb).unwrap();
            prop_assert_eq!(sum, qty!(a + b; m: 1, s: -2));
        }

        #[test]
        fn prop_add_commutes(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let qa = qty!(a; kg: 1);
            let qb = qty!(b; kg: 1);
            prop_assert_eq!(qa.try_add(&qb).unwrap(), qb.try_add(&qa).unwrap());
        }

        #[test]
        fn prop_zero_is_identity_for_any_exponent(a in -1e6..1e6f64, exp in -6i64..6) {
            prop_assume!(exp != 0);
            let q = Quantity::new(a, Dimension::from_iter([("m", exp)]));
            prop_assert_eq!(q.try_add_value(&0.0).unwrap(), q.clone());
            prop_assert_eq!(q.try_sub_value(&0.0).unwrap(), q);
        }

        #[test]
        fn prop_mul_adds_exponents(a in 1e-3..1e3f64, b in 1e-3..1e3f64,
                                   ea in -4i64..4, eb in -4i64..4) {
            let qa = Quantity::new(a, Dimension::from_iter([("m", ea)]));
            let qb = Quantity::new(b, Dimension::from_iter([("m", eb)]));
            let product = qa * qb;
            if ea + eb == 0 {
                prop_assert!(product.is_scalar());
            } else {
                let q = product.quantity().unwrap();
                prop_assert_eq!(q.dimension().get("m"), Exponent::from(ea + eb));
            }
        }

        #[test]
        fn prop_self_division_is_scalar_one(a in 1e-3..1e3f64) {
            let q = qty!(a; m: 1, s: -1);
            let ratio = q.clone() / q;
            prop_assert_eq!(ratio, Simplified::Scalar(1.0));
        }

        #[test]
        fn prop_pow_then_inverse_pow_restores_dimension(exp in 1i64..5) {
            let q = qty!(2.0; m: 1);
            let restored = q.pow(exp).pow(Exponent::new(1, exp));
            prop_assert_eq!(restored.dimension(), q.dimension());
        }

        #[test]
        fn prop_ordering_matches_magnitudes(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let qa = qty!(a; s: 1);
            let qb = qty!(b; s: 1);
            prop_assert_eq!(qa.try_partial_cmp(&qb).unwrap(), a.partial_cmp(&b));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde round trips
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use crate::qty;

        #[test]
        fn quantity_round_trips_through_json() {
            let q = qty!(42.5; m: 1, s: -2);
            let json = serde_json::to_string(&q).unwrap();
            let restored: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, q);
        }

        #[test]
        fn fractional_exponents_round_trip_through_json() {
            let q = qty!(1.0; s: 1).pow((1, 2));
            let json = serde_json::to_string(&q).unwrap();
            let restored: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, q);
            assert_eq!(restored.dimension().get("s"), Exponent::new(1, 2));
        }
    }
}
