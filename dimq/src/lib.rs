//! Unit-aware dimensional quantities and conversions.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimq-core` plus a prefixed SI unit table ([`si::UnitTable`])
//! and a LaTeX-friendly display hook ([`latex::as_latex`]).
//!
//! The core idea is: a value is a [`Quantity`], pairing a magnitude with a
//! runtime dimension vector — a mapping from user-chosen labels to exact
//! rational exponents. Arithmetic tracks the exponents per label, simplifies
//! products and quotients, and rejects dimensionally inconsistent operations
//! with a typed [`QuantityError`].
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (adding metres to seconds is an
//!   error, not a number).
//! - Tracks derived dimensions through arithmetic: `kg·m/s²` falls out of
//!   the multiplication, no declaration needed.
//! - Ships the SI unit catalogue with metric prefixes applied, as plain
//!   quantities in a table — no global namespace injection.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking; dimensions are runtime data.
//! - Parsing quantities from strings.
//! - Localized or configurable number formatting.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::UnitTable;
//!
//! let units = UnitTable::si();
//! let mile = units["mile"].clone();
//! let hour = units["hour"].clone();
//!
//! // 45 mph for 3 hours, expressed in kilometres.
//! let speed = (mile * 45.0 / hour).into_quantity();
//! let distance = (units["hour"].clone() * 3.0 * speed).into_quantity();
//! let km = distance.value_in(&units["kilometer"]).unwrap();
//! assert!((km - 217.26144).abs() < 1e-9);
//! ```
//!
//! Exact exponents survive fractional powers:
//!
//! ```rust
//! use dimq::{qty, Exponent};
//!
//! let root = qty!(1.0; s: 1).pow((1, 2));
//! assert_eq!(root.dimension().get("s"), Exponent::new(1, 2));
//! assert_eq!(root.to_string(), "1 s^1/2");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Quantity`] and [`Dimension`].
//!
//! # Panics and errors
//!
//! Dimensional failures are values of [`QuantityError`] returned from the
//! fallible operations; magnitude arithmetic follows the numeric type
//! (IEEE-754 for `f64`). Indexing a [`UnitTable`] with an unknown name
//! panics, like indexing a map; use [`si::UnitTable::get`] to probe.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![forbid(unsafe_code)]

pub use dimq_core::*;
pub use dimq_core::{dim, qty};

pub mod latex;
pub mod si;

pub use latex::as_latex;
pub use si::UnitTable;
