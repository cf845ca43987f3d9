//! SI units and physical constants, metric-prefixed.
//!
//! The canonical scaling units are the SI base units themselves: one metre
//! is `Quantity(1.0, m=1)`, and every other unit is a quantity derived from
//! the bases by scalar multiplication and dimensional arithmetic. The gram
//! is the one deliberate oddity, `Quantity(1e-3, kg=1)`, so that `kilogram`
//! lands exactly on the base unit.
//!
//! This module provides:
//!
//! - **SI base units**: metre, second, gram, ampere, kelvin, candela, mole,
//!   plus `bit` for information, each with the full metric prefix family
//!   from tera- down to femto-.
//! - **Units accepted for use with the SI**: minute, hour, day, hectare,
//!   litre, tonne.
//! - **Derived units**: hertz, newton, pascal, joule, watt, coulomb, volt,
//!   farad, ohm, carnot — each prefixed as well.
//! - **Common units** not officially sanctioned: ångström, dyne, erg,
//!   calorie, kilocalorie, bar, clausius.
//! - **Non-metric units**: mile, gallon, inch.
//! - **Physical constants**: Avogadro, Boltzmann, Planck.
//!
//! Everything lives in an explicit [`UnitTable`] returned by
//! [`UnitTable::si`]; there is no ambient global namespace to mutate.
//!
//! ```rust
//! use dimq::{qty, UnitTable};
//!
//! let units = UnitTable::si();
//! assert_eq!(units["newton"], qty!(1.0; kg: 1, m: 1, s: -2));
//! assert_eq!(units["kilometer"], qty!(1000.0; m: 1));
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use dimq_core::Quantity;

/// Metric prefixes and their factors, applied to every prefixable unit.
const METRIC_PREFIXES: [(&str, f64); 14] = [
    ("tera", 1e12),
    ("giga", 1e9),
    ("mega", 1e6),
    ("kilo", 1e3),
    ("hecto", 1e2),
    ("deca", 1e1),
    ("", 1e0),
    ("deci", 1e-1),
    ("centi", 1e-2),
    ("milli", 1e-3),
    ("micro", 1e-6),
    ("nano", 1e-9),
    ("pico", 1e-12),
    ("femto", 1e-15),
];

/// A named table of unit quantities and constants.
///
/// Entries are ordinary [`Quantity`] values; look one up and calculate with
/// it like any other quantity. Constructed by an initializer
/// ([`UnitTable::si`]) rather than injected into a shared namespace.
#[derive(Clone, Debug, Default)]
pub struct UnitTable {
    entries: BTreeMap<String, Quantity>,
}

impl UnitTable {
    /// Builds the SI table: prefixed base units, accepted and derived units,
    /// common and non-metric units, and the physical constants.
    pub fn si() -> Self {
        let mut table = Self::default();

        // SI base units. Gram is defined against the kilogram base so that
        // prefixing lands `kilogram` on exactly 1.
        table.insert_metric("meter", Quantity::base(1.0, "m"));
        table.insert_metric("second", Quantity::base(1.0, "s"));
        table.insert_metric("gram", Quantity::base(1e-3, "kg"));
        table.insert_metric("ampere", Quantity::base(1.0, "A"));
        table.insert_metric("kelvin", Quantity::base(1.0, "K"));
        table.insert_metric("candela", Quantity::base(1.0, "cd"));
        table.insert_metric("mol", Quantity::base(1.0, "mol"));
        table.insert_metric("bit", Quantity::base(1.0, "bit"));

        // Units officially accepted for use with the SI.
        let minute = (table["second"].clone() * 60.0).into_quantity();
        table.insert("minute", minute.clone());
        let hour = (minute * 60.0).into_quantity();
        table.insert("hour", hour.clone());
        table.insert("day", (hour * 24.0).into_quantity());
        table.insert("hectare", (table["meter"].clone() * 100.0).pow(2));
        table.insert_metric("liter", (table["meter"].clone() * 0.1).pow(3));
        table.insert_metric("tonne", (table["kilogram"].clone() * 1000.0).into_quantity());

        // Derived units.
        let hertz = table["second"].pow(-1);
        table.insert_metric("hertz", hertz);
        let newton = (table["kilogram"].clone() * table["meter"].clone()
            / table["second"].pow(2))
        .into_quantity();
        table.insert_metric("newton", newton.clone());
        let pascal = (newton.clone() / table["meter"].pow(2)).into_quantity();
        table.insert_metric("pascal", pascal);
        let joule = (newton * table["meter"].clone()).into_quantity();
        table.insert_metric("joule", joule.clone());
        let watt = (joule.clone() / table["second"].clone()).into_quantity();
        table.insert_metric("watt", watt.clone());
        let coulomb = (table["ampere"].clone() * table["second"].clone()).into_quantity();
        table.insert_metric("coulomb", coulomb.clone());
        let volt = (watt / table["ampere"].clone()).into_quantity();
        table.insert_metric("volt", volt.clone());
        table.insert_metric("farad", (coulomb / volt.clone()).into_quantity());
        table.insert_metric("ohm", (volt / table["ampere"].clone()).into_quantity());
        table.insert_metric("carnot", (joule / table["kelvin"].clone()).into_quantity());

        // Common units not officially sanctioned.
        table.insert("angstrom", (table["nanometer"].clone() * 0.1).into_quantity());
        table.insert("dyne", (table["newton"].clone() * 1e-5).into_quantity());
        table.insert("erg", (table["nanojoule"].clone() * 100.0).into_quantity());
        let cal = (table["joule"].clone() * 4.184).into_quantity();
        table.insert("cal", cal.clone());
        let kcal = (cal * 1000.0).into_quantity();
        table.insert("kcal", kcal.clone());
        table.insert_metric("bar", (table["pascal"].clone() * 1e5).into_quantity());
        table.insert_metric("clausius", (kcal / table["kelvin"].clone()).into_quantity());

        // Non-metric units.
        table.insert("mile", (table["kilometer"].clone() * 1.609344).into_quantity());
        table.insert("gallon", (table["liter"].clone() * 3.78541178).into_quantity());
        table.insert("inch", (table["centimeter"].clone() * 2.54).into_quantity());

        // Physical constants.
        table.insert("Avogadro", (6.02214179e23 / table["mol"].clone()).into_quantity());
        table.insert(
            "Boltzmann",
            (table["joule"].clone() * 1.3806488e-23 / table["kelvin"].clone()).into_quantity(),
        );
        table.insert(
            "Planck",
            (table["joule"].clone() * 6.62606957e-34 * table["second"].clone()).into_quantity(),
        );

        table
    }

    /// Looks up a unit or constant by name.
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.entries.get(name)
    }

    /// Iterates over `(name, quantity)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.entries.iter().map(|(name, q)| (name.as_str(), q))
    }

    /// Iterates over the defined names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: impl Into<String>, quantity: Quantity) {
        self.entries.insert(name.into(), quantity);
    }

    /// Inserts `quantity` under every metric prefix of `name`.
    fn insert_metric(&mut self, name: &str, quantity: Quantity) {
        for (prefix, factor) in METRIC_PREFIXES {
            self.insert(
                format!("{prefix}{name}"),
                (quantity.clone() * factor).into_quantity(),
            );
        }
    }
}

impl Index<&str> for UnitTable {
    type Output = Quantity;

    /// Panics when `name` is not defined; use [`UnitTable::get`] to probe.
    fn index(&self, name: &str) -> &Quantity {
        self.entries
            .get(name)
            .unwrap_or_else(|| panic!("no unit named `{name}` in table"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dimq_core::{dim, qty, Exponent, Simplified};

    // ─────────────────────────────────────────────────────────────────────────────
    // Base units and prefixes
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn base_units_have_unit_magnitude_and_single_label() {
        let units = UnitTable::si();
        assert_eq!(units["meter"], qty!(1.0; m: 1));
        assert_eq!(units["second"], qty!(1.0; s: 1));
        assert_eq!(units["ampere"], qty!(1.0; A: 1));
        assert_eq!(units["mol"], qty!(1.0; mol: 1));
        assert_eq!(units["bit"], qty!(1.0; bit: 1));
    }

    #[test]
    fn gram_is_defined_against_the_kilogram_base() {
        let units = UnitTable::si();
        assert_eq!(units["gram"], qty!(1e-3; kg: 1));
        assert_eq!(units["kilogram"], qty!(1.0; kg: 1));
    }

    #[test]
    fn every_prefix_scales_the_base() {
        let units = UnitTable::si();
        assert_eq!(units["kilometer"], qty!(1000.0; m: 1));
        assert_eq!(units["centimeter"], qty!(1e-2; m: 1));
        assert_eq!(units["femtosecond"], qty!(1e-15; s: 1));
        assert_eq!(units["terameter"], qty!(1e12; m: 1));
    }

    #[test]
    fn prefix_family_is_complete_for_prefixed_units() {
        let units = UnitTable::si();
        for (prefix, factor) in METRIC_PREFIXES {
            let name = format!("{prefix}meter");
            let quantity = units.get(&name).expect("prefixed meter");
            assert_relative_eq!(*quantity.value(), factor, max_relative = 1e-12);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Accepted and derived units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn time_units_chain() {
        let units = UnitTable::si();
        assert_eq!(units["minute"], qty!(60.0; s: 1));
        assert_eq!(units["hour"], qty!(3600.0; s: 1));
        assert_eq!(units["day"], qty!(86400.0; s: 1));
    }

    #[test]
    fn hectare_and_liter_are_powers() {
        let units = UnitTable::si();
        let hectare = &units["hectare"];
        assert_eq!(hectare.dimension(), &dim!(m: 2));
        assert_relative_eq!(*hectare.value(), 10_000.0, max_relative = 1e-12);
        let liter = &units["liter"];
        assert_eq!(liter.dimension(), &dim!(m: 3));
        assert_relative_eq!(*liter.value(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn newton_is_kilogram_meter_per_second_squared() {
        let units = UnitTable::si();
        assert_eq!(units["newton"], qty!(1.0; kg: 1, m: 1, s: -2));
        // Simplification left no zero exponents behind.
        assert!(units["newton"]
            .dimension()
            .iter()
            .all(|(_, e)| e != Exponent::from(0)));
    }

    #[test]
    fn derived_units_compose() {
        let units = UnitTable::si();
        assert_eq!(units["hertz"], qty!(1.0; s: -1));
        assert_eq!(units["pascal"], qty!(1.0; kg: 1, m: -1, s: -2));
        assert_eq!(units["joule"], qty!(1.0; kg: 1, m: 2, s: -2));
        assert_eq!(units["watt"], qty!(1.0; kg: 1, m: 2, s: -3));
        assert_eq!(units["coulomb"], qty!(1.0; A: 1, s: 1));
        assert_eq!(units["volt"], qty!(1.0; A: -1, kg: 1, m: 2, s: -3));
        assert_eq!(units["ohm"], qty!(1.0; A: -2, kg: 1, m: 2, s: -3));
    }

    #[test]
    fn farad_inverts_volt() {
        let units = UnitTable::si();
        let ratio = units["farad"].clone() * units["volt"].clone();
        assert_eq!(ratio, Simplified::Quantity(units["coulomb"].clone()));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Common, non-metric units and constants
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn common_units() {
        let units = UnitTable::si();
        assert_eq!(units["angstrom"].dimension(), &dim!(m: 1));
        assert_relative_eq!(*units["angstrom"].value(), 1e-10, max_relative = 1e-12);
        assert_eq!(units["dyne"], qty!(1e-5; kg: 1, m: 1, s: -2));
        let erg = &units["erg"];
        assert_eq!(erg.dimension(), &dim!(kg: 1, m: 2, s: -2));
        assert_relative_eq!(*erg.value(), 1e-7, max_relative = 1e-12);
        assert_eq!(units["bar"], qty!(1e5; kg: 1, m: -1, s: -2));
    }

    #[test]
    fn calories_scale() {
        let units = UnitTable::si();
        assert_eq!(units["cal"], qty!(4.184; kg: 1, m: 2, s: -2));
        assert_eq!(units["kcal"].dimension(), &dim!(kg: 1, m: 2, s: -2));
        assert_relative_eq!(*units["kcal"].value(), 4184.0, max_relative = 1e-12);
    }

    #[test]
    fn non_metric_units() {
        let units = UnitTable::si();
        assert_relative_eq!(*units["mile"].value(), 1609.344, max_relative = 1e-12);
        assert_eq!(units["mile"].dimension(), &dim!(m: 1));
        assert_relative_eq!(*units["inch"].value(), 0.0254, max_relative = 1e-12);
        assert_relative_eq!(
            *units["gallon"].value(),
            3.78541178e-3,
            max_relative = 1e-12
        );
        assert_eq!(units["gallon"].dimension(), &dim!(m: 3));
    }

    #[test]
    fn physical_constants_carry_their_dimensions() {
        let units = UnitTable::si();
        assert_eq!(units["Avogadro"].dimension(), &dim!(mol: -1));
        assert_eq!(
            units["Boltzmann"].dimension(),
            &dim!(K: -1, kg: 1, m: 2, s: -2)
        );
        assert_eq!(units["Planck"].dimension(), &dim!(kg: 1, m: 2, s: -1));
        assert_relative_eq!(
            *units["Avogadro"].value(),
            6.02214179e23,
            max_relative = 1e-12
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Table access
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn get_probes_without_panicking() {
        let units = UnitTable::si();
        assert!(units.get("meter").is_some());
        assert!(units.get("cubit").is_none());
    }

    #[test]
    #[should_panic(expected = "no unit named")]
    fn index_panics_on_unknown_name() {
        let units = UnitTable::si();
        let _ = &units["cubit"];
    }

    #[test]
    fn names_are_sorted_and_nonempty() {
        let units = UnitTable::si();
        assert!(!units.is_empty());
        assert!(units.len() > 100);
        let names: Vec<_> = units.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
