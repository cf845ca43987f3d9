//! LaTeX-friendly rendering of quantities in a chosen display unit.
//!
//! [`as_latex`] expresses a quantity as a scalar multiple of a display unit
//! (via [`Quantity::value_in`]) and formats that scalar for embedding in a
//! LaTeX document, rendering scientific notation as `m \times 10^{e}`.

use dimq_core::{Magnitude, Quantity, QuantityError, QuantityResult};

/// Renders `quantity` as a LaTeX-ready magnitude in units of `unit`.
///
/// The display unit must have the same dimension as the quantity; anything
/// else fails with [`QuantityError::UnitMismatch`]. Values outside
/// `[1e-4, 1e6)` in absolute value are rendered in scientific notation.
///
/// ```rust
/// use dimq::{as_latex, qty, UnitTable};
///
/// let units = UnitTable::si();
/// let distance = (units["meter"].clone() * 2.5e7).into_quantity();
///
/// let text = as_latex(&distance, &units["meter"]).unwrap();
/// assert_eq!(text, r"2.5 \times 10^{7}");
///
/// let text = as_latex(&distance, &units["kilometer"]).unwrap();
/// assert_eq!(text, "25000");
///
/// assert!(as_latex(&distance, &units["second"]).is_err());
/// ```
pub fn as_latex<M: Magnitude>(quantity: &Quantity<M>, unit: &Quantity<M>) -> QuantityResult<String> {
    let scalar = quantity.value_in(unit)?;
    let value = scalar.to_f64().ok_or_else(|| QuantityError::NotConvertible {
        quantity: quantity.to_string(),
        target: "f64",
    })?;
    Ok(format_latex(value))
}

/// `%g`-style rendering: plain for moderate magnitudes, `\times 10^{…}`
/// otherwise.
fn format_latex(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e6).contains(&magnitude) {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                format!(r"{mantissa} \times 10^{{{exponent}}}")
            }
            None => scientific,
        }
    } else {
        format!("{value}")
    }
}
