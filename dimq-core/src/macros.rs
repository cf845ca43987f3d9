//! Macros for constructing dimensions and quantities.

/// Builds a [`crate::Dimension`] from `label: exponent` pairs.
///
/// Exponents are integer literals, optionally written as fractions:
///
/// ```rust
/// use dimq_core::{dim, Dimension, Exponent};
///
/// assert_eq!(dim!(), Dimension::new());
/// assert_eq!(dim!(m: 1, s: -2).get("s"), Exponent::from(-2));
/// assert_eq!(dim!(s: 1/2).get("s"), Exponent::new(1, 2));
/// ```
#[macro_export]
macro_rules! dim {
    () => {
        $crate::Dimension::new()
    };
    ($($label:ident : $num:literal $(/ $den:literal)?),+ $(,)?) => {{
        let mut dimension = $crate::Dimension::new();
        $(
            let denominator: i64 = 1 $(* $den)?;
            dimension.insert(stringify!($label), $crate::Exponent::new($num, denominator));
        )+
        dimension
    }};
}

/// Builds a [`crate::Quantity`] from a magnitude and `label: exponent` pairs.
///
/// Without pairs the quantity is dimensionless:
///
/// ```rust
/// use dimq_core::{dim, qty, Quantity};
///
/// assert_eq!(qty!(42.0), Quantity::scalar(42.0));
/// assert_eq!(qty!(42.0; m: 1, s: -1), Quantity::new(42.0, dim!(m: 1, s: -1)));
/// ```
#[macro_export]
macro_rules! qty {
    ($magnitude:expr) => {
        $crate::Quantity::scalar($magnitude)
    };
    ($magnitude:expr ; $($rest:tt)+) => {
        $crate::Quantity::new($magnitude, $crate::dim!($($rest)+))
    };
}
