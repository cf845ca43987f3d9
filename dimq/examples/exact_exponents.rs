//! Exact-rational magnitudes and fractional powers.

use dimq::{Dimension, Exponent, Quantity};
use num_rational::BigRational;

fn main() {
    let area = Quantity::new(
        BigRational::new(4.into(), 9.into()),
        Dimension::from_iter([("m", 2i64)]),
    );

    // (4/9 m^2) ^ 1/2 = 2/3 m, exactly — no floating point involved.
    let side = area.pow((1, 2));
    assert_eq!(*side.value(), BigRational::new(2.into(), 3.into()));
    assert_eq!(side.dimension().get("m"), Exponent::from(1));
    println!("side = {side}");

    // Fractional dimension exponents round-trip exactly as well.
    let diffusion = Quantity::new(
        BigRational::new(1.into(), 1.into()),
        Dimension::from_iter([("s", Exponent::new(1, 2))]),
    );
    println!("sqrt-time quantity: {diffusion}");
    assert_eq!(diffusion.pow(2).dimension().get("s"), Exponent::from(1));
}
