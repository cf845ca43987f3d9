//! Minimal end-to-end example: derive a velocity and catch a dimensional mistake.

use dimq::{qty, Simplified};

fn main() {
    let distance = qty!(100.0; m: 1);
    let time = qty!(20.0; s: 1);

    let speed = (distance / time).into_quantity();
    assert_eq!(speed, qty!(5.0; m: 1, s: -1));
    println!("speed = {speed}");

    // Same-dimension ratios collapse to bare numbers.
    let ratio = qty!(10.0; m: 1) / qty!(2.0; m: 1);
    assert_eq!(ratio, Simplified::Scalar(5.0));

    // Mixing dimensions is an error, not a number.
    let mistake = qty!(1.0; m: 1).try_add(&qty!(1.0; s: 1));
    println!("adding metres to seconds: {}", mistake.unwrap_err());
}
