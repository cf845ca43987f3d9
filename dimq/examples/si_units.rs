//! Walk the SI unit table: prefixed units, derived units and constants.

use dimq::{as_latex, UnitTable};

fn main() {
    let units = UnitTable::si();

    println!("{} units and constants defined", units.len());
    for name in ["meter", "kilometer", "newton", "joule", "Boltzmann"] {
        println!("{name:>12} = {}", units[name]);
    }

    // 45 mph for 3 hours, in kilometres (the classic motivating example).
    let speed = (units["mile"].clone() * 45.0 / units["hour"].clone()).into_quantity();
    let distance = (units["hour"].clone() * 3.0 * speed).into_quantity();
    println!("3 h at 45 mph = {distance}");
    println!(
        "            = {} km",
        distance.value_in(&units["kilometer"]).unwrap()
    );

    // LaTeX rendering picks scientific notation for extreme magnitudes.
    let avogadro = units["Avogadro"].clone();
    let per_mol = units["mol"].pow(-1);
    println!("N_A = {}", as_latex(&avogadro, &per_mol).unwrap());
}
