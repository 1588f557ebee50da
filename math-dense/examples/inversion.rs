//! Matrix inversion by cofactors, checked against the known inverse.
//!
//! Usage:
//!     cargo run --example inversion

use math_audio_dense::invert;
use math_audio_dense::matrix::{identity, max_abs_diff};
use ndarray::array;

fn main() -> anyhow::Result<()> {
    let a = array![[4.0, 9.0, 2.0], [3.0, 5.0, 7.0], [8.0, 1.0, 6.0]];

    let inv = invert(&a)?;
    println!("After cofactor inversion:");
    println!("{inv:.6}");

    // Adjugate of the magic square divided by its determinant (360).
    let reference = array![[23.0, -52.0, 53.0], [38.0, 8.0, -22.0], [-37.0, 68.0, -7.0]] / 360.0;
    println!("Reference inverse:");
    println!("{reference:.6}");

    println!("max |A·A⁻¹ - I| = {:.3e}", max_abs_diff(&a.dot(&inv), &identity(3)));

    Ok(())
}
