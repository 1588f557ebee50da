//! LU decomposition of a small matrix.
//!
//! Usage:
//!     cargo run --example lu

use math_audio_dense::direct::lu_reconstruct;
use math_audio_dense::lu_decompose;
use math_audio_dense::matrix::{max_abs_diff, to_f64_matrix};
use ndarray::array;

fn main() -> anyhow::Result<()> {
    let a = array![[4, 3, 5], [6, 3, 8], [12, 3, 15]];

    let (l, u) = lu_decompose(&a)?;

    println!("LU decomposition");
    println!("Generated:");
    println!("L\n{l}\nU\n{u}");

    let error = max_abs_diff(&lu_reconstruct(&l, &u), &to_f64_matrix(&a));
    println!("max |L·U - A| = {error:.3e}");

    Ok(())
}
