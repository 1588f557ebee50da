//! Gaussian elimination in its three modes, next to the expected results.
//!
//! Usage:
//!     cargo run --example gauss

use math_audio_dense::{EliminationMode, eliminate};
use ndarray::{Array1, Array2, array};

fn show(title: &str, generated: &(Array2<f64>, Array1<f64>), expected: &Array2<f64>) {
    println!("{title}");
    println!("Generated:");
    println!("{}\n{}", generated.0, generated.1);
    println!("Answer:");
    println!("{expected}\n\n");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let a = array![[3, 2, 1], [2, 3, 1], [1, 2, 3]];
    let b = array![39, 34, 26];
    let result = eliminate(&a, &b, EliminationMode::UnitDiagonal)?;
    show(
        "Gaussian elimination, generating 1 on diagonal",
        &result,
        &array![[1.0, 2.0 / 3.0, 1.0 / 3.0], [0.0, 1.0, 0.2], [0.0, 0.0, 1.0]],
    );

    // b is carried along but not part of the expected answer
    let a = array![[2, -2, 1], [0, 4, 1], [1, 1, 3]];
    let b = array![1, 1, 1];
    let result = eliminate(&a, &b, EliminationMode::RawDeterminant)?;
    show(
        "Gaussian elimination, generating determinant on diagonal",
        &result,
        &array![[2.0, -2.0, 1.0], [0.0, 4.0, 1.0], [0.0, 0.0, 2.0]],
    );

    let a = array![[6, 2, 2], [6, 2, 1], [1, 2, -1]];
    let b = array![0, 5, 0];
    let result = eliminate(&a, &b, EliminationMode::Pivoted)?;
    show(
        "Gaussian elimination with pivoting",
        &result,
        &array![[6.0, 2.0, 2.0], [0.0, 5.0 / 3.0, -4.0 / 3.0], [0.0, 0.0, -1.0]],
    );
    println!("{}", array![0.0, 0.0, 5.0]);

    Ok(())
}
