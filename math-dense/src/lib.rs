//! Classical dense-matrix kernels
//!
//! This crate collects the textbook algorithms for small dense matrices,
//! written to be read and compared rather than to compete with BLAS.
//!
//! # Features
//!
//! - **Multiplication**: triple-loop `C = A·B` under any of the six
//!   [`LoopOrder`]s, to observe the effect of memory-access patterns
//! - **Gaussian elimination**: unit-diagonal, raw-determinant and
//!   partially pivoted forward passes ([`EliminationMode`])
//! - **LU decomposition**: explicit unit lower and upper factors, no pivoting
//! - **Inversion**: recursive cofactor determinant and the adjugate
//! - **Benchmarking**: a timing harness comparing loop orders
//!
//! All kernels work on `ndarray` matrices of `f64` and report failures through
//! [`DenseError`].
//!
//! # Example
//!
//! ```
//! use math_audio_dense::{EliminationMode, LoopOrder, eliminate, invert, multiply};
//! use ndarray::array;
//!
//! let a = array![[4.0, 9.0, 2.0], [3.0, 5.0, 7.0], [8.0, 1.0, 6.0]];
//! let inv = invert(&a)?;
//! let id = multiply(&a, &inv, LoopOrder::Kij)?;
//! assert!((id[[0, 0]] - 1.0).abs() < 1e-12);
//!
//! let b = array![1.0, 2.0, 3.0];
//! let (u, _rhs) = eliminate(&a, &b, EliminationMode::Pivoted)?;
//! assert_eq!(u[[0, 0]], 8.0);
//! # Ok::<(), math_audio_dense::DenseError>(())
//! ```

pub mod benchmark;
pub mod cofactor;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod multiply;

// Re-export main types
pub use error::{DenseError, Result};
pub use multiply::{LoopOrder, multiply};

// Re-export elimination and factorization
pub use direct::{EliminationMode, eliminate, lu_decompose, select_pivot};

// Re-export cofactor engine
pub use cofactor::{adjugate, cofactors, determinant, invert, minor};

// Re-export benchmark harness
pub use benchmark::{BenchConfig, BenchError, BenchReport};
