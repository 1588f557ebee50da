//! Triple-loop matrix multiplication under a selectable loop order
//!
//! The six orders compute the same product `C = A·B`; they differ only in the
//! memory-access pattern of the innermost loop:
//!
//! | order | innermost work                         | access pattern          |
//! |-------|----------------------------------------|-------------------------|
//! | `ijk` | scalar dot product over `k`            | strided column of B     |
//! | `jik` | scalar dot product over `k`            | strided column of B     |
//! | `ikj` | `C[i,:] += A[i,k]·B[k,:]`              | contiguous rows         |
//! | `kij` | `C[i,:] += A[i,k]·B[k,:]`              | contiguous rows         |
//! | `jki` | `C[:,j] += A[:,k]·B[k,j]`              | strided columns         |
//! | `kji` | `C[:,j] += A[:,k]·B[k,j]`              | strided columns         |
//!
//! On large matrices the row-update orders are two orders of magnitude faster
//! than the scalar dot-product orders.

use crate::error::{DenseError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nesting order of the `i` (row of C), `j` (column of C) and `k`
/// (summation) loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopOrder {
    /// Row, column, then a scalar dot product over `k`.
    Ijk,
    /// Row, then `k`, updating a whole row of C.
    Ikj,
    /// Column, row, then a scalar dot product over `k`.
    Jik,
    /// Column, then `k`, updating a whole column of C.
    Jki,
    /// `k` outermost, then rows of C.
    Kij,
    /// `k` outermost, then columns of C.
    Kji,
}

impl LoopOrder {
    /// All six orders, in canonical order.
    pub const ALL: [LoopOrder; 6] = [
        LoopOrder::Ijk,
        LoopOrder::Ikj,
        LoopOrder::Jik,
        LoopOrder::Jki,
        LoopOrder::Kij,
        LoopOrder::Kji,
    ];

    /// Lower-case tag, e.g. `"ikj"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopOrder::Ijk => "ijk",
            LoopOrder::Ikj => "ikj",
            LoopOrder::Jik => "jik",
            LoopOrder::Jki => "jki",
            LoopOrder::Kij => "kij",
            LoopOrder::Kji => "kji",
        }
    }
}

impl fmt::Display for LoopOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoopOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LoopOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown loop order '{s}' (expected one of ijk, ikj, jik, jki, kij, kji)")
            })
    }
}

/// Multiply `a` (m×l) by `b` (l×n) using the requested loop order.
///
/// # Errors
///
/// Returns [`DenseError::DimensionMismatch`] when `a.ncols() != b.nrows()`.
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>, order: LoopOrder) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(DenseError::DimensionMismatch {
            expected: a.ncols(),
            got: b.nrows(),
        });
    }

    let m = a.nrows();
    let l = a.ncols();
    let n = b.ncols();
    let mut c = Array2::<f64>::zeros((m, n));

    match order {
        LoopOrder::Ijk => {
            for i in 0..m {
                for j in 0..n {
                    for k in 0..l {
                        c[[i, j]] += a[[i, k]] * b[[k, j]];
                    }
                }
            }
        }
        LoopOrder::Ikj => {
            for i in 0..m {
                for k in 0..l {
                    c.row_mut(i).scaled_add(a[[i, k]], &b.row(k));
                }
            }
        }
        LoopOrder::Jik => {
            for j in 0..n {
                for i in 0..m {
                    for k in 0..l {
                        c[[i, j]] += a[[i, k]] * b[[k, j]];
                    }
                }
            }
        }
        LoopOrder::Jki => {
            for j in 0..n {
                for k in 0..l {
                    c.column_mut(j).scaled_add(b[[k, j]], &a.column(k));
                }
            }
        }
        LoopOrder::Kij => {
            for k in 0..l {
                for i in 0..m {
                    c.row_mut(i).scaled_add(a[[i, k]], &b.row(k));
                }
            }
        }
        LoopOrder::Kji => {
            for k in 0..l {
                for j in 0..n {
                    c.column_mut(j).scaled_add(b[[k, j]], &a.column(k));
                }
            }
        }
    }

    Ok(c)
}
