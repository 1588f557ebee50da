//! LU decomposition without pivoting
//!
//! Produces explicit factors `L` (unit lower triangular) and `U` (upper
//! triangular) with `L·U = A`, using the same recurrence as Gaussian
//! elimination on a working copy of `A`.

use crate::error::{DenseError, Result, require_square};
use crate::matrix::to_f64_matrix;
use ndarray::{Array2, Axis, s};

/// Factor `a` into `(L, U)`.
///
/// No row exchanges are performed, so a zero on the diagonal of the working
/// matrix ends the factorization.
///
/// # Errors
///
/// - [`DenseError::NotSquare`] / [`DenseError::EmptyMatrix`] for a bad shape
/// - [`DenseError::ZeroPivot`] when a zero pivot has rows below it to eliminate
pub fn lu_decompose<T: Copy + Into<f64>>(a: &Array2<T>) -> Result<(Array2<f64>, Array2<f64>)> {
    let n = require_square(a.nrows(), a.ncols())?;

    let mut a = to_f64_matrix(a);
    let mut l = Array2::<f64>::zeros((n, n));
    let mut u = Array2::<f64>::zeros((n, n));

    for k in 0..n {
        let akk = a[[k, k]];
        if akk == 0.0 && k + 1 < n {
            return Err(DenseError::ZeroPivot { step: k });
        }

        l[[k, k]] = 1.0;
        for i in (k + 1)..n {
            l[[i, k]] = a[[i, k]] / akk;
        }
        u.slice_mut(s![k, k..]).assign(&a.slice(s![k, k..]));
        a.slice_mut(s![(k + 1).., k]).fill(0.0);

        // Schur complement update, one column at a time.
        let multipliers = l.slice(s![(k + 1).., k]).to_owned();
        for j in (k + 1)..n {
            let ukj = u[[k, j]];
            a.slice_mut(s![(k + 1).., j]).scaled_add(-ukj, &multipliers);
        }
    }

    Ok((l, u))
}

/// Rebuild `A` from its factors.
pub fn lu_reconstruct(l: &Array2<f64>, u: &Array2<f64>) -> Array2<f64> {
    l.dot(u)
}

/// Pack `L` (below the diagonal) and `U` (on and above it) into one matrix.
///
/// The unit diagonal of `L` is implicit.
pub fn lu_pack(l: &Array2<f64>, u: &Array2<f64>) -> Array2<f64> {
    let mut packed = u.clone();
    for (i, mut row) in packed.axis_iter_mut(Axis(0)).enumerate() {
        row.slice_mut(s![..i]).assign(&l.slice(s![i, ..i]));
    }
    packed
}
