//! Partial pivot selection
//!
//! At elimination step `k` the pivot is the entry of largest magnitude in
//! column `k`, rows `k..n`. Ties keep the lowest row.

use crate::error::{DenseError, Result, require_square};
use ndarray::{Array1, Array2, Zip, s};

/// Row in `k..n` holding the largest `|a[i, k]|`.
///
/// Uses a strict `>` comparison, so the first maximum wins.
///
/// # Errors
///
/// [`DenseError::PivotOutOfRange`] when `k` is not both a row and a column
/// of `a`.
pub fn pivot_row(a: &Array2<f64>, k: usize) -> Result<usize> {
    check_step(a, k)?;
    let mut max_i = k;
    for i in k..a.nrows() {
        if a[[i, k]].abs() > a[[max_i, k]].abs() {
            max_i = i;
        }
    }
    Ok(max_i)
}

/// Swap the pivot row of step `k` into place, on a working copy.
///
/// Only columns `k..n` of the two rows are exchanged; columns before `k` are
/// already eliminated. When `b` is given its entries are swapped in full.
///
/// Returns the row that was swapped with `k`, or `None` if `k` already
/// holds the pivot.
///
/// # Errors
///
/// - [`DenseError::PivotOutOfRange`] as for [`pivot_row`]
/// - [`DenseError::DimensionMismatch`] when `b` is shorter than `a`
pub fn pivot_in_place(
    a: &mut Array2<f64>,
    k: usize,
    b: Option<&mut Array1<f64>>,
) -> Result<Option<usize>> {
    if let Some(b) = b.as_deref()
        && b.len() != a.nrows()
    {
        return Err(DenseError::DimensionMismatch {
            expected: a.nrows(),
            got: b.len(),
        });
    }

    let max_i = pivot_row(a, k)?;
    if max_i == k {
        return Ok(None);
    }

    log::debug!("pivot step {}: swapping rows {} and {}", k, k, max_i);

    let (upper, lower) = a.multi_slice_mut((s![k, k..], s![max_i, k..]));
    Zip::from(upper)
        .and(lower)
        .for_each(|x, y| std::mem::swap(x, y));

    if let Some(b) = b {
        b.swap(k, max_i);
    }

    Ok(Some(max_i))
}

fn check_step(a: &Array2<f64>, k: usize) -> Result<()> {
    if k >= a.nrows() || k >= a.ncols() {
        return Err(DenseError::PivotOutOfRange {
            step: k,
            n: a.nrows(),
        });
    }
    Ok(())
}

/// Select the pivot for step `k` and return copies of `a` (and `b`) with the
/// pivot row swapped into position `k`.
///
/// The caller's arrays are never modified.
///
/// # Errors
///
/// - [`DenseError::NotSquare`] / [`DenseError::EmptyMatrix`] for a bad shape
/// - [`DenseError::PivotOutOfRange`] when `k >= n`
/// - [`DenseError::DimensionMismatch`] when `b.len() != n`
pub fn select_pivot(
    a: &Array2<f64>,
    k: usize,
    b: Option<&Array1<f64>>,
) -> Result<(Array2<f64>, Option<Array1<f64>>)> {
    let n = require_square(a.nrows(), a.ncols())?;
    if k >= n {
        return Err(DenseError::PivotOutOfRange { step: k, n });
    }
    if let Some(b) = b
        && b.len() != n
    {
        return Err(DenseError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut a = a.clone();
    let mut b = b.cloned();
    pivot_in_place(&mut a, k, b.as_mut())?;

    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pivot_row_picks_largest_magnitude() {
        let a = array![[1.0, 0.0, 0.0], [-7.0, 1.0, 0.0], [5.0, 2.0, 1.0]];
        assert_eq!(pivot_row(&a, 0), Ok(1));
        assert_eq!(pivot_row(&a, 1), Ok(2));
        assert_eq!(pivot_row(&a, 2), Ok(2));
    }

    #[test]
    fn test_pivot_row_ties_keep_first() {
        let a = array![[3.0, 1.0], [-3.0, 1.0]];
        assert_eq!(pivot_row(&a, 0), Ok(0));

        let a = array![[1.0, 1.0, 1.0], [4.0, 1.0, 1.0], [-4.0, 1.0, 1.0]];
        assert_eq!(pivot_row(&a, 0), Ok(1));
    }

    #[test]
    fn test_select_pivot_swaps_trailing_columns_only() {
        // Column 0 is already eliminated; step 1 must not touch it.
        let a = array![
            [6.0, 2.0, 2.0],
            [1e-3, 0.0, -1.0],
            [-2e-3, 5.0 / 3.0, -4.0 / 3.0]
        ];
        let b = array![0.0, 5.0, 0.0];

        let (pa, pb) = select_pivot(&a, 1, Some(&b)).expect("pivot should succeed");
        let pb = pb.expect("b should be returned");

        assert_eq!(pa.row(0), a.row(0));
        assert_eq!(pa[[1, 0]], 1e-3);
        assert_eq!(pa[[2, 0]], -2e-3);
        assert_eq!(pa.slice(s![1, 1..]), a.slice(s![2, 1..]));
        assert_eq!(pa.slice(s![2, 1..]), a.slice(s![1, 1..]));
        assert_eq!(pb, array![0.0, 0.0, 5.0]);

        // The originals are untouched.
        assert_eq!(b, array![0.0, 5.0, 0.0]);
        assert_eq!(a[[1, 1]], 0.0);
    }

    #[test]
    fn test_select_pivot_no_swap_is_copy() {
        let a = array![[9.0, 1.0], [2.0, 3.0]];
        let (pa, pb) = select_pivot(&a, 0, None).expect("pivot should succeed");
        assert_eq!(pa, a);
        assert!(pb.is_none());
    }

    #[test]
    fn test_pivot_in_place_reports_swap() {
        let mut a = array![[1.0, 2.0], [3.0, 4.0]];
        let mut b = array![10.0, 20.0];

        assert_eq!(pivot_in_place(&mut a, 0, Some(&mut b)), Ok(Some(1)));
        assert_eq!(a, array![[3.0, 4.0], [1.0, 2.0]]);
        assert_eq!(b, array![20.0, 10.0]);

        assert_eq!(pivot_in_place(&mut a, 1, Some(&mut b)), Ok(None));
    }

    #[test]
    fn test_pivot_out_of_range_is_an_error() {
        let mut a = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(
            pivot_row(&a, 2),
            Err(DenseError::PivotOutOfRange { step: 2, n: 2 })
        );
        assert_eq!(
            pivot_in_place(&mut a, 5, None),
            Err(DenseError::PivotOutOfRange { step: 5, n: 2 })
        );

        let mut short = array![1.0];
        assert_eq!(
            pivot_in_place(&mut a, 0, Some(&mut short)),
            Err(DenseError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
        // Nothing was swapped.
        assert_eq!(a, array![[1.0, 2.0], [3.0, 4.0]]);

        let wide = Array2::<f64>::zeros((2, 3));
        assert!(pivot_row(&wide, 2).is_err());
    }

    #[test]
    fn test_select_pivot_errors() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];

        assert_eq!(
            select_pivot(&a, 2, None).unwrap_err(),
            DenseError::PivotOutOfRange { step: 2, n: 2 }
        );

        let b = array![1.0, 2.0, 3.0];
        assert_eq!(
            select_pivot(&a, 0, Some(&b)).unwrap_err(),
            DenseError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );

        let rect = Array2::<f64>::zeros((2, 3));
        assert!(select_pivot(&rect, 0, None).unwrap_err().is_dimension_error());
    }
}
