//! Determinants, cofactors and inversion by the adjugate
//!
//! The determinant is computed by recursive cofactor expansion along the
//! first row. This is the O(n!) textbook algorithm and is only practical for
//! small matrices (n ≤ ~10). Minors are evaluated over row/column index
//! lists, so no sub-matrix is copied during the recursion.

use crate::error::{DenseError, Result, require_square};
use crate::matrix::to_f64_matrix;
use ndarray::Array2;

/// Determinant of `a` by cofactor expansion along row 0.
///
/// # Errors
///
/// [`DenseError::NotSquare`] / [`DenseError::EmptyMatrix`] for a bad shape.
pub fn determinant<T: Copy + Into<f64>>(a: &Array2<T>) -> Result<f64> {
    let n = require_square(a.nrows(), a.ncols())?;
    let a = to_f64_matrix(a);
    let all: Vec<usize> = (0..n).collect();
    Ok(det_masked(&a, &all, &all))
}

/// Minor of `a`: the determinant with `row` and `col` deleted.
///
/// # Errors
///
/// - [`DenseError::NotSquare`] / [`DenseError::EmptyMatrix`] for a bad shape
/// - [`DenseError::DimensionMismatch`] for a 1×1 matrix (its minor is empty)
/// - [`DenseError::IndexOutOfRange`] when `row` or `col` is outside the matrix
pub fn minor<T: Copy + Into<f64>>(a: &Array2<T>, row: usize, col: usize) -> Result<f64> {
    let n = check_minor_args(a, row, col)?;
    let a = to_f64_matrix(a);
    Ok(minor_unchecked(&a, n, row, col))
}

/// The (n-1)×(n-1) matrix left after deleting `row` and `col`.
///
/// # Errors
///
/// Same as [`minor`].
pub fn minor_matrix<T: Copy + Into<f64>>(
    a: &Array2<T>,
    row: usize,
    col: usize,
) -> Result<Array2<f64>> {
    let n = check_minor_args(a, row, col)?;
    let rows: Vec<usize> = (0..n).filter(|&i| i != row).collect();
    let cols: Vec<usize> = (0..n).filter(|&j| j != col).collect();
    Ok(Array2::from_shape_fn((n - 1, n - 1), |(i, j)| {
        a[[rows[i], cols[j]]].into()
    }))
}

/// Cofactor matrix: `cof[i, j] = (-1)^(i+j) · minor(a, i, j)`.
///
/// A 1×1 matrix has the single cofactor `1` (the determinant of the empty
/// minor).
///
/// # Errors
///
/// [`DenseError::NotSquare`] / [`DenseError::EmptyMatrix`] for a bad shape.
pub fn cofactors<T: Copy + Into<f64>>(a: &Array2<T>) -> Result<Array2<f64>> {
    let n = require_square(a.nrows(), a.ncols())?;
    let a = to_f64_matrix(a);
    Ok(Array2::from_shape_fn((n, n), |(i, j)| {
        sign(i + j) * minor_unchecked(&a, n, i, j)
    }))
}

/// Owned transpose of `a`.
pub fn transpose(a: &Array2<f64>) -> Array2<f64> {
    a.t().to_owned()
}

/// Adjugate: the transpose of the cofactor matrix.
///
/// # Errors
///
/// Same as [`cofactors`].
pub fn adjugate<T: Copy + Into<f64>>(a: &Array2<T>) -> Result<Array2<f64>> {
    Ok(transpose(&cofactors(a)?))
}

/// Inverse of `a` as `adj(a) / det(a)`.
///
/// # Errors
///
/// - [`DenseError::SingularMatrix`] when the determinant is exactly zero
/// - shape errors as for [`cofactors`]
pub fn invert<T: Copy + Into<f64>>(a: &Array2<T>) -> Result<Array2<f64>> {
    let det = determinant(a)?;
    if det == 0.0 {
        return Err(DenseError::SingularMatrix);
    }
    let adj = adjugate(a)?;
    Ok(adj * (1.0 / det))
}

fn check_minor_args<T>(a: &Array2<T>, row: usize, col: usize) -> Result<usize> {
    let n = require_square(a.nrows(), a.ncols())?;
    if n < 2 {
        return Err(DenseError::DimensionMismatch {
            expected: 2,
            got: n,
        });
    }
    if row >= n || col >= n {
        return Err(DenseError::IndexOutOfRange { row, col, n });
    }
    Ok(n)
}

fn minor_unchecked(a: &Array2<f64>, n: usize, row: usize, col: usize) -> f64 {
    let rows: Vec<usize> = (0..n).filter(|&i| i != row).collect();
    let cols: Vec<usize> = (0..n).filter(|&j| j != col).collect();
    det_masked(a, &rows, &cols)
}

/// Determinant of the sub-matrix of `a` selected by `rows` × `cols`.
fn det_masked(a: &Array2<f64>, rows: &[usize], cols: &[usize]) -> f64 {
    match rows.len() {
        0 => 1.0,
        1 => a[[rows[0], cols[0]]],
        2 => {
            a[[rows[0], cols[0]]] * a[[rows[1], cols[1]]]
                - a[[rows[0], cols[1]]] * a[[rows[1], cols[0]]]
        }
        _ => {
            let top = rows[0];
            let rest = &rows[1..];
            let mut sub_cols = Vec::with_capacity(cols.len() - 1);
            let mut det = 0.0;
            for (i, &col) in cols.iter().enumerate() {
                sub_cols.clear();
                sub_cols.extend(cols.iter().copied().filter(|&c| c != col));
                det += sign(i) * a[[top, col]] * det_masked(a, rest, &sub_cols);
            }
            det
        }
    }
}

#[inline]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{identity, max_abs_diff};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_determinant_2x2_exact() {
        let (a, b, c, d) = (0.1, 0.7, 0.3, 0.9);
        let m = array![[a, b], [c, d]];
        assert_eq!(determinant(&m).unwrap(), a * d - b * c);
    }

    #[test]
    fn test_determinant_3x3() {
        let a = array![[4, 9, 2], [3, 5, 7], [8, 1, 6]];
        assert_relative_eq!(determinant(&a).unwrap(), 360.0, epsilon = 1e-12);

        let a = array![[2.0, -2.0, 1.0], [0.0, 4.0, 1.0], [1.0, 1.0, 3.0]];
        assert_relative_eq!(determinant(&a).unwrap(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_4x4() {
        let a = array![
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0]
        ];
        assert_relative_eq!(determinant(&a).unwrap(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_1x1_and_errors() {
        assert_eq!(determinant(&array![[-3.5]]).unwrap(), -3.5);
        assert_eq!(
            determinant(&Array2::<f64>::zeros((2, 3))).unwrap_err(),
            DenseError::NotSquare { rows: 2, cols: 3 }
        );
        assert_eq!(
            determinant(&Array2::<f64>::zeros((0, 0))).unwrap_err(),
            DenseError::EmptyMatrix
        );
    }

    #[test]
    fn test_minor_and_minor_matrix() {
        let a = array![[4, 9, 2], [3, 5, 7], [8, 1, 6]];

        let sub = minor_matrix(&a, 1, 2).unwrap();
        assert_eq!(sub, array![[4.0, 9.0], [8.0, 1.0]]);
        assert_eq!(minor(&a, 1, 2).unwrap(), 4.0 - 72.0);

        assert_eq!(
            minor(&a, 3, 0).unwrap_err(),
            DenseError::IndexOutOfRange { row: 3, col: 0, n: 3 }
        );
        assert!(minor(&array![[1.0]], 0, 0).is_err());
    }

    #[test]
    fn test_cofactors_and_adjugate() {
        let a = array![[4, 9, 2], [3, 5, 7], [8, 1, 6]];

        let cof = cofactors(&a).unwrap();
        let expected = array![
            [23.0, 38.0, -37.0],
            [-52.0, 8.0, 68.0],
            [53.0, -22.0, -7.0]
        ];
        assert!(max_abs_diff(&cof, &expected) < 1e-12);

        let adj = adjugate(&a).unwrap();
        assert!(max_abs_diff(&adj, &transpose(&expected)) < 1e-12);
    }

    #[test]
    fn test_invert_reference() {
        let a = array![[4.0, 9.0, 2.0], [3.0, 5.0, 7.0], [8.0, 1.0, 6.0]];

        let inv = invert(&a).unwrap();
        let reference = array![
            [23.0, -52.0, 53.0],
            [38.0, 8.0, -22.0],
            [-37.0, 68.0, -7.0]
        ] / 360.0;
        assert!(max_abs_diff(&inv, &reference) < 1e-12);
        assert!(max_abs_diff(&a.dot(&inv), &identity(3)) < 1e-12);
    }

    #[test]
    fn test_invert_2x2() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = invert(&a).unwrap();
        let reference = array![[0.6, -0.7], [-0.2, 0.4]];
        assert!(max_abs_diff(&inv, &reference) < 1e-12);
    }

    #[test]
    fn test_invert_1x1() {
        assert_eq!(cofactors(&array![[7.0]]).unwrap(), array![[1.0]]);
        assert_eq!(adjugate(&array![[7.0]]).unwrap(), array![[1.0]]);
        assert_eq!(invert(&array![[2.0]]).unwrap(), array![[0.5]]);
        assert_eq!(invert(&array![[-4]]).unwrap(), array![[-0.25]]);
        assert_eq!(
            invert(&array![[0.0]]).unwrap_err(),
            DenseError::SingularMatrix
        );
    }

    #[test]
    fn test_invert_singular() {
        let a = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(invert(&a).unwrap_err(), DenseError::SingularMatrix);
    }

    #[test]
    fn test_transpose() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(transpose(&a), array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }
}
