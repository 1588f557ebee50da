//! Small helpers shared by the kernels and their tests

use ndarray::{Array1, Array2, Zip};

/// The n×n identity matrix.
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Copy `a` into an `f64` working matrix.
pub fn to_f64_matrix<T: Copy + Into<f64>>(a: &Array2<T>) -> Array2<f64> {
    a.mapv(Into::into)
}

/// Copy `b` into an `f64` working vector.
pub fn to_f64_vector<T: Copy + Into<f64>>(b: &Array1<T>) -> Array1<f64> {
    b.mapv(Into::into)
}

/// Largest absolute element-wise difference between two equally shaped matrices.
///
/// Returns `f64::INFINITY` when the shapes differ.
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    if a.dim() != b.dim() {
        return f64::INFINITY;
    }
    Zip::from(a)
        .and(b)
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y).abs()))
}

/// `true` when every entry strictly below the diagonal is within `tol` of zero.
pub fn is_upper_triangular(a: &Array2<f64>, tol: f64) -> bool {
    a.indexed_iter()
        .filter(|((i, j), _)| i > j)
        .all(|(_, v)| v.abs() <= tol)
}

/// `true` when `a` has ones on the diagonal and zeros above it (within `tol`).
pub fn is_unit_lower_triangular(a: &Array2<f64>, tol: f64) -> bool {
    a.indexed_iter().all(|((i, j), v)| match i.cmp(&j) {
        std::cmp::Ordering::Less => v.abs() <= tol,
        std::cmp::Ordering::Equal => (v - 1.0).abs() <= tol,
        std::cmp::Ordering::Greater => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_cast_integer_matrix() {
        let a = array![[1, -2], [3, 4]];
        let af = to_f64_matrix(&a);
        assert_eq!(af, array![[1.0, -2.0], [3.0, 4.0]]);

        let b = array![1.5_f32, 2.0];
        assert_eq!(to_f64_vector(&b), array![1.5, 2.0]);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.5], [3.0, 3.0]];
        assert_relative_eq!(max_abs_diff(&a, &b), 1.0);
        assert!(max_abs_diff(&a, &identity(3)).is_infinite());
    }

    #[test]
    fn test_triangular_checks() {
        let u = array![[2.0, 1.0], [1e-14, 3.0]];
        assert!(is_upper_triangular(&u, 1e-12));
        assert!(!is_upper_triangular(&u, 1e-15));

        let l = array![[1.0, 0.0], [0.5, 1.0]];
        assert!(is_unit_lower_triangular(&l, 0.0));
        assert!(!is_unit_lower_triangular(&u, 1e-12));
    }
}
