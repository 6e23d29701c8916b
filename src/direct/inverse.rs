//! Explicit matrix inversion solver
//!
//! Gauss-Jordan elimination with partial pivoting. This is the baseline
//! method of the benchmark: cubic work for the inverse plus a full
//! matrix-vector product, and the least numerically stable of the three.
//!
//! Singularity is not an error. A zero pivot divides through and produces
//! non-finite entries in the inverse, so a singular or near-singular input
//! yields `inf`/`NaN` or wildly inaccurate output instead of a failure.

use crate::SolveError;
use ndarray::{Array1, Array2};

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// Returns [`SolveError::NotSquare`] for non-square input. Singular input is
/// accepted and produces non-finite entries.
pub fn invert(a: &Array2<f64>) -> Result<Array2<f64>, SolveError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(SolveError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let mut m = a.clone();
    let mut inv = Array2::eye(n);

    for k in 0..n {
        // Partial pivoting: largest magnitude in column k at or below the diagonal
        let mut max_val = m[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = m[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != k {
            for j in 0..n {
                m.swap([k, j], [max_row, j]);
                inv.swap([k, j], [max_row, j]);
            }
        }

        // A zero pivot propagates inf/NaN rather than failing
        let pivot_inv = 1.0 / m[[k, k]];
        for j in 0..n {
            m[[k, j]] *= pivot_inv;
            inv[[k, j]] *= pivot_inv;
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = m[[i, k]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                let mkj = m[[k, j]];
                let ikj = inv[[k, j]];
                m[[i, j]] -= factor * mkj;
                inv[[i, j]] -= factor * ikj;
            }
        }
    }

    Ok(inv)
}

/// Solve `A x = b` as `x = A^-1 b`.
pub fn inverse_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
    let n = a.nrows();
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let inv = invert(a)?;
    Ok(inv.dot(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_invert_identity() {
        let a = Array2::eye(4);
        let inv = invert(&a).unwrap();

        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(inv[[i, j]], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_invert_2x2() {
        let a = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = invert(&a).unwrap();

        // det = 10, inverse = [[0.6, -0.7], [-0.2, 0.4]]
        assert_relative_eq!(inv[[0, 0]], 0.6, epsilon = 1e-12);
        assert_relative_eq!(inv[[0, 1]], -0.7, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 0]], -0.2, epsilon = 1e-12);
        assert_relative_eq!(inv[[1, 1]], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 0.0], [0.0, 0.0, 2.0]];
        let b = array![1.0_f64, 2.0, 4.0];

        let x = inverse_solve(&a, &b).unwrap();
        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_singular_input_does_not_panic() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]]; // rank 1
        let b = array![1.0_f64, 2.0];

        // Must not error or panic; output is non-finite or garbage
        let x = inverse_solve(&a, &b).unwrap();
        assert_eq!(x.len(), 2);
        assert!(x.iter().any(|v| !v.is_finite()) || {
            let r = &a.dot(&x) - &b;
            r.iter().any(|v| v.abs() > 1e-6)
        });
    }

    #[test]
    fn test_not_square_rejected() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            invert(&a),
            Err(SolveError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let a = Array2::<f64>::eye(3);
        let b = Array1::<f64>::zeros(2);
        assert!(matches!(
            inverse_solve(&a, &b),
            Err(SolveError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }
}
