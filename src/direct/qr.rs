//! Column-pivoted QR solver
//!
//! Householder factorization `A P = Q R` with greedy column pivoting: at
//! each step the remaining column with the largest norm is moved into pivot
//! position. Pivoting keeps the factorization usable for ill-conditioned and
//! rank-deficient matrices, where plain QR (and certainly plain inversion)
//! degrades badly.
//!
//! Storage is packed, LAPACK style: `R` lives in the upper triangle, the
//! Householder vectors (scaled so their leading entry is an implicit 1)
//! below the diagonal, and the `tau` scalars in a side vector.

use crate::SolveError;
use ndarray::{Array1, Array2};

/// Column-pivoted QR factorization of a square matrix
///
/// Reusable: factor once, then [`solve`](ColPivQr::solve) any number of
/// right-hand sides.
#[derive(Debug, Clone)]
pub struct ColPivQr {
    /// Packed factorization: R on and above the diagonal, scaled Householder
    /// vectors below.
    qr: Array2<f64>,
    /// Householder scalar factors; 0 marks a skipped (numerically zero) column.
    tau: Vec<f64>,
    /// perm[k] = original index of the column in pivot position k.
    perm: Vec<usize>,
    n: usize,
}

impl ColPivQr {
    /// Factor a square matrix.
    ///
    /// Rank deficiency is tolerated: a remaining block of numerically zero
    /// columns simply stops producing reflectors.
    pub fn factor(a: &Array2<f64>) -> Result<Self, SolveError> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(SolveError::NotSquare {
                rows: n,
                cols: a.ncols(),
            });
        }

        let mut qr = a.clone();
        let mut tau = vec![0.0; n];
        let mut perm: Vec<usize> = (0..n).collect();

        for col in 0..n {
            // Greedy pivot: remaining column with the largest sub-column norm
            let mut best = col;
            let mut best_norm_sq = sub_column_norm_sq(&qr, col, col);
            for j in (col + 1)..n {
                let norm_sq = sub_column_norm_sq(&qr, col, j);
                if norm_sq > best_norm_sq {
                    best = j;
                    best_norm_sq = norm_sq;
                }
            }

            if best != col {
                for i in 0..n {
                    qr.swap([i, col], [i, best]);
                }
                perm.swap(col, best);
            }

            // Numerically zero trailing block: no reflector, R entries stay ~0
            if best_norm_sq <= f64::MIN_POSITIVE {
                continue;
            }

            // Householder vector v = x + sign(x0) * ||x|| * e1, stored as
            // v / v0 with the leading 1 implicit. tau = v0 / sigma gives
            // H = I - tau * u * u^T with u = v / v0.
            let norm = best_norm_sq.sqrt();
            let akk = qr[[col, col]];
            let sigma = if akk >= 0.0 { norm } else { -norm };
            let v0 = akk + sigma;
            let tau_val = v0 / sigma;
            tau[col] = tau_val;

            for i in (col + 1)..n {
                qr[[i, col]] /= v0;
            }

            // Apply H to the trailing columns
            for j in (col + 1)..n {
                let mut dot = qr[[col, j]];
                for i in (col + 1)..n {
                    dot += qr[[i, col]] * qr[[i, j]];
                }
                dot *= tau_val;

                qr[[col, j]] -= dot;
                for i in (col + 1)..n {
                    let vi = qr[[i, col]];
                    qr[[i, j]] -= dot * vi;
                }
            }

            qr[[col, col]] = -sigma;
        }

        Ok(Self { qr, tau, perm, n })
    }

    /// Solve `A x = b` using the factorization.
    ///
    /// Computes `y = Q^T b`, back-substitutes `R z = y`, and undoes the
    /// column permutation. Diagonal entries of `R` below the rank threshold
    /// contribute a zero coefficient (a basic solution) instead of failing.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
        if b.len() != self.n {
            return Err(SolveError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let n = self.n;
        let mut y = b.clone();

        // y = Q^T b: apply the reflectors in factorization order
        for col in 0..n {
            let tau_val = self.tau[col];
            if tau_val == 0.0 {
                continue;
            }
            let mut dot = y[col];
            for i in (col + 1)..n {
                dot += self.qr[[i, col]] * y[i];
            }
            dot *= tau_val;

            y[col] -= dot;
            for i in (col + 1)..n {
                y[i] -= dot * self.qr[[i, col]];
            }
        }

        // Rank threshold relative to the largest diagonal of R
        let max_diag = (0..n)
            .map(|k| self.qr[[k, k]].abs())
            .fold(0.0_f64, f64::max);
        let tol = max_diag * n as f64 * f64::EPSILON;

        // Back substitution R z = y
        let mut z = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= self.qr[[i, j]] * z[j];
            }
            let r_ii = self.qr[[i, i]];
            z[i] = if r_ii.abs() <= tol { 0.0 } else { sum / r_ii };
        }

        // x = P z: position k of the pivoted system is original column perm[k]
        let mut x = Array1::zeros(n);
        for k in 0..n {
            x[self.perm[k]] = z[k];
        }

        Ok(x)
    }

    /// Numerical rank estimate from the diagonal of `R`.
    pub fn rank(&self) -> usize {
        let max_diag = (0..self.n)
            .map(|k| self.qr[[k, k]].abs())
            .fold(0.0_f64, f64::max);
        let tol = max_diag * self.n as f64 * f64::EPSILON;
        (0..self.n)
            .filter(|&k| self.qr[[k, k]].abs() > tol)
            .count()
    }
}

fn sub_column_norm_sq(m: &Array2<f64>, from_row: usize, col: usize) -> f64 {
    let mut sum = 0.0;
    for i in from_row..m.nrows() {
        sum += m[[i, col]] * m[[i, col]];
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_qr_solve_spd() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 0.0], [0.0, 0.0, 2.0]];
        let b = array![1.0_f64, 2.0, 4.0];

        let x = ColPivQr::factor(&a).unwrap().solve(&b).unwrap();

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_qr_solve_nonsymmetric() {
        // Column pivoting makes no symmetry assumption
        let a = array![[2.0_f64, 1.0, 3.0], [0.0, -1.0, 4.0], [5.0, 2.0, 1.0]];
        let b = array![6.0_f64, 3.0, 8.0];

        let x = ColPivQr::factor(&a).unwrap().solve(&b).unwrap();

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_qr_rank_deficient_stays_finite() {
        // rank 1, consistent right-hand side
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let b = array![1.0_f64, 2.0];

        let qr = ColPivQr::factor(&a).unwrap();
        assert_eq!(qr.rank(), 1);

        let x = qr.solve(&b).unwrap();
        assert!(x.iter().all(|v| v.is_finite()));

        // the basic solution still satisfies the consistent system
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_qr_zero_matrix_stays_finite() {
        let a = Array2::<f64>::zeros((3, 3));
        let b = array![1.0_f64, 2.0, 3.0];

        let qr = ColPivQr::factor(&a).unwrap();
        assert_eq!(qr.rank(), 0);

        let x = qr.solve(&b).unwrap();
        assert!(x.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_qr_factor_once_solve_many() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let qr = ColPivQr::factor(&a).unwrap();

        for b in [array![1.0_f64, 2.0], array![5.0_f64, -1.0]] {
            let x = qr.solve(&b).unwrap();
            let ax = a.dot(&x);
            for i in 0..2 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_qr_dimension_checks() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            ColPivQr::factor(&a),
            Err(SolveError::NotSquare { rows: 2, cols: 3 })
        ));

        let a = Array2::<f64>::eye(3);
        let qr = ColPivQr::factor(&a).unwrap();
        let b = Array1::<f64>::zeros(4);
        assert!(matches!(
            qr.solve(&b),
            Err(SolveError::DimensionMismatch {
                expected: 3,
                got: 4
            })
        ));
    }
}
