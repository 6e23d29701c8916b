//! LDLT (Cholesky-variant) solver
//!
//! Factors a symmetric matrix as `A = L D L^T` with unit lower-triangular
//! `L` and diagonal `D`, then solves by forward substitution, a diagonal
//! scale, and back substitution. Unlike plain Cholesky this needs no square
//! roots and remains defined for positive-semidefinite matrices, which is
//! exactly what the benchmark's `R R^T` construction produces.
//!
//! Symmetry is a precondition, not checked: only the lower triangle of the
//! input is read. Non-positive-definite input does not raise an error; a
//! near-zero pivot zeroes the dependent multipliers so a singular
//! semidefinite draw degrades to a finite (if not unique) solution.

use crate::SolveError;
use ndarray::{Array1, Array2};

/// LDLT factorization of a symmetric matrix
///
/// Reusable: factor once, then [`solve`](Ldlt::solve) any number of
/// right-hand sides.
#[derive(Debug, Clone)]
pub struct Ldlt {
    /// Unit lower-triangular factor (diagonal stored as 1).
    l: Array2<f64>,
    /// Diagonal of `D`.
    d: Array1<f64>,
    /// Pivot threshold used during factorization, kept for the solve.
    pivot_tol: f64,
    n: usize,
}

impl Ldlt {
    /// Factor a symmetric matrix. Only the lower triangle is read.
    pub fn factor(a: &Array2<f64>) -> Result<Self, SolveError> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(SolveError::NotSquare {
                rows: n,
                cols: a.ncols(),
            });
        }

        // Scale-relative threshold below which a pivot is treated as zero
        let max_diag = (0..n).map(|i| a[[i, i]].abs()).fold(0.0_f64, f64::max);
        let pivot_tol = max_diag * n as f64 * f64::EPSILON;

        let mut l = Array2::eye(n);
        let mut d = Array1::zeros(n);

        for j in 0..n {
            let mut dj = a[[j, j]];
            for k in 0..j {
                dj -= l[[j, k]] * l[[j, k]] * d[k];
            }
            d[j] = dj;

            let skip = dj.abs() <= pivot_tol;
            for i in (j + 1)..n {
                if skip {
                    // semidefinite direction: leave the multiplier at zero
                    l[[i, j]] = 0.0;
                    continue;
                }
                let mut sum = a[[i, j]];
                for k in 0..j {
                    sum -= l[[i, k]] * l[[j, k]] * d[k];
                }
                l[[i, j]] = sum / dj;
            }
        }

        Ok(Self { l, d, pivot_tol, n })
    }

    /// Solve `A x = b`: forward substitution with `L`, scale by `D^-1`,
    /// back substitution with `L^T`. Zero pivots contribute a zero
    /// coefficient instead of dividing through.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
        if b.len() != self.n {
            return Err(SolveError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let n = self.n;

        // L y = b (unit diagonal)
        let mut y = b.clone();
        for i in 0..n {
            for j in 0..i {
                let l_ij = self.l[[i, j]];
                y[i] = y[i] - l_ij * y[j];
            }
        }

        // D z = y
        for i in 0..n {
            y[i] = if self.d[i].abs() <= self.pivot_tol {
                0.0
            } else {
                y[i] / self.d[i]
            };
        }

        // L^T x = z
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let l_ji = self.l[[j, i]];
                let yj = y[j];
                y[i] -= l_ji * yj;
            }
        }

        Ok(y)
    }

    /// Whether the factored matrix is positive-semidefinite, judged from
    /// the inertia of `D` (Sylvester's law): no pivot meaningfully below
    /// zero.
    pub fn is_positive_semidefinite(&self) -> bool {
        self.d.iter().all(|&dj| dj >= -self.pivot_tol)
    }

    /// Diagonal of `D`.
    pub fn d(&self) -> &Array1<f64> {
        &self.d
    }
}
