//! Solver benchmark
//!
//! Runs the three direct solvers against the same `(A, b)` pair in a fixed
//! order, timing each with a monotonic clock. Inputs are read-only; every
//! method sees the identical system, so the results are independently
//! reproducible.

use crate::SolveError;
use crate::direct::{ColPivQr, Ldlt, invert};
use ndarray::{Array1, Array2};
use std::fmt;
use std::time::Instant;

/// Identifier for one solve strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMethod {
    DirectInverse,
    QrDecomposition,
    LdltDecomposition,
}

impl SolveMethod {
    /// All methods, in reporting order: the baseline first, then the
    /// decompositions from most general to most specialized.
    pub const ALL: [SolveMethod; 3] = [
        SolveMethod::DirectInverse,
        SolveMethod::QrDecomposition,
        SolveMethod::LdltDecomposition,
    ];

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            SolveMethod::DirectInverse => "direct_inverse",
            SolveMethod::QrDecomposition => "qr_decomposition",
            SolveMethod::LdltDecomposition => "ldlt_decomposition",
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one timed solve
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub method: SolveMethod,
    /// Solution vector; may contain non-finite values for a singular system.
    pub x: Array1<f64>,
    /// Wall-clock time of the algorithmic work only (decomposition plus
    /// substitution, or inversion plus multiply).
    pub elapsed_ms: f64,
    /// Relative residual `||A x - b|| / ||b||`, computed outside the timed
    /// section.
    pub residual: f64,
}

/// Run all three methods on the same system, in [`SolveMethod::ALL`] order.
///
/// Shape preconditions are checked once, up front, before any solve is
/// attempted. Singularity is not an error: it shows up as non-finite values
/// or a large residual in the affected results.
pub fn solve_all(a: &Array2<f64>, b: &Array1<f64>) -> Result<Vec<SolveResult>, SolveError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(SolveError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut results = Vec::with_capacity(SolveMethod::ALL.len());
    for method in SolveMethod::ALL {
        let start = Instant::now();
        let x = match method {
            SolveMethod::DirectInverse => invert(a)?.dot(b),
            SolveMethod::QrDecomposition => ColPivQr::factor(a)?.solve(b)?,
            SolveMethod::LdltDecomposition => Ldlt::factor(a)?.solve(b)?,
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        let residual = relative_residual(a, &x, b);
        log::debug!("{method}: {elapsed_ms:.3} ms, relative residual {residual:.3e}");

        results.push(SolveResult {
            method,
            x,
            elapsed_ms,
            residual,
        });
    }

    Ok(results)
}

/// `||A x - b|| / ||b||`; falls back to the absolute residual norm when
/// `b` is zero.
pub fn relative_residual(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let r = &a.dot(x) - b;
    let r_norm = vector_norm(&r);
    let b_norm = vector_norm(b);
    if b_norm > 0.0 { r_norm / b_norm } else { r_norm }
}

fn vector_norm(v: &Array1<f64>) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
