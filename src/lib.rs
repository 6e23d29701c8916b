//! Dense direct solvers for square linear systems
//!
//! This crate benchmarks three numerically distinct strategies for solving
//! `A x = b` on the same dense, symmetric positive-semidefinite system:
//!
//! - **Direct inversion**: explicit `A^-1` via Gauss-Jordan elimination,
//!   then a matrix-vector product. The naive baseline.
//! - **Column-pivoted QR**: Householder factorization `A P = Q R`, robust
//!   for ill-conditioned and rank-deficient matrices.
//! - **LDLT**: `A = L D L^T` for symmetric positive-(semi)definite
//!   matrices, the fastest of the three when the precondition holds.
//!
//! # Example
//!
//! ```
//! use dense_solvers::{Problem, solve_all};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let problem = Problem::generate(8, &mut rng);
//! let results = solve_all(&problem.a, &problem.b).unwrap();
//!
//! assert_eq!(results.len(), 3);
//! for result in &results {
//!     println!("{}: {:.3} ms", result.method, result.elapsed_ms);
//! }
//! ```

pub mod bench;
pub mod direct;
pub mod problem;
pub mod report;

pub use bench::{SolveMethod, SolveResult, solve_all};
pub use direct::{ColPivQr, Ldlt, inverse_solve, invert};
pub use problem::Problem;

/// Errors for solver preconditions
///
/// Singularity is deliberately not represented here: a singular or
/// near-singular system degrades to non-finite or inaccurate output
/// instead of failing (see the individual solver docs).
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("dimension mismatch: matrix is {expected}x{expected} but vector has length {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
