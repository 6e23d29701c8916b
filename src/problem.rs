//! Random problem generation
//!
//! Builds the benchmark input: a symmetric positive-semidefinite matrix `A`
//! and a right-hand side `b`, both filled from a caller-supplied RNG so runs
//! are reproducible under a fixed seed.

use ndarray::{Array1, Array2};
use rand::Rng;

/// A dense linear system `A x = b`
///
/// `a` is square, exactly symmetric, and positive-semidefinite by
/// construction (`A = R R^T` for a random `R`). Strict positive-definiteness
/// is not guaranteed: a pathological draw can be singular, which the solvers
/// tolerate.
#[derive(Debug, Clone)]
pub struct Problem {
    pub a: Array2<f64>,
    pub b: Array1<f64>,
}

impl Problem {
    /// Generate a random system of the given size.
    ///
    /// Entries of the factor `R` and of `b` are drawn uniformly from
    /// `[-1, 1)`. The exact distribution is not load-bearing; only
    /// solvability and relative solver runtimes matter.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let r = Array2::from_shape_fn((size, size), |_| rng.random_range(-1.0..1.0));
        // R * R^T guarantees symmetry and a non-negative spectrum
        let a = r.dot(&r.t());
        let b = Array1::from_shape_fn(size, |_| rng.random_range(-1.0..1.0));
        Self { a, b }
    }

    /// Dimension of the system.
    pub fn size(&self) -> usize {
        self.b.len()
    }
}
