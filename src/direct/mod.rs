//! Direct dense solvers
//!
//! Three strategies for `A x = b` on a dense square system:
//!
//! - [`invert`] / [`inverse_solve`]: explicit inversion, the naive baseline
//! - [`ColPivQr`]: column-pivoted Householder QR, robust for ill-conditioned
//!   and rank-deficient matrices
//! - [`Ldlt`]: `L D L^T` factorization for symmetric positive-(semi)definite
//!   matrices, the cheapest of the three when the precondition holds
//!
//! All three treat singularity as degraded output rather than an error:
//! preconditions on shape fail fast, numerical trouble does not.

mod inverse;
mod ldlt;
mod qr;

pub use inverse::{inverse_solve, invert};
pub use ldlt::Ldlt;
pub use qr::ColPivQr;
