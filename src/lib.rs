//! __lufact__ provides the solve-side kernels of a sparse direct LU solver.
//!
//! Given a sparse factorization $PAQ = LU$ produced by an upstream
//! factorization stage, the crate solves
//!
//! $$
//! Ax = b
//! $$
//!
//! in place by a permuted forward substitution with the unit lower factor $L$
//! followed by a permuted backward substitution with the upper factor $U$.
//!
//! The crate also provides the helpers the factorization stage relies on:
//!
//! * __Order statistics__: a randomized quickselect with an explicit, seedable
//!   generator, used for threshold and pivot selection.
//!
//! * __Array utilities__: overlap-aware block copies, fills, row-count
//!   histograms and storage aliasing tests.
//!
//! __Example usage__ : solve a 2 x 2 system from its factors
//!
//! ```no_run
//! use lufact::lufact::{LuFactors, LuSolver, LuSolverSettings};
//!
//! // A = [2 1; 4 5], rows swapped by pivoting so that PA = LU with
//! // L = [1 0; 0.5 1], U = [4 5; 0 -1.5]
//! let factors = LuFactors::new(
//!     2,
//!     vec![4.0, 0.5, 5.0, -1.5], // lu
//!     vec![0, 1, 0, 1],          // lurow
//!     vec![1, 4],                // lcolst
//!     vec![0, 2, 4],             // ucolst
//!     vec![1, 0],                // rperm
//!     vec![0, 1],                // cperm
//! );
//!
//! let mut solver = LuSolver::new(factors, LuSolverSettings::default()).unwrap();
//! let mut x = vec![3.0, 9.0];
//! solver.solve(&mut x).unwrap();
//! ```

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod lufact;

/// Version of this crate, as reported in verbose solver output.
pub fn version() -> &'static str {
    VERSION
}
