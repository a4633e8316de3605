//! Sparse LU solve kernels and factorization helpers.
//!
//! The solve path consumes an already computed $PAQ = LU$ factorization
//! ([`LuFactors`]) and performs a permuted forward substitution
//! ([`lsolve`]) followed by a permuted backward substitution ([`usolve`]).
//! [`lusolve`] runs both, and [`LuSolver`] wraps them with reusable
//! workspace, settings and verbose output.
//!
//! The factorization stage itself lives upstream.  It uses the order
//! statistic selector [`kth_smallest`] and the helpers in [`arrays`].

pub mod arrays;
mod factors;
#[cfg(feature = "serde")]
mod json;
mod ordstat;
mod settings;
mod solve;
mod solver;

pub use factors::*;
pub use ordstat::*;
pub use settings::*;
pub use solve::{lsolve, lusolve, usolve, LuSolveError};
pub use solver::*;

//configure tests of internals
#[path = "test.rs"]
#[cfg(test)]
mod test;
