//! __lufact__ algebra module.
//!
//! All numeric kernels in the solver are generic over floats implementing
//! [`FloatT`](crate::algebra::FloatT).  This module also provides a
//! compressed sparse column matrix type for stating problems and checking
//! residuals, plus the handful of vector norms used by the solver.

mod csc;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod vecmath;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
