use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for [`LuSolver`](crate::lufact::LuSolver)
///
/// __Example usage__ :
///
/// ```no_run
/// use lufact::lufact::LuSolverSettingsBuilder;
///
/// let settings = LuSolverSettingsBuilder::<f64>::default()
///     .verbose(true)
///     .residual_tol(1e-10)
///     .build()
///     .unwrap();
/// ```

#[derive(Builder, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LuSolverSettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///validate the factor structure on construction
    #[builder(default = "true")]
    pub check_factors: bool,

    ///compute the residual of each solve against an attached matrix
    #[builder(default = "false")]
    pub residual_check: bool,

    ///residual level above which verbose output flags a solve
    #[builder(default = "(1e-8).as_T()")]
    pub residual_tol: T,
}

impl<T> Default for LuSolverSettings<T>
where
    T: FloatT,
{
    fn default() -> LuSolverSettings<T> {
        LuSolverSettingsBuilder::<T>::default().build().unwrap()
    }
}
