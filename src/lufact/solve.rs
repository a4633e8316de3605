#![allow(non_snake_case)]
use super::{FactorFormatError, LuFactors};
use crate::algebra::*;
use thiserror::Error;

/// Error codes returnable from the LU solve routines

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LuSolveError {
    #[error("Zero or missing pivot in column {column} of U")]
    SingularFactor { column: usize },
    #[error("Vector dimension is incompatible with the factorization")]
    IncompatibleDimension,
    #[error("Badly formatted factors: {0}")]
    BadFormat(#[from] FactorFormatError),
}

/// Solves `Ax = b` given the factorization $PAQ = LU$.
///
/// On entry `x` holds `b`; on exit it holds the solution.  A scratch
/// vector of length `n` is allocated for the intermediate solution.
///
/// On error the contents of `x` are unspecified.

pub fn lusolve<T: FloatT>(F: &LuFactors<T>, x: &mut [T]) -> Result<(), LuSolveError> {
    let mut rwork = vec![T::zero(); F.n];
    lusolve_with_work(F, x, &mut rwork)
}

// driver body, with caller supplied scratch space
pub(crate) fn lusolve_with_work<T: FloatT>(
    F: &LuFactors<T>,
    x: &mut [T],
    rwork: &mut [T],
) -> Result<(), LuSolveError> {
    lsolve(F, x, rwork)?;
    usolve(F, rwork, x)
}

/// Forward substitution with the row permuted unit lower factor.
///
/// Computes `y = L \ (P b)`.  `b` is in the caller's natural row
/// ordering, `y` is in pivot ordering.

pub fn lsolve<T: FloatT>(F: &LuFactors<T>, b: &[T], y: &mut [T]) -> Result<(), LuSolveError> {
    check_dims(F, b.len(), y.len())?;

    // y = P*b
    for (&bi, &pi) in b.iter().zip(&F.rperm) {
        y[pi] = bi;
    }

    for j in 0..F.n {
        let yj = y[j];
        if yj == T::zero() {
            continue;
        }
        let (f, l) = (F.lcolst[j], F.ucolst[j + 1]);
        for (&i, &lij) in F.lurow[f..l].iter().zip(&F.lu[f..l]) {
            y[i] -= lij * yj;
        }
    }
    Ok(())
}

/// Backward substitution with the upper factor and column permutation.
///
/// Computes `x = Q * (U \ y)`.  `y` is in pivot ordering and is used as
/// workspace, so its contents are destroyed.  `x` is in the caller's
/// natural column ordering.

pub fn usolve<T: FloatT>(F: &LuFactors<T>, y: &mut [T], x: &mut [T]) -> Result<(), LuSolveError> {
    check_dims(F, x.len(), y.len())?;

    for j in (0..F.n).rev() {
        let (f, l) = (F.ucolst[j], F.lcolst[j]);

        // the pivot is the last entry of the U part of this column
        if l <= f || F.lurow[l - 1] != j || F.lu[l - 1] == T::zero() {
            return Err(LuSolveError::SingularFactor { column: j });
        }
        let zj = y[j] / F.lu[l - 1];

        if zj != T::zero() {
            for (&i, &uij) in F.lurow[f..l - 1].iter().zip(&F.lu[f..l - 1]) {
                y[i] -= uij * zj;
            }
        }
        x[F.cperm[j]] = zj;
    }
    Ok(())
}

fn check_dims<T>(F: &LuFactors<T>, nx: usize, ny: usize) -> Result<(), LuSolveError> {
    if nx != F.n || ny != F.n {
        return Err(LuSolveError::IncompatibleDimension);
    }
    Ok(())
}
