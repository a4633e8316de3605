#![allow(non_snake_case)]
use super::solve::lusolve_with_work;
use super::{LuFactors, LuSolveError, LuSolverSettings};
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::fs::File;
use std::io::Write;

/// Running statistics of an [`LuSolver`](LuSolver)
#[derive(Debug, Clone, Default)]
pub struct LuSolveInfo<T> {
    /// number of successful solves
    pub solves: usize,
    /// infinity norm of `Ax - b` for the most recent solve, if checked
    pub residual: Option<T>,
}

/// Repeated solves against a fixed $PAQ = LU$ factorization.
///
/// The solver owns the factors and a scratch vector that is reused
/// across calls to [`solve`](LuSolver::solve).

#[derive(Debug)]
pub struct LuSolver<T: FloatT = f64> {
    factors: LuFactors<T>,
    pub settings: LuSolverSettings<T>,
    pub info: LuSolveInfo<T>,
    // original matrix, used only for residual checks
    A: Option<CscMatrix<T>>,
    rwork: Vec<T>,
    // copy of the RHS, kept only for residual checks
    bwork: Vec<T>,
    print_target: PrintTarget,
}

impl<T> LuSolver<T>
where
    T: FloatT,
{
    /// Creates a solver for the given factors.  The factor structure is
    /// validated unless `settings.check_factors` is disabled.
    pub fn new(factors: LuFactors<T>, settings: LuSolverSettings<T>) -> Result<Self, LuSolveError> {
        if settings.check_factors {
            factors.check_format()?;
        }
        let n = factors.n;

        Ok(Self {
            factors,
            settings,
            info: LuSolveInfo::default(),
            A: None,
            rwork: vec![T::zero(); n],
            bwork: Vec::new(),
            print_target: PrintTarget::default(),
        })
    }

    /// Attaches the original matrix `A` so that residuals can be reported.
    ///
    /// # Panics
    /// Panics if `A` is not `n x n`.
    pub fn attach_matrix(&mut self, A: CscMatrix<T>) {
        assert!(A.is_square());
        assert_eq!(A.nrows(), self.factors.n);
        self.A = Some(A);
    }

    /// the factorization in use
    pub fn factors(&self) -> &LuFactors<T> {
        &self.factors
    }

    /// Solves `Ax = b` in place, with `x` replacing `b`.
    ///
    /// On error the contents of `b` are unspecified.
    pub fn solve(&mut self, b: &mut [T]) -> Result<(), LuSolveError> {
        let check = self.settings.residual_check && self.A.is_some();
        if check {
            self.bwork.clear();
            self.bwork.extend_from_slice(b);
        }

        self.info.residual = None;

        if let Err(e) = lusolve_with_work(&self.factors, b, &mut self.rwork) {
            if self.settings.verbose {
                let _ = self.print_solve_failure(&e);
            }
            return Err(e);
        }
        self.info.solves += 1;

        if let (true, Some(A)) = (check, &self.A) {
            // bwork <- A*x - b
            A.gemv(&mut self.bwork, b, T::one(), -T::one());
            self.info.residual = Some(self.bwork.norm_inf());
        }

        if self.settings.verbose {
            let _ = self.print_solve_summary();
        }
        Ok(())
    }

    fn print_solve_failure(&mut self, e: &LuSolveError) -> std::io::Result<()> {
        writeln!(self.print_target, "lufact: solve failed ({e})")?;
        Ok(())
    }

    fn print_solve_summary(&mut self) -> std::io::Result<()> {
        let F = &self.factors;
        let out = &mut self.print_target;
        write!(
            out,
            "lufact v{}: solve {:>4}  n = {}  nnz(LU) = {}",
            crate::version(),
            self.info.solves,
            F.n,
            F.nnz()
        )?;
        match self.info.residual {
            Some(res) if res > self.settings.residual_tol => {
                writeln!(out, "  residual = {res:.2e} (above tol {:.2e})", self.settings.residual_tol)?;
            }
            Some(res) => writeln!(out, "  residual = {res:.2e}")?,
            None => writeln!(out)?,
        }
        Ok(())
    }
}

impl<T> ConfigurablePrintTarget for LuSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.print_target.print_to_stdout()
    }

    fn print_to_file(&mut self, file: File) {
        self.print_target.print_to_file(file)
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.print_target.print_to_stream(stream)
    }

    fn print_to_buffer(&mut self) {
        self.print_target.print_to_buffer()
    }

    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.print_target.get_print_buffer()
    }
}
