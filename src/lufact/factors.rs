use crate::algebra::*;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error codes returnable from [`LuFactors::check_format`](LuFactors::check_format)

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FactorFormatError {
    #[error("Factor dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Bad column offset values")]
    BadColptr,
    #[error("Row index out of bounds or on the wrong side of the diagonal")]
    BadRowval,
    #[error("Column {column} of U does not end with its diagonal entry")]
    BadDiagonal { column: usize },
    #[error("Invalid permutation vector")]
    InvalidPermutation,
}

/// Sparse $PAQ = LU$ factorization in packed column storage.
///
/// The strictly lower part of the unit lower triangular factor `L` and the
/// upper triangular factor `U` share the value array `lu` and the row index
/// array `lurow`.  For column `j`:
///
/// * `U` occupies `ucolst[j]..lcolst[j]`, with the diagonal pivot `U[j,j]`
///   stored last.  All other entries have row index `< j`.
/// * `L` occupies `lcolst[j]..ucolst[j+1]`, with row indices `> j`.
///   The unit diagonal of `L` is implicit.
///
/// Row indices refer to the pivot ordering, i.e. to rows of `PA`.
/// Original row `i` of `A` is row `rperm[i]` of `PA`, and column `j` of
/// `AQ` is column `cperm[j]` of `A`.
///
/// __Example usage__ : the factors of
/// ```text
/// A = [2.  1.]
///     [4.  5.]
/// ```
/// with its rows exchanged by partial pivoting are
///
/// ```no_run
/// use lufact::lufact::LuFactors;
///
/// let F = LuFactors::new(
///     2,
///     vec![4.0, 0.5, 5.0, -1.5], // lu
///     vec![0, 1, 0, 1],          // lurow
///     vec![1, 4],                // lcolst
///     vec![0, 2, 4],             // ucolst
///     vec![1, 0],                // rperm
///     vec![0, 1],                // cperm
/// );
/// assert!(F.check_format().is_ok());
/// ```

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct LuFactors<T = f64> {
    /// system dimension
    pub n: usize,
    /// packed values of L and U
    pub lu: Vec<T>,
    /// packed row indices of L and U
    pub lurow: Vec<usize>,
    /// start of the L part of each column
    pub lcolst: Vec<usize>,
    /// start of the U part of each column.  Length `n+1`.
    pub ucolst: Vec<usize>,
    /// row permutation
    pub rperm: Vec<usize>,
    /// column permutation
    pub cperm: Vec<usize>,
}

impl<T> LuFactors<T>
where
    T: FloatT,
{
    /// `LuFactors` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  This constructor does __not__ check offsets, row indices
    /// or permutations.  Use [`check_format`](LuFactors::check_format) for that.

    pub fn new(
        n: usize,
        lu: Vec<T>,
        lurow: Vec<usize>,
        lcolst: Vec<usize>,
        ucolst: Vec<usize>,
        rperm: Vec<usize>,
        cperm: Vec<usize>,
    ) -> Self {
        assert_eq!(lu.len(), lurow.len());
        assert_eq!(lcolst.len(), n);
        assert_eq!(ucolst.len(), n + 1);
        assert_eq!(rperm.len(), n);
        assert_eq!(cperm.len(), n);
        assert_eq!(ucolst[n], lu.len());
        Self {
            n,
            lu,
            lurow,
            lcolst,
            ucolst,
            rperm,
            cperm,
        }
    }

    /// Constructs factors from arrays in 1-based layout, where slot 0 of
    /// every array is reserved and unused.  All offsets, row indices and
    /// permutation entries are shifted down by one.
    ///
    /// `ucolst` may either carry the upper sentinel `ucolst[n+1]` or omit it,
    /// in which case it is taken to be the end of `lu`.
    ///
    /// # Panics
    /// Panics if the arrays are too short for dimension `n` or if any index
    /// is zero.

    pub fn from_one_based(
        n: usize,
        lu: &[T],
        lurow: &[usize],
        lcolst: &[usize],
        ucolst: &[usize],
        rperm: &[usize],
        cperm: &[usize],
    ) -> Self {
        assert_eq!(lu.len(), lurow.len());
        assert!(!lu.is_empty());
        assert!(lcolst.len() > n && rperm.len() > n && cperm.len() > n);
        assert!(ucolst.len() > n);

        let shift = |v: &[usize]| -> Vec<usize> {
            v.iter()
                .map(|&i| {
                    assert!(i > 0, "zero index in 1-based factor data");
                    i - 1
                })
                .collect()
        };

        let lu = lu[1..].to_vec();
        let lurow = shift(&lurow[1..]);
        let lcolst = shift(&lcolst[1..=n]);
        let mut ucolst = shift(&ucolst[1..=n]);
        ucolst.push(lu.len());

        let rperm = shift(&rperm[1..=n]);
        let cperm = shift(&cperm[1..=n]);

        Self::new(n, lu, lurow, lcolst, ucolst, rperm, cperm)
    }

    /// number of stored nonzeros in L and U together
    pub fn nnz(&self) -> usize {
        self.ucolst[self.n]
    }

    /// Check that factor data is correctly formatted.
    pub fn check_format(&self) -> Result<(), FactorFormatError> {
        let n = self.n;

        if self.lu.len() != self.lurow.len()
            || self.lcolst.len() != n
            || self.ucolst.len() != n + 1
            || self.ucolst[n] != self.lu.len()
            || self.rperm.len() != n
            || self.cperm.len() != n
        {
            return Err(FactorFormatError::IncompatibleDimension);
        }

        // offsets must interleave as ucolst[j] <= lcolst[j] <= ucolst[j+1]
        for j in 0..n {
            if self.ucolst[j] > self.lcolst[j] || self.lcolst[j] > self.ucolst[j + 1] {
                return Err(FactorFormatError::BadColptr);
            }
        }

        for j in 0..n {
            let urows = &self.lurow[self.ucolst[j]..self.lcolst[j]];
            let lrows = &self.lurow[self.lcolst[j]..self.ucolst[j + 1]];

            match urows.split_last() {
                Some((&diag, above)) if diag == j => {
                    if above.iter().any(|&i| i >= j) {
                        return Err(FactorFormatError::BadRowval);
                    }
                }
                _ => return Err(FactorFormatError::BadDiagonal { column: j }),
            }
            if lrows.iter().any(|&i| i <= j || i >= n) {
                return Err(FactorFormatError::BadRowval);
            }
        }

        check_permutation(&self.rperm)?;
        check_permutation(&self.cperm)?;

        Ok(())
    }

    /// Returns the unit lower triangular factor `L` in pivot ordering.
    pub fn lower(&self) -> CscMatrix<T> {
        let n = self.n;
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for j in 0..n {
            rowval.push(j);
            nzval.push(T::one());
            for p in self.lcolst[j]..self.ucolst[j + 1] {
                rowval.push(self.lurow[p]);
                nzval.push(self.lu[p]);
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// Returns the upper triangular factor `U` in pivot ordering.
    pub fn upper(&self) -> CscMatrix<T> {
        let n = self.n;
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for j in 0..n {
            let rng = self.ucolst[j]..self.lcolst[j];
            rowval.extend_from_slice(&self.lurow[rng.clone()]);
            nzval.extend_from_slice(&self.lu[rng]);
            colptr.push(rowval.len());
        }
        CscMatrix::new(n, n, colptr, rowval, nzval)
    }
}

// a permutation must hit every index in 0..n exactly once
fn check_permutation(p: &[usize]) -> Result<(), FactorFormatError> {
    let mut seen = vec![false; p.len()];
    for &i in p {
        if i >= p.len() || seen[i] {
            return Err(FactorFormatError::InvalidPermutation);
        }
        seen[i] = true;
    }
    Ok(())
}
