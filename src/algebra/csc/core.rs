#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use lufact::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///

#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds.  Use
    /// [`check_format`](CscMatrix::check_format) for that.
    ///

    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// Builds a sparse matrix from dense rows, dropping exact zeros.
    ///
    /// # Panics
    /// Panics if the rows are of unequal length.
    pub fn from_dense(rows: &[Vec<T>]) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == n));

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..n {
            for (row, r) in rows.iter().enumerate() {
                if r[col] != T::zero() {
                    rowval.push(row);
                    nzval.push(r[col]);
                }
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index, or zero if
    /// the index is not a structural nonzero.  Duplicate entries are summed.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> T {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        self.rowval[first..last]
            .iter()
            .zip(&self.nzval[first..last])
            .filter(|&(&r, _)| r == row)
            .fold(T::zero(), |acc, (_, &v)| acc + v)
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );

    assert_eq!(A.get_entry((1, 0)), 1.);
    assert_eq!(A.get_entry((5, 0)), 3.);
    assert_eq!(A.get_entry((0, 1)), 4.);
    assert_eq!(A.get_entry((3, 2)), 10.);
    assert_eq!(A.get_entry((4, 4)), 14.);

    assert_eq!(A.get_entry((0, 0)), 0.);
    assert_eq!(A.get_entry((2, 3)), 0.);
}

#[test]
fn test_csc_from_dense() {
    let A = CscMatrix::from_dense(&[vec![1., 3., 5.], vec![2., 0., 6.], vec![0., 4., 7.]]);
    assert!(A.check_format().is_ok());
    assert_eq!(A.colptr, vec![0, 2, 4, 7]);
    assert_eq!(A.rowval, vec![0, 1, 0, 2, 0, 1, 2]);
    assert_eq!(A.nzval, vec![1., 2., 3., 4., 5., 6., 7.]);
}

#[test]
fn test_csc_check_format() {
    let mut A = CscMatrix::<f64>::identity(3);
    assert!(A.check_format().is_ok());

    A.rowval[1] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let mut A = CscMatrix::<f64>::identity(3);
    A.colptr[1] = 2;
    A.colptr[2] = 1;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));
}
