use super::FloatT;

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// Infinity norm of the elementwise difference `self - b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;
}

/// Matrix-vector products for matrices of [`FloatT`](crate::algebra::FloatT)

pub trait MatrixVectorMultiply {
    type T: FloatT;

    /// BLAS-like general matrix-vector multiply.  Produces `y = a*self*x + b*y`
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}
