#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in the LU solver.
///
/// All floating point calculations in the solve kernels and the order
/// statistic selector are carried out on values implementing `FloatT`.
/// Implementations are provided for any type satisfying the trait bounds,
/// which in practice means f32 and f64.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.
pub trait FloatT:
    'static + Send + Float + NumAssign + Default + FromPrimitive + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f64 and is used by
/// the [solver settings](crate::lufact::LuSolverSettings) to convert
/// defaults of primitive type to [`FloatT`](crate::algebra::FloatT).

// NB: `AsFloatT` lets us write (2.0).as_T() on constants
// rather than T::from_f64(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(f64, from_f64);
