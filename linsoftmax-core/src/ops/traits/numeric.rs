use num_traits::{Float, NumAssignOps};
use std::fmt::Debug;
use std::iter::Sum;

/// A trait representing the floating-point element types usable in matrices.
///
/// It bounds the types (`f32`, `f64`) that the generic kernels accept and
/// ensures they support the arithmetic, comparisons and conversions the loss
/// computation needs. `Send + Sync` lets both loss strategies run on separate
/// threads over shared inputs.
pub trait Scalar:
    Float // Includes Num + Copy + NumCast + exp/ln/max etc.
    + NumAssignOps // AddAssign, SubAssign, MulAssign, DivAssign, RemAssign
    + Sum
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}
