use ndarray::NdFloat;
use num_traits::NumCast;

/// Floating point element type of all tableaus, problems and solvers in this
/// crate.
///
/// The `cast` helper lets defaults such as tolerances be written once as
/// `f64` literals and converted to whichever precision the caller picked.
pub trait Float: NdFloat {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f64 {}
impl Float for f32 {}
