use ndarray::NdFloat;
use num_traits::NumCast;

/// The scalar types the solvers work with, with a shorthand for writing
/// literals in generic code.
pub trait Float: NdFloat {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f64 {}
impl Float for f32 {}
