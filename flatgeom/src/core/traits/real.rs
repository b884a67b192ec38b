use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real coordinate value (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and
/// stored in a spatial index.
///
/// All the kernels in this crate are generic over this trait, `f64` is the default everywhere a
/// type parameter is defaulted.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Value written for missing (null) results.
    fn nan() -> Self;
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn nan() -> Self {
        f32::NAN
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn nan() -> Self {
        f64::NAN
    }
}
