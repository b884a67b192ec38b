use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use flatgeom::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance between `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn dist<T>(x0: T, y0: T, x1: T, y1: T) -> T
where
    T: Real,
{
    let dx = x1 - x0;
    let dy = y1 - y0;
    (dx * dx + dy * dy).sqrt()
}

/// Signed value of which side of the directed line `p0 -> p1` the `point` is on.
///
/// Positive if `point` is left of the line, negative if right, zero if collinear. The magnitude is
/// twice the area of the triangle `(p0, p1, point)`.
///
/// # Examples
///
/// ```
/// # use flatgeom::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(1.0, 0.0);
/// assert!(side_of_line(p0, p1, Vector2::new(0.5, 1.0)) > 0.0);
/// assert!(side_of_line(p0, p1, Vector2::new(0.5, -1.0)) < 0.0);
/// assert_eq!(side_of_line(p0, p1, Vector2::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn side_of_line<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0)
}
