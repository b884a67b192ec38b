use crate::core::{math::dist, traits::Real};
use static_aabb2d_index::AABB;

/// Minimum number of points for a ring to have a non-zero perimeter or area.
pub const MIN_RING_POINTS: usize = 3;

/// Returns the `[start, stop)` range of a ring in the flat coordinate buffer (float indexes).
#[inline]
pub(crate) fn ring_value_range(value_offsets: &[u32], ring: usize) -> (usize, usize) {
    (
        2 * value_offsets[ring] as usize,
        2 * value_offsets[ring + 1] as usize,
    )
}

/// Length of the path through the points in `values[start..stop]`, `closed` adds the edge from
/// the last point back to the first.
#[inline]
fn path_length<T>(values: &[T], start: usize, stop: usize, closed: bool) -> T
where
    T: Real,
{
    let mut total = T::zero();
    let mut x0 = values[start];
    let mut y0 = values[start + 1];
    for i in (start + 2..stop).step_by(2) {
        let x1 = values[i];
        let y1 = values[i + 1];
        total = total + dist(x0, y0, x1, y1);
        x0 = x1;
        y0 = y1;
    }

    if closed {
        total = total + dist(x0, y0, values[start], values[start + 1]);
    }

    total
}

/// Total perimeter of all the rings in `value_offsets`.
///
/// Every ring is implicitly closed (the edge from the last point back to the first is included, it
/// has zero length if the ring repeats its first point). Holes count positively. Rings with fewer
/// than [MIN_RING_POINTS] points contribute zero.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// # use flatgeom::core::traits::*;
/// let values = [0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0];
/// assert!(compute_line_length(&values, &[0, 5]).fuzzy_eq(8.0));
/// // same square without the repeated closing point
/// assert!(compute_line_length(&values, &[0, 4]).fuzzy_eq(8.0));
/// ```
pub fn compute_line_length<T>(values: &[T], value_offsets: &[u32]) -> T
where
    T: Real,
{
    let mut total = T::zero();
    for ring in 0..value_offsets.len().saturating_sub(1) {
        let (start, stop) = ring_value_range(value_offsets, ring);
        if stop - start < 2 * MIN_RING_POINTS {
            continue;
        }

        total = total + path_length(values, start, stop, true);
    }

    total
}

/// Total length of all the open lines in `value_offsets`.
///
/// No closing edge is added. Lines with fewer than 2 points contribute zero.
pub fn compute_open_line_length<T>(values: &[T], value_offsets: &[u32]) -> T
where
    T: Real,
{
    let mut total = T::zero();
    for line in 0..value_offsets.len().saturating_sub(1) {
        let (start, stop) = ring_value_range(value_offsets, line);
        if stop - start < 4 {
            continue;
        }

        total = total + path_length(values, start, stop, false);
    }

    total
}

/// Signed area of the ring in `values[start..stop]` using the shoelace formula.
///
/// Positive for counter clockwise rings, negative for clockwise rings, zero for rings with fewer
/// than [MIN_RING_POINTS] points.
pub fn ring_signed_area<T>(values: &[T], start: usize, stop: usize) -> T
where
    T: Real,
{
    if stop - start < 2 * MIN_RING_POINTS {
        return T::zero();
    }

    let mut double_area = T::zero();
    let mut x0 = values[stop - 2];
    let mut y0 = values[stop - 1];
    for i in (start..stop).step_by(2) {
        let x1 = values[i];
        let y1 = values[i + 1];
        double_area = double_area + x0 * y1 - x1 * y0;
        x0 = x1;
        y0 = y1;
    }

    double_area / T::two()
}

/// Area of the polygon described by the rings in `value_offsets`.
///
/// Ring 0 is the exterior shell, all following rings are holes. The result is
/// `|area(shell)| - sum(|area(hole)|)`, so ring orientation does not change the result. A shell
/// with fewer than [MIN_RING_POINTS] points gives zero regardless of its holes. Holes are
/// assumed to be nested inside the shell and not to overlap each other, this is not checked.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// # use flatgeom::core::traits::*;
/// let values = [
///     // shell
///     0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0,
///     // unit square hole
///     0.5, 0.5, 1.5, 0.5, 1.5, 1.5, 0.5, 1.5, 0.5, 0.5,
/// ];
/// assert!(compute_area(&values, &[0, 5]).fuzzy_eq(4.0));
/// assert!(compute_area(&values, &[0, 5, 10]).fuzzy_eq(3.0));
/// ```
pub fn compute_area<T>(values: &[T], value_offsets: &[u32]) -> T
where
    T: Real,
{
    let ring_count = value_offsets.len().saturating_sub(1);
    if ring_count == 0 {
        return T::zero();
    }

    let (start, stop) = ring_value_range(value_offsets, 0);
    if stop - start < 2 * MIN_RING_POINTS {
        // degenerate shell, holes are not subtracted
        return T::zero();
    }

    let mut area = ring_signed_area(values, start, stop).abs();
    for ring in 1..ring_count {
        let (start, stop) = ring_value_range(value_offsets, ring);
        area = area - ring_signed_area(values, start, stop).abs();
    }

    area
}

/// Bounding box of every point of every ring in `value_offsets`, `None` if there are no points.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// let values = [1.0, 5.0, 3.0, -1.0, 2.0, 2.0];
/// let extents = compute_extents(&values, &[0, 2, 3]).unwrap();
/// assert_eq!((extents.min_x, extents.min_y, extents.max_x, extents.max_y), (1.0, -1.0, 3.0, 5.0));
/// assert!(compute_extents(&values, &[1, 1]).is_none());
/// ```
pub fn compute_extents<T>(values: &[T], value_offsets: &[u32]) -> Option<AABB<T>>
where
    T: Real,
{
    let first = 2 * *value_offsets.first()? as usize;
    let last = 2 * *value_offsets.last()? as usize;
    if first >= last {
        return None;
    }

    let mut result = AABB::new(values[first], values[first + 1], values[first], values[first + 1]);
    for p in values[first + 2..last].chunks_exact(2) {
        result.min_x = num_traits::real::Real::min(result.min_x, p[0]);
        result.min_y = num_traits::real::Real::min(result.min_y, p[1]);
        result.max_x = num_traits::real::Real::max(result.max_x, p[0]);
        result.max_y = num_traits::real::Real::max(result.max_y, p[1]);
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn degenerate_rings_contribute_zero() {
        // two point "ring" followed by a triangle
        let values = [0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let offsets = [0, 2, 5];
        assert!(compute_line_length(&values, &offsets[..2]).fuzzy_eq(0.0));
        assert!(compute_area(&values, &offsets[..2]).fuzzy_eq(0.0));
        assert!(compute_line_length(&values, &offsets).fuzzy_eq(2.0 + 2.0f64.sqrt()));
    }

    #[test]
    fn degenerate_shell_ignores_holes() {
        // two point shell followed by a unit square hole
        let values = [0.0, 0.0, 4.0, 0.0, 1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0];
        let offsets = [0, 2, 6];
        assert!(compute_area(&values, &offsets).fuzzy_eq(0.0));
        assert!(compute_line_length(&values, &offsets).fuzzy_eq(4.0));
    }

    #[test]
    fn ring_signed_area_sign_follows_orientation() {
        let ccw = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let cw = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
        assert!(ring_signed_area(&ccw, 0, 8).fuzzy_eq(1.0));
        assert!(ring_signed_area(&cw, 0, 8).fuzzy_eq(-1.0));
    }

    #[test]
    fn offsets_into_shared_buffer() {
        // ring offsets do not need to start at zero
        let values = [9.0, 9.0, 0.0, 0.0, 3.0, 0.0, 3.0, 4.0];
        assert!(compute_line_length(&values, &[1, 4]).fuzzy_eq(12.0));
        assert!(compute_area(&values, &[1, 4]).fuzzy_eq(6.0));
    }

    #[test]
    fn open_lines_skip_closing_edge() {
        let values = [0.0, 0.0, 3.0, 0.0, 3.0, 4.0, 7.0, 7.0];
        assert!(compute_open_line_length(&values, &[0, 3, 4]).fuzzy_eq(7.0));
    }

    #[test]
    fn empty_offsets() {
        let values: [f64; 0] = [];
        assert!(compute_area(&values, &[0]).fuzzy_eq(0.0));
        assert!(compute_area(&values, &[]).fuzzy_eq(0.0));
        assert!(compute_line_length(&values, &[]).fuzzy_eq(0.0));
    }
}
