use super::{measures::ring_value_range, MIN_RING_POINTS};
use crate::core::{
    math::{min_max, side_of_line, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Normalize the query rectangle corners `(x0, y0)` and `(x1, y1)` (given in any order) into an
/// [AABB].
#[inline]
pub fn normalized_bounds<T>(x0: T, y0: T, x1: T, y1: T) -> AABB<T>
where
    T: Real,
{
    let (min_x, max_x) = min_max(x0, x1);
    let (min_y, max_y) = min_max(y0, y1);
    AABB::new(min_x, min_y, max_x, max_y)
}

/// Returns `true` if the segment `p0 -> p1` touches or crosses the closed rectangle `bounds`.
///
/// A segment fully inside the rectangle intersects it. Uses a separating axis test: the segment
/// bounding box must overlap the rectangle and the rectangle corners must not all lie strictly on
/// one side of the segment's line.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// # use flatgeom::core::math::*;
/// # use flatgeom::AABB;
/// let bounds = AABB::new(0.0, 0.0, 1.0, 1.0);
/// // crossing
/// assert!(segment_intersects_bounds(vec2(-1.0, 0.5), vec2(2.0, 0.5), &bounds));
/// // touching a corner
/// assert!(segment_intersects_bounds(vec2(1.0, 1.0), vec2(2.0, 2.0), &bounds));
/// // passing by the corner
/// assert!(!segment_intersects_bounds(vec2(1.5, 0.0), vec2(2.0, 1.0), &bounds));
/// ```
#[inline]
pub fn segment_intersects_bounds<T>(p0: Vector2<T>, p1: Vector2<T>, bounds: &AABB<T>) -> bool
where
    T: Real,
{
    let (seg_min_x, seg_max_x) = min_max(p0.x, p1.x);
    let (seg_min_y, seg_max_y) = min_max(p0.y, p1.y);
    if seg_max_x < bounds.min_x
        || seg_min_x > bounds.max_x
        || seg_max_y < bounds.min_y
        || seg_min_y > bounds.max_y
    {
        return false;
    }

    let s0 = side_of_line(p0, p1, Vector2::new(bounds.min_x, bounds.min_y));
    let s1 = side_of_line(p0, p1, Vector2::new(bounds.max_x, bounds.min_y));
    let s2 = side_of_line(p0, p1, Vector2::new(bounds.max_x, bounds.max_y));
    let s3 = side_of_line(p0, p1, Vector2::new(bounds.min_x, bounds.max_y));
    let zero = T::zero();
    let all_left = s0 > zero && s1 > zero && s2 > zero && s3 > zero;
    let all_right = s0 < zero && s1 < zero && s2 < zero && s3 < zero;
    !(all_left || all_right)
}

/// Returns `true` if any edge of the ring in `values[start..stop]` touches or crosses `bounds`.
#[inline]
fn ring_edges_intersect_bounds<T>(
    values: &[T],
    start: usize,
    stop: usize,
    closed: bool,
    bounds: &AABB<T>,
) -> bool
where
    T: Real,
{
    let mut p0 = Vector2::new(values[start], values[start + 1]);
    for i in (start + 2..stop).step_by(2) {
        let p1 = Vector2::new(values[i], values[i + 1]);
        if segment_intersects_bounds(p0, p1, bounds) {
            return true;
        }
        p0 = p1;
    }

    closed && segment_intersects_bounds(p0, Vector2::new(values[start], values[start + 1]), bounds)
}

/// Returns `true` if `point` lies strictly inside the ring in `values[start..stop]` using the
/// even-odd crossing rule. The ring is implicitly closed.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// # use flatgeom::core::math::*;
/// let ring = [0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0];
/// assert!(point_in_ring(&ring, 0, ring.len(), vec2(1.0, 1.0)));
/// assert!(!point_in_ring(&ring, 0, ring.len(), vec2(5.0, 1.0)));
/// ```
pub fn point_in_ring<T>(values: &[T], start: usize, stop: usize, point: Vector2<T>) -> bool
where
    T: Real,
{
    if stop - start < 2 * MIN_RING_POINTS {
        return false;
    }

    let mut inside = false;
    let mut xj = values[stop - 2];
    let mut yj = values[stop - 1];
    for i in (start..stop).step_by(2) {
        let xi = values[i];
        let yi = values[i + 1];
        if (yi > point.y) != (yj > point.y) {
            let x_cross = (xj - xi) * (point.y - yi) / (yj - yi) + xi;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        xj = xi;
        yj = yi;
    }

    inside
}

/// Test the polygon made of rings `[start_ring, stop_ring)` against `bounds`.
///
/// True on the first ring edge touching or crossing the rectangle, otherwise true if the
/// rectangle's minimum corner is inside the exterior ring (holes are not considered).
#[inline]
fn polygon_intersects_bounds<T>(
    values: &[T],
    offsets1: &[u32],
    start_ring: usize,
    stop_ring: usize,
    bounds: &AABB<T>,
) -> bool
where
    T: Real,
{
    if start_ring >= stop_ring {
        return false;
    }

    for ring in start_ring..stop_ring {
        let (start, stop) = ring_value_range(offsets1, ring);
        if stop - start < 2 * MIN_RING_POINTS {
            continue;
        }

        if ring_edges_intersect_bounds(values, start, stop, true, bounds) {
            return true;
        }
    }

    let (start, stop) = ring_value_range(offsets1, start_ring);
    point_in_ring(
        values,
        start,
        stop,
        Vector2::new(bounds.min_x, bounds.min_y),
    )
}

/// Batched bounds intersection test for polygons.
///
/// For each `i`, the polygon made of rings `[start_offsets0[i], stop_offsets0[i])` (ring indexes
/// into `offsets1`) is tested against the rectangle with corners `(x0, y0)` and `(x1, y1)` and the
/// result written to `result[i]`. A polygon intersects the rectangle if any ring edge (including
/// the closing edge) touches or crosses the closed rectangle, or if the rectangle lies inside the
/// exterior ring. Holes are not subtracted, rings with fewer than 3 points are skipped, and an
/// empty ring range never intersects.
///
/// # Panics
///
/// Panics if `result` is shorter than `start_offsets0`, or if any offset is out of bounds.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// // two unit squares, the second translated by (10, 10)
/// let values = [
///     0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0,
///     10.0, 10.0, 11.0, 10.0, 11.0, 11.0, 10.0, 11.0,
/// ];
/// let offsets1 = [0, 4, 8];
/// let mut result = [false; 2];
/// polygons_intersect_bounds(0.5, 0.5, 2.0, 2.0, &values, &[0, 1], &[1, 2], &offsets1, &mut result);
/// assert_eq!(result, [true, false]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn polygons_intersect_bounds<T>(
    x0: T,
    y0: T,
    x1: T,
    y1: T,
    values: &[T],
    start_offsets0: &[u32],
    stop_offsets0: &[u32],
    offsets1: &[u32],
    result: &mut [bool],
) where
    T: Real,
{
    debug_assert_eq!(start_offsets0.len(), stop_offsets0.len());
    let bounds = normalized_bounds(x0, y0, x1, y1);
    for (i, (&start0, &stop0)) in start_offsets0.iter().zip(stop_offsets0).enumerate() {
        result[i] =
            polygon_intersects_bounds(values, offsets1, start0 as usize, stop0 as usize, &bounds);
    }
}

/// Batched bounds intersection test for multi-lines.
///
/// Same layout as [polygons_intersect_bounds] but each ring is an open line: there is no closing
/// edge and no containment test. Lines with fewer than 2 points are skipped.
#[allow(clippy::too_many_arguments)]
pub fn multilines_intersect_bounds<T>(
    x0: T,
    y0: T,
    x1: T,
    y1: T,
    values: &[T],
    start_offsets0: &[u32],
    stop_offsets0: &[u32],
    offsets1: &[u32],
    result: &mut [bool],
) where
    T: Real,
{
    debug_assert_eq!(start_offsets0.len(), stop_offsets0.len());
    let bounds = normalized_bounds(x0, y0, x1, y1);
    for (i, (&start0, &stop0)) in start_offsets0.iter().zip(stop_offsets0).enumerate() {
        result[i] = (start0 as usize..stop0 as usize).any(|line| {
            let (start, stop) = ring_value_range(offsets1, line);
            stop - start >= 4 && ring_edges_intersect_bounds(values, start, stop, false, &bounds)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn test_single(values: &[f64], offsets1: &[u32], bounds: (f64, f64, f64, f64)) -> bool {
        let mut result = [false];
        let stop = offsets1.len() as u32 - 1;
        polygons_intersect_bounds(
            bounds.0, bounds.1, bounds.2, bounds.3, values, &[0], &[stop], offsets1, &mut result,
        );
        result[0]
    }

    const SQUARE_WITH_HOLE: [f64; 20] = [
        0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0, //
        1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 3.0, 1.0, 1.0, 1.0,
    ];

    #[test]
    fn rectangle_crossing_shell() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (-1.0, -1.0, 0.5, 0.5)));
    }

    #[test]
    fn rectangle_inside_shell() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (0.25, 0.25, 0.75, 0.75)));
    }

    #[test]
    fn rectangle_inside_hole_still_intersects() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (1.5, 1.5, 2.5, 2.5)));
    }

    #[test]
    fn rectangle_enclosing_polygon() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn rectangle_touching_edge() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (4.0, 1.0, 5.0, 2.0)));
    }

    #[test]
    fn rectangle_disjoint() {
        assert!(!test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (4.5, 4.5, 5.0, 5.0)));
        assert!(!test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (-2.0, 1.0, -1.0, 2.0)));
    }

    #[test]
    fn unordered_corners_are_normalized() {
        assert!(test_single(&SQUARE_WITH_HOLE, &[0, 5, 10], (0.75, 0.75, 0.25, 0.25)));
    }

    #[test]
    fn empty_ring_range_never_intersects() {
        let mut result = [true];
        polygons_intersect_bounds(
            -1.0,
            -1.0,
            1.0,
            1.0,
            &SQUARE_WITH_HOLE,
            &[1],
            &[1],
            &[0, 5, 10],
            &mut result,
        );
        assert!(!result[0]);
    }

    #[test]
    fn segment_fully_inside_bounds() {
        let bounds = AABB::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment_intersects_bounds(vec2(1.0, 1.0), vec2(2.0, 3.0), &bounds));
        // degenerate segment (point) inside and outside
        assert!(segment_intersects_bounds(vec2(5.0, 5.0), vec2(5.0, 5.0), &bounds));
        assert!(!segment_intersects_bounds(vec2(11.0, 5.0), vec2(11.0, 5.0), &bounds));
    }

    #[test]
    fn multiline_has_no_closing_edge_or_containment() {
        // "U" shaped open line around the query rectangle
        let values = [0.0, 4.0, 0.0, 0.0, 4.0, 0.0, 4.0, 4.0];
        let mut result = [true];
        multilines_intersect_bounds(1.0, 1.0, 3.0, 3.0, &values, &[0], &[1], &[0, 4], &mut result);
        assert!(!result[0]);
        // as a ring the closing edge misses the rectangle too, but the ring contains it
        assert!(test_single(&values, &[0, 4], (1.0, 1.0, 3.0, 3.0)));
        // rectangle reaching the right side of the line
        multilines_intersect_bounds(1.0, 1.0, 4.5, 3.0, &values, &[0], &[1], &[0, 4], &mut result);
        assert!(result[0]);
    }
}
