use super::ring_signed_area;
use crate::core::traits::Real;

/// Reverse the point order of a flat `[x0, y0, x1, y1, ...]` ring in place.
#[inline]
pub fn reverse_ring_coords<T>(coords: &mut [T]) {
    coords.reverse();
    for pair in coords.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

/// Orient a flat ring in place so it is counter clockwise (`ccw` is true) or clockwise (`ccw` is
/// false). Returns `true` if the ring was reversed.
///
/// Rings with zero signed area (including degenerate rings) are left as given.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// let mut ring = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
/// assert!(orient_ring_coords(&mut ring, true));
/// assert_eq!(ring, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
/// // already counter clockwise
/// assert!(!orient_ring_coords(&mut ring, true));
/// ```
pub fn orient_ring_coords<T>(coords: &mut [T], ccw: bool) -> bool
where
    T: Real,
{
    let area = ring_signed_area(coords, 0, coords.len());
    let needs_reverse = if ccw {
        area < T::zero()
    } else {
        area > T::zero()
    };

    if needs_reverse {
        reverse_ring_coords(coords);
        log::trace!(
            "reversed ring with {} points to {} orientation",
            coords.len() / 2,
            if ccw { "counter clockwise" } else { "clockwise" }
        );
    }

    needs_reverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_keeps_pairs_together() {
        let mut ring = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        reverse_ring_coords(&mut ring);
        assert_eq!(ring, vec![5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn orient_hole_clockwise() {
        let mut hole = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        assert!(orient_ring_coords(&mut hole, false));
        assert!(ring_signed_area(&hole, 0, hole.len()) < 0.0);
    }

    #[test]
    fn degenerate_ring_untouched() {
        let mut ring = vec![0.0, 0.0, 1.0, 1.0];
        assert!(!orient_ring_coords(&mut ring, true));
        assert_eq!(ring, vec![0.0, 0.0, 1.0, 1.0]);
    }
}
