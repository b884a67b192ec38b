use crate::core::traits::Real;

/// Apply a per-geometry `kernel` over a two level ragged layout, writing one value per geometry.
///
/// For each geometry `k` in `offsets0` the kernel is called with `values` and the ring offsets
/// slice `offsets1[offsets0[k] ..= offsets0[k + 1]]`, and the result stored at
/// `result[result_offset + k]`. Geometries marked in `null_mask` are skipped and get
/// [Real::nan] written instead. `result_offset` allows writing into a sub range of a larger
/// result buffer.
///
/// # Panics
///
/// Panics if `result` is too short to hold `result_offset + geometry count` values, or if
/// `null_mask` is shorter than the geometry count.
///
/// # Examples
///
/// ```
/// # use flatgeom::kernels::*;
/// # use flatgeom::core::traits::*;
/// // two triangles, the second one is null
/// let values = [0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 5.0, 5.0, 6.0, 5.0, 5.0, 6.0];
/// let offsets1 = [0, 3, 6];
/// let offsets0 = [0, 1, 2];
/// let mut result = vec![0.0f64; 3];
/// geometry_map_nested2(compute_area, &mut result, 1, &values, &offsets0, &offsets1, Some(&[false, true]));
/// assert!(result[0].fuzzy_eq(0.0));
/// assert!(result[1].fuzzy_eq(2.0));
/// assert!(result[2].is_nan());
/// ```
pub fn geometry_map_nested2<T, F>(
    kernel: F,
    result: &mut [T],
    result_offset: usize,
    values: &[T],
    offsets0: &[u32],
    offsets1: &[u32],
    null_mask: Option<&[bool]>,
) where
    T: Real,
    F: Fn(&[T], &[u32]) -> T,
{
    let geometry_count = offsets0.len().saturating_sub(1);
    for k in 0..geometry_count {
        let out = result_offset + k;
        if null_mask.is_some_and(|mask| mask[k]) {
            result[out] = T::nan();
            continue;
        }

        let start = offsets0[k] as usize;
        let stop = offsets0[k + 1] as usize;
        result[out] = kernel(values, &offsets1[start..=stop]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::traits::FuzzyEq,
        kernels::{compute_area, compute_line_length},
    };

    #[test]
    fn empty_geometry_maps_to_zero() {
        let values = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        let offsets1 = [0, 3];
        // first geometry has no rings, second has one
        let offsets0 = [0, 0, 1];
        let mut result = vec![-1.0; 2];
        geometry_map_nested2(
            compute_line_length,
            &mut result,
            0,
            &values,
            &offsets0,
            &offsets1,
            None,
        );
        assert!(result[0].fuzzy_eq(0.0));
        assert!(result[1].fuzzy_eq(2.0 + 2.0f64.sqrt()));
    }

    #[test]
    fn writes_at_result_offset() {
        // unit square followed by a null geometry and a 2x2 square
        let values = [
            0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, //
            0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0,
        ];
        let offsets1 = [0, 4, 8];
        let offsets0 = [0, 1, 1, 2];
        let mut result = vec![-1.0f64; 6];
        geometry_map_nested2(
            compute_area,
            &mut result,
            2,
            &values,
            &offsets0,
            &offsets1,
            Some(&[false, true, false]),
        );
        assert_eq!(&result[..2], &[-1.0, -1.0]);
        assert!(result[2].fuzzy_eq(1.0));
        assert!(result[3].is_nan());
        assert!(result[4].fuzzy_eq(4.0));
        assert_eq!(result[5], -1.0);
    }
}
