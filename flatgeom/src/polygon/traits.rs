use super::{Polygon, PolygonArray, PolygonArrayView, PolygonSpatialIndex, PolygonView};
use crate::{
    core::{math::Vector2, traits::Real},
    error::GeometryError,
    kernels::{
        compute_area, compute_extents, compute_line_length, geometry_map_nested2,
        polygons_intersect_bounds,
    },
    multiline::{MultiLineArrayView, MultiLineView},
    ragged::{RaggedArray2View, RingBufferView},
};
use static_aabb2d_index::AABB;
use std::ops::Range;

/// Trait representing a readonly source of a single polygon: an exterior ring followed by zero or
/// more hole rings stored in the ragged ring layout.
///
/// Implemented by the owned [Polygon] and the borrowed [PolygonView]. All measures are computed
/// directly over the flat coordinate buffer.
pub trait PolygonSource {
    /// Numeric type used for coordinates.
    type Num: Real;

    /// Borrow the rings of the polygon.
    fn rings(&self) -> RingBufferView<'_, Self::Num>;

    /// Total number of rings (exterior plus holes).
    #[inline]
    fn ring_count(&self) -> usize {
        self.rings().ring_count()
    }

    /// Returns true if the polygon has no rings.
    #[inline]
    fn is_empty(&self) -> bool {
        self.ring_count() == 0
    }

    /// Flat coordinates of ring `i`, ring 0 is the exterior.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    fn ring(&self, i: usize) -> &[Self::Num] {
        self.rings().ring(i)
    }

    /// Flat coordinates of the exterior ring, `None` if the polygon has no rings.
    #[inline]
    fn exterior(&self) -> Option<&[Self::Num]> {
        if self.is_empty() {
            None
        } else {
            Some(self.ring(0))
        }
    }

    /// Iterate over the flat coordinates of the hole rings.
    #[inline]
    fn interiors(&self) -> impl Iterator<Item = &[Self::Num]> + '_ {
        self.rings().iter_rings().skip(1)
    }

    /// Reshape ring `i` into points.
    #[inline]
    fn ring_points(&self, i: usize) -> Vec<Vector2<Self::Num>> {
        self.rings().ring_points(i)
    }

    /// Reshape every ring into points, for handing over to an external shape representation.
    fn to_ring_points(&self) -> Vec<Vec<Vector2<Self::Num>>> {
        let rings = self.rings();
        (0..rings.ring_count())
            .map(|i| rings.ring_points(i))
            .collect()
    }

    /// Total perimeter of all rings, see [compute_line_length].
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::core::traits::*;
    /// let square = vec![0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0];
    /// let polygon = Polygon::from_rings(&[square], &PolygonBuildOptions::new()).unwrap();
    /// assert!(polygon.length().fuzzy_eq(8.0));
    /// ```
    #[inline]
    fn length(&self) -> Self::Num {
        let rings = self.rings();
        compute_line_length(rings.coords(), rings.ring_offsets())
    }

    /// Area of the exterior minus the area of the holes, see [compute_area].
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::core::traits::*;
    /// let square = vec![0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0];
    /// let hole = vec![0.5, 0.5, 1.5, 0.5, 1.5, 1.5, 0.5, 1.5, 0.5, 0.5];
    /// let polygon = Polygon::from_rings(&[square, hole], &PolygonBuildOptions::new()).unwrap();
    /// assert!(polygon.area().fuzzy_eq(3.0));
    /// ```
    #[inline]
    fn area(&self) -> Self::Num {
        let rings = self.rings();
        compute_area(rings.coords(), rings.ring_offsets())
    }

    /// Returns true if any ring edge touches or crosses `bounds`, or `bounds` lies inside the
    /// exterior ring. Holes are not subtracted, this is a conservative pre-filter test.
    ///
    /// Computed with the same batched kernel used by [PolygonArraySource::intersects_bounds].
    fn intersects_bounds(&self, bounds: &AABB<Self::Num>) -> bool {
        let rings = self.rings();
        let mut result = [false];
        polygons_intersect_bounds(
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
            rings.coords(),
            &[0],
            &[rings.ring_count() as u32],
            rings.ring_offsets(),
            &mut result,
        );
        result[0]
    }

    /// Bounding box of all ring points, `None` if there are no points.
    #[inline]
    fn extents(&self) -> Option<AABB<Self::Num>> {
        let rings = self.rings();
        compute_extents(rings.coords(), rings.ring_offsets())
    }

    /// The rings of the polygon viewed as a multi-line (same buffers, no copy).
    #[inline]
    fn boundary(&self) -> MultiLineView<'_, Self::Num> {
        MultiLineView::new(self.rings())
    }

    /// Copy into a new owned [Polygon].
    #[inline]
    fn to_polygon(&self) -> Polygon<Self::Num> {
        Polygon::from_ring_buffer(self.rings().to_ring_buffer())
    }
}

/// Compute one value per geometry with `kernel`, NaN for null geometries.
pub(crate) fn map_measure<T>(buffers: RaggedArray2View<'_, T>, kernel: fn(&[T], &[u32]) -> T) -> Vec<T>
where
    T: Real,
{
    let mut result = vec![T::nan(); buffers.len()];
    geometry_map_nested2(
        kernel,
        &mut result,
        0,
        buffers.coords(),
        buffers.geom_offsets(),
        buffers.ring_offsets(),
        buffers.null_mask(),
    );
    result
}

/// Start and stop ring offsets for the geometries selected by `indices` (all if `None`).
///
/// # Panics
///
/// Panics if an index is out of bounds.
pub(crate) fn select_ring_ranges(
    geom_offsets: &[u32],
    indices: Option<&[usize]>,
) -> (Vec<u32>, Vec<u32>) {
    match indices {
        Some(indices) => indices
            .iter()
            .map(|&i| (geom_offsets[i], geom_offsets[i + 1]))
            .unzip(),
        None => {
            let n = geom_offsets.len().saturating_sub(1);
            (geom_offsets[..n].to_vec(), geom_offsets[1..].to_vec())
        }
    }
}

/// Trait representing a readonly collection of polygons stored in the two level ragged layout.
///
/// Implemented by the owned [PolygonArray] and the borrowed [PolygonArrayView]. Reductions return
/// one value per polygon, NaN for null polygons.
pub trait PolygonArraySource {
    /// Numeric type used for coordinates.
    type Num: Real;

    /// Borrow the underlying ragged buffers.
    fn buffers(&self) -> RaggedArray2View<'_, Self::Num>;

    /// Number of polygons (null polygons included).
    #[inline]
    fn len(&self) -> usize {
        self.buffers().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if polygon `i` is null.
    #[inline]
    fn is_null(&self, i: usize) -> bool {
        self.buffers().is_null(i)
    }

    /// Polygon `i`, `None` if out of bounds or null. The returned view borrows the shared
    /// coordinate buffer.
    #[inline]
    fn get(&self, i: usize) -> Option<PolygonView<'_, Self::Num>> {
        self.buffers().get(i).map(PolygonView::new)
    }

    /// Iterate over all polygons, `None` for null polygons.
    #[inline]
    fn iter(&self) -> impl Iterator<Item = Option<PolygonView<'_, Self::Num>>> + '_ {
        let buffers = self.buffers();
        (0..buffers.len()).map(move |i| buffers.get(i).map(PolygonView::new))
    }

    /// Sub collection of the polygons in `range`, no coordinates are copied.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[inline]
    fn slice(&self, range: Range<usize>) -> PolygonArrayView<'_, Self::Num> {
        PolygonArrayView::new(self.buffers().slice(range))
    }

    /// Perimeter of every polygon (NaN for null polygons).
    #[inline]
    fn length(&self) -> Vec<Self::Num> {
        map_measure(self.buffers(), compute_line_length)
    }

    /// Area of every polygon (NaN for null polygons).
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::core::traits::*;
    /// let square = vec![0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0];
    /// let array = PolygonArray::from_polygons(
    ///     vec![Some(vec![square.clone()]), None],
    ///     &PolygonBuildOptions::new(),
    /// )
    /// .unwrap();
    /// let area: Vec<f64> = array.area();
    /// assert!(area[0].fuzzy_eq(4.0));
    /// assert!(area[1].is_nan());
    /// ```
    #[inline]
    fn area(&self) -> Vec<Self::Num> {
        map_measure(self.buffers(), compute_area)
    }

    /// Bounds intersection test for every polygon, or only for the polygons in `indices` (result
    /// then has `indices.len()` entries in the same order). All selected polygons are tested in a
    /// single batched kernel call. Null polygons never intersect.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    fn intersects_bounds(&self, bounds: &AABB<Self::Num>, indices: Option<&[usize]>) -> Vec<bool> {
        let buffers = self.buffers();
        let (start_offsets0, stop_offsets0) = select_ring_ranges(buffers.geom_offsets(), indices);
        let mut result = vec![false; start_offsets0.len()];
        polygons_intersect_bounds(
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
            buffers.coords(),
            &start_offsets0,
            &stop_offsets0,
            buffers.ring_offsets(),
            &mut result,
        );

        if buffers.null_mask().is_some() {
            for (k, r) in result.iter_mut().enumerate() {
                let i = indices.map_or(k, |indices| indices[k]);
                if buffers.is_null(i) {
                    *r = false;
                }
            }
        }

        result
    }

    /// Bounding box of every polygon, `None` for null polygons and polygons without points.
    fn extents(&self) -> Vec<Option<AABB<Self::Num>>> {
        self.iter()
            .map(|polygon| polygon.and_then(|p| p.extents()))
            .collect()
    }

    /// Bounding box of all non-null polygons.
    fn total_extents(&self) -> Option<AABB<Self::Num>> {
        self.extents().into_iter().flatten().reduce(|acc, e| {
            AABB::new(
                num_traits::real::Real::min(acc.min_x, e.min_x),
                num_traits::real::Real::min(acc.min_y, e.min_y),
                num_traits::real::Real::max(acc.max_x, e.max_x),
                num_traits::real::Real::max(acc.max_y, e.max_y),
            )
        })
    }

    /// Creates a spatial index of the polygon bounding boxes, see [PolygonSpatialIndex].
    #[inline]
    fn create_aabb_index(&self) -> Result<PolygonSpatialIndex<Self::Num>, GeometryError> {
        PolygonSpatialIndex::new(self)
    }

    /// The collection viewed as multi-lines (same buffers, no copy).
    #[inline]
    fn boundary(&self) -> MultiLineArrayView<'_, Self::Num> {
        MultiLineArrayView::new(self.buffers())
    }

    /// Copy into a compact owned [PolygonArray].
    #[inline]
    fn to_polygon_array(&self) -> Result<PolygonArray<Self::Num>, GeometryError> {
        Ok(PolygonArray::from_buffers(self.buffers().to_ragged_array()?))
    }
}
