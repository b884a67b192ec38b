use super::PolygonArraySource;
use crate::{core::traits::Real, error::GeometryError, kernels::normalized_bounds};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// Spatial index of the bounding boxes of a polygon collection.
///
/// Used as a pre-filter in front of [PolygonArraySource::intersects_bounds]: the index finds the
/// candidate polygons whose bounding box touches the query rectangle and the exact kernel is run on
/// those candidates only. Null polygons and polygons without points are not indexed.
#[derive(Debug, Clone)]
pub struct PolygonSpatialIndex<T>
where
    T: Real,
{
    index: StaticAABB2DIndex<T>,
    // polygon index for each box in `index` (in insertion order)
    polygon_indexes: Vec<usize>,
}

impl<T> PolygonSpatialIndex<T>
where
    T: Real,
{
    /// Build the index for all polygons in `array`.
    pub fn new<A>(array: &A) -> Result<Self, GeometryError>
    where
        A: PolygonArraySource<Num = T> + ?Sized,
    {
        let extents: Vec<(usize, AABB<T>)> = array
            .extents()
            .into_iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i, e)))
            .collect();

        let mut builder = StaticAABB2DIndexBuilder::new(extents.len());
        for (_, e) in extents.iter() {
            builder.add(e.min_x, e.min_y, e.max_x, e.max_y);
        }

        let index = builder
            .build()
            .map_err(|e| GeometryError::SpatialIndex(e.to_string()))?;

        log::debug!(
            "built polygon spatial index: {} of {} polygons indexed",
            extents.len(),
            array.len()
        );

        Ok(PolygonSpatialIndex {
            index,
            polygon_indexes: extents.into_iter().map(|(i, _)| i).collect(),
        })
    }

    /// Number of indexed polygons.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygon_indexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygon_indexes.is_empty()
    }

    /// Indexes (ascending) of the polygons whose bounding box overlaps or touches `bounds`.
    pub fn query(&self, bounds: &AABB<T>) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let b = normalized_bounds(bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y);
        let mut result: Vec<usize> = self
            .index
            .query(b.min_x, b.min_y, b.max_x, b.max_y)
            .into_iter()
            .map(|i| self.polygon_indexes[i])
            .collect();
        result.sort_unstable();
        result
    }

    /// Indexes (ascending) of the polygons in `array` that intersect `bounds`.
    ///
    /// Gives the same polygons as filtering [PolygonArraySource::intersects_bounds] over the whole
    /// collection. `array` must be the collection the index was built from.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::AABB;
    /// let square = |x: f64| vec![x, 0.0, x + 1.0, 0.0, x + 1.0, 1.0, x, 1.0];
    /// let array = PolygonArray::from_polygons(
    ///     (0..10).map(|i| Some(vec![square(2.0 * i as f64)])),
    ///     &PolygonBuildOptions::new(),
    /// )
    /// .unwrap();
    /// let index = array.create_aabb_index().unwrap();
    /// assert_eq!(index.intersects_bounds(&array, &AABB::new(3.5, 0.5, 6.0, 0.6)), vec![2, 3]);
    /// ```
    pub fn intersects_bounds<A>(&self, array: &A, bounds: &AABB<T>) -> Vec<usize>
    where
        A: PolygonArraySource<Num = T> + ?Sized,
    {
        let candidates = self.query(bounds);
        let hits = array.intersects_bounds(bounds, Some(&candidates));
        candidates
            .into_iter()
            .zip(hits)
            .filter_map(|(i, hit)| hit.then_some(i))
            .collect()
    }
}
