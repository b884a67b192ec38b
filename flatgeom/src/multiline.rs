//! Multi-line views over the ragged buffer layout.
//!
//! A polygon collection and a multi-line collection have the same physical layout, the views here
//! read the same buffers with line semantics: lines are open (no closing edge) and nothing is
//! contained by a line.
use crate::{
    core::traits::Real,
    kernels::{compute_extents, compute_open_line_length, multilines_intersect_bounds},
    polygon::{map_measure, select_ring_ranges},
    ragged::{RaggedArray2View, RingBufferView},
};
use static_aabb2d_index::AABB;
use std::ops::Range;

/// Borrowed single multi-line, e.g. the boundary of a polygon.
#[derive(Debug, Copy, Clone)]
pub struct MultiLineView<'a, T = f64> {
    lines: RingBufferView<'a, T>,
}

impl<'a, T> MultiLineView<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new(lines: RingBufferView<'a, T>) -> Self {
        MultiLineView { lines }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.ring_count()
    }

    /// Flat coordinates of line `i`.
    #[inline]
    pub fn line(&self, i: usize) -> &'a [T] {
        self.lines.ring(i)
    }

    /// Total length of all lines.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::core::traits::*;
    /// // open square path, the boundary of an unclosed ring has no closing edge
    /// let ring = vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
    /// let polygon = Polygon::from_rings(&[ring], &PolygonBuildOptions::new()).unwrap();
    /// assert!(polygon.length().fuzzy_eq(8.0));
    /// assert!(polygon.boundary().length().fuzzy_eq(6.0));
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        compute_open_line_length(self.lines.coords(), self.lines.ring_offsets())
    }

    /// Returns true if any line segment touches or crosses `bounds`.
    pub fn intersects_bounds(&self, bounds: &AABB<T>) -> bool {
        let mut result = [false];
        multilines_intersect_bounds(
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
            self.lines.coords(),
            &[0],
            &[self.line_count() as u32],
            self.lines.ring_offsets(),
            &mut result,
        );
        result[0]
    }

    #[inline]
    pub fn extents(&self) -> Option<AABB<T>> {
        compute_extents(self.lines.coords(), self.lines.ring_offsets())
    }

    #[inline]
    pub fn detach(self) -> RingBufferView<'a, T> {
        self.lines
    }
}

/// Borrowed collection of multi-lines, e.g. the boundaries of a polygon collection.
#[derive(Debug, Copy, Clone)]
pub struct MultiLineArrayView<'a, T = f64> {
    buffers: RaggedArray2View<'a, T>,
}

impl<'a, T> MultiLineArrayView<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new(buffers: RaggedArray2View<'a, T>) -> Self {
        MultiLineArrayView { buffers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        self.buffers.is_null(i)
    }

    /// Multi-line `i`, `None` if out of bounds or null.
    #[inline]
    pub fn get(&self, i: usize) -> Option<MultiLineView<'a, T>> {
        self.buffers.get(i).map(MultiLineView::new)
    }

    /// Sub collection of the multi-lines in `range`, no coordinates are copied.
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> MultiLineArrayView<'a, T> {
        MultiLineArrayView::new(self.buffers.slice(range))
    }

    /// Length of every multi-line (NaN for null entries).
    #[inline]
    pub fn length(&self) -> Vec<T> {
        map_measure(self.buffers, compute_open_line_length)
    }

    /// Bounds intersection test for every multi-line or only those in `indices`, see
    /// [PolygonArraySource::intersects_bounds](crate::polygon::PolygonArraySource::intersects_bounds).
    pub fn intersects_bounds(&self, bounds: &AABB<T>, indices: Option<&[usize]>) -> Vec<bool> {
        let (start_offsets0, stop_offsets0) =
            select_ring_ranges(self.buffers.geom_offsets(), indices);
        let mut result = vec![false; start_offsets0.len()];
        multilines_intersect_bounds(
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
            self.buffers.coords(),
            &start_offsets0,
            &stop_offsets0,
            self.buffers.ring_offsets(),
            &mut result,
        );

        for (k, r) in result.iter_mut().enumerate() {
            let i = indices.map_or(k, |indices| indices[k]);
            if self.buffers.is_null(i) {
                *r = false;
            }
        }

        result
    }

    #[inline]
    pub fn detach(self) -> RaggedArray2View<'a, T> {
        self.buffers
    }
}
