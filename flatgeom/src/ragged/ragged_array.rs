use super::{
    offsets_item_count, start_stop, validate_offsets, RaggedArray2Builder, RingBufferView,
};
use crate::{
    core::traits::Real,
    error::{GeometryError, OffsetLevel},
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned two level ragged array: many geometries sharing one flat coordinate buffer.
///
/// Geometry `k` occupies rings `[geom_offsets[k], geom_offsets[k + 1])`, ring `i` occupies
/// coordinate pairs `[ring_offsets[i], ring_offsets[i + 1])`. `null_mask[k]` is true if geometry
/// `k` is missing, `None` means no geometry is missing. Buffers are immutable once constructed.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        try_from = "RaggedArray2Data<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct RaggedArray2<T = f64> {
    coords: Vec<T>,
    ring_offsets: Vec<u32>,
    geom_offsets: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    null_mask: Option<Vec<bool>>,
}

impl<T> Default for RaggedArray2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RaggedArray2<T>
where
    T: Real,
{
    /// Create a new empty [RaggedArray2] (no geometries).
    #[inline]
    pub fn new() -> Self {
        RaggedArray2 {
            coords: Vec::new(),
            ring_offsets: vec![0],
            geom_offsets: vec![0],
            null_mask: None,
        }
    }

    /// Create a [RaggedArray2] from raw buffers, validating that they form a consistent two level
    /// CSR index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::ragged::*;
    /// let coords = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    /// let array = RaggedArray2::try_new(coords.clone(), vec![0, 3], vec![0, 1, 1], Some(vec![false, true]));
    /// assert!(array.is_ok());
    /// // geometry offsets do not end at the ring count
    /// assert!(RaggedArray2::try_new(coords, vec![0, 3], vec![0, 2], None).is_err());
    /// ```
    pub fn try_new(
        coords: Vec<T>,
        ring_offsets: Vec<u32>,
        geom_offsets: Vec<u32>,
        null_mask: Option<Vec<bool>>,
    ) -> Result<Self, GeometryError> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount { len: coords.len() });
        }

        validate_offsets(&ring_offsets, coords.len() / 2, OffsetLevel::Ring)?;
        validate_offsets(
            &geom_offsets,
            offsets_item_count(&ring_offsets),
            OffsetLevel::Geometry,
        )?;

        let geometry_count = offsets_item_count(&geom_offsets);
        if let Some(mask) = &null_mask {
            if mask.len() != geometry_count {
                return Err(GeometryError::NullMaskLength {
                    expected: geometry_count,
                    found: mask.len(),
                });
            }
        }

        log::debug!(
            "validated ragged array: {} geometries, {} rings, {} coordinate pairs",
            geometry_count,
            offsets_item_count(&ring_offsets),
            coords.len() / 2
        );

        Ok(Self::from_parts_unchecked(
            coords,
            ring_offsets,
            geom_offsets,
            null_mask,
        ))
    }

    #[inline]
    pub(crate) fn from_parts_unchecked(
        coords: Vec<T>,
        ring_offsets: Vec<u32>,
        geom_offsets: Vec<u32>,
        null_mask: Option<Vec<bool>>,
    ) -> Self {
        RaggedArray2 {
            coords,
            ring_offsets,
            geom_offsets,
            null_mask,
        }
    }

    /// Build an array from a sequence of geometries, each a list of flat rings, `None` for a null
    /// geometry.
    pub fn from_nested<G, I, R>(geometries: G, orient: bool) -> Result<Self, GeometryError>
    where
        G: IntoIterator<Item = Option<I>>,
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let geometries = geometries.into_iter();
        let mut builder = RaggedArray2Builder::with_capacity(geometries.size_hint().0);
        for geometry in geometries {
            match geometry {
                Some(rings) => builder.push_rings(rings, orient)?,
                None => builder.push_null(),
            }
        }

        Ok(builder.build())
    }

    /// Number of geometries.
    #[inline]
    pub fn len(&self) -> usize {
        offsets_item_count(&self.geom_offsets)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    #[inline]
    pub fn ring_offsets(&self) -> &[u32] {
        &self.ring_offsets
    }

    #[inline]
    pub fn geom_offsets(&self) -> &[u32] {
        &self.geom_offsets
    }

    #[inline]
    pub fn null_mask(&self) -> Option<&[bool]> {
        self.null_mask.as_deref()
    }

    /// Borrow the whole array as a [RaggedArray2View].
    #[inline]
    pub fn as_view(&self) -> RaggedArray2View<'_, T> {
        RaggedArray2View {
            coords: &self.coords,
            ring_offsets: &self.ring_offsets,
            geom_offsets: &self.geom_offsets,
            null_mask: self.null_mask.as_deref(),
        }
    }
}

/// Borrowed two level ragged array, possibly a sub range of a larger array.
///
/// `coords` and `ring_offsets` are always the full buffers of the source array, only
/// `geom_offsets` and `null_mask` are narrowed when slicing so no coordinate is ever copied.
#[derive(Debug, Copy, Clone)]
pub struct RaggedArray2View<'a, T = f64> {
    coords: &'a [T],
    ring_offsets: &'a [u32],
    geom_offsets: &'a [u32],
    null_mask: Option<&'a [bool]>,
}

impl<'a, T> RaggedArray2View<'a, T>
where
    T: Real,
{
    /// Number of geometries.
    #[inline]
    pub fn len(&self) -> usize {
        offsets_item_count(self.geom_offsets)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn coords(&self) -> &'a [T] {
        self.coords
    }

    #[inline]
    pub fn ring_offsets(&self) -> &'a [u32] {
        self.ring_offsets
    }

    /// Geometry offsets, `len() + 1` entries indexing into [RaggedArray2View::ring_offsets].
    #[inline]
    pub fn geom_offsets(&self) -> &'a [u32] {
        self.geom_offsets
    }

    #[inline]
    pub fn null_mask(&self) -> Option<&'a [bool]> {
        self.null_mask
    }

    /// Returns true if geometry `i` is null.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds and a null mask is present.
    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        self.null_mask.is_some_and(|mask| mask[i])
    }

    /// Rings of geometry `i`, `None` if `i` is out of bounds or the geometry is null.
    #[inline]
    pub fn get(&self, i: usize) -> Option<RingBufferView<'a, T>> {
        if i >= self.len() || self.is_null(i) {
            return None;
        }

        Some(self.rings_unchecked(i))
    }

    /// Rings of geometry `i` ignoring the null mask.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn rings_unchecked(&self, i: usize) -> RingBufferView<'a, T> {
        let (start, stop) = start_stop(self.geom_offsets, i);
        RingBufferView::new(self.coords, &self.ring_offsets[start..=stop])
    }

    /// Narrow the view to geometries in `range` without copying.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> RaggedArray2View<'a, T> {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "slice range {:?} out of bounds for length {}",
            range,
            self.len()
        );
        RaggedArray2View {
            coords: self.coords,
            ring_offsets: self.ring_offsets,
            geom_offsets: &self.geom_offsets[range.start..=range.end],
            null_mask: self.null_mask.map(|mask| &mask[range]),
        }
    }

    /// Copy the viewed geometries into a compact owned [RaggedArray2].
    pub fn to_ragged_array(&self) -> Result<RaggedArray2<T>, GeometryError> {
        let mut builder = RaggedArray2Builder::with_capacity(self.len());
        for i in 0..self.len() {
            match self.get(i) {
                Some(rings) => builder.push_view(rings)?,
                None => builder.push_null(),
            }
        }

        Ok(builder.build())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RaggedArray2Data<T> {
    coords: Vec<T>,
    ring_offsets: Vec<u32>,
    geom_offsets: Vec<u32>,
    #[serde(default)]
    null_mask: Option<Vec<bool>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RaggedArray2Data<T>> for RaggedArray2<T>
where
    T: Real,
{
    type Error = GeometryError;

    fn try_from(value: RaggedArray2Data<T>) -> Result<Self, Self::Error> {
        RaggedArray2::try_new(
            value.coords,
            value.ring_offsets,
            value.geom_offsets,
            value.null_mask,
        )
    }
}
