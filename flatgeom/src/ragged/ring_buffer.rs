use super::{append_rings, offsets_item_count, start_stop, validate_offsets};
use crate::{
    core::{math::Vector2, traits::Real},
    error::{GeometryError, OffsetLevel},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned rings of a single geometry stored as one flat coordinate buffer plus ring offsets.
///
/// `ring_offsets` has one more entry than there are rings and is in units of coordinate pairs, ring
/// `i` occupies pairs `[ring_offsets[i], ring_offsets[i + 1])` of `coords`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        try_from = "RingBufferData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer<T = f64> {
    coords: Vec<T>,
    ring_offsets: Vec<u32>,
}

impl<T> Default for RingBuffer<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingBuffer<T>
where
    T: Real,
{
    /// Create a new [RingBuffer] with no rings.
    #[inline]
    pub fn new() -> Self {
        RingBuffer {
            coords: Vec::new(),
            ring_offsets: vec![0],
        }
    }

    /// Create a [RingBuffer] from an existing flat coordinate buffer and ring offsets.
    ///
    /// Fails if `coords` has an odd length or `ring_offsets` does not cover exactly all the
    /// coordinate pairs.
    pub fn try_new(coords: Vec<T>, ring_offsets: Vec<u32>) -> Result<Self, GeometryError> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount { len: coords.len() });
        }

        validate_offsets(&ring_offsets, coords.len() / 2, OffsetLevel::Ring)?;
        Ok(RingBuffer {
            coords,
            ring_offsets,
        })
    }

    /// Flatten a list of rings (each a flat `[x0, y0, x1, y1, ...]` list) into a [RingBuffer].
    ///
    /// If `orient` is true the first ring is made counter clockwise and all following rings are
    /// made clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::ragged::*;
    /// let rings = vec![
    ///     vec![0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0],
    ///     vec![0.5, 0.5, 0.5, 1.5, 1.5, 1.5, 1.5, 0.5, 0.5, 0.5],
    /// ];
    /// let buffer = RingBuffer::from_rings(&rings, false).unwrap();
    /// assert_eq!(buffer.ring_offsets(), &[0, 5, 10]);
    /// assert_eq!(buffer.coords().len(), 20);
    /// ```
    pub fn from_rings<I, R>(rings: I, orient: bool) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut result = Self::new();
        append_rings(&mut result.coords, &mut result.ring_offsets, rings, orient)?;
        Ok(result)
    }

    /// Flat coordinate buffer.
    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Ring offsets (in units of coordinate pairs).
    #[inline]
    pub fn ring_offsets(&self) -> &[u32] {
        &self.ring_offsets
    }

    /// Borrow the buffer as a [RingBufferView].
    #[inline]
    pub fn as_view(&self) -> RingBufferView<'_, T> {
        RingBufferView {
            coords: &self.coords,
            ring_offsets: &self.ring_offsets,
        }
    }

    /// Consume the buffer returning the `(coords, ring_offsets)` parts.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Vec<u32>) {
        (self.coords, self.ring_offsets)
    }
}

/// Borrowed rings of a single geometry.
///
/// `coords` may be the coordinate buffer shared by a whole collection, `ring_offsets` then holds
/// absolute pair offsets into it (they do not have to start at zero).
#[derive(Debug, Copy, Clone)]
pub struct RingBufferView<'a, T = f64> {
    coords: &'a [T],
    ring_offsets: &'a [u32],
}

impl<'a, T> RingBufferView<'a, T>
where
    T: Real,
{
    /// Create a new view over `coords` with the rings given by `ring_offsets`.
    ///
    /// `ring_offsets` must be non-decreasing and `2 * ring_offsets.last()` must not exceed
    /// `coords.len()`, this is debug asserted only.
    #[inline]
    pub fn new(coords: &'a [T], ring_offsets: &'a [u32]) -> Self {
        debug_assert!(ring_offsets.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(ring_offsets
            .last()
            .map_or(true, |&last| 2 * last as usize <= coords.len()));
        RingBufferView {
            coords,
            ring_offsets,
        }
    }

    /// The (possibly shared) flat coordinate buffer.
    #[inline]
    pub fn coords(&self) -> &'a [T] {
        self.coords
    }

    /// Ring offsets slice, `ring_count() + 1` entries.
    #[inline]
    pub fn ring_offsets(&self) -> &'a [u32] {
        self.ring_offsets
    }

    /// Number of rings.
    #[inline]
    pub fn ring_count(&self) -> usize {
        offsets_item_count(self.ring_offsets)
    }

    /// Flat coordinates of ring `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn ring(&self, i: usize) -> &'a [T] {
        let (start, stop) = start_stop(self.ring_offsets, i);
        &self.coords[2 * start..2 * stop]
    }

    /// Iterate over the flat coordinates of every ring.
    #[inline]
    pub fn iter_rings(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let view = *self;
        (0..view.ring_count()).map(move |i| view.ring(i))
    }

    /// Reshape ring `i` into points.
    pub fn ring_points(&self, i: usize) -> Vec<Vector2<T>> {
        self.ring(i)
            .chunks_exact(2)
            .map(|p| Vector2::new(p[0], p[1]))
            .collect()
    }

    /// Copy the viewed rings into a new owned [RingBuffer] with offsets starting at zero.
    pub fn to_ring_buffer(&self) -> RingBuffer<T> {
        let (first, last) = match (self.ring_offsets.first(), self.ring_offsets.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return RingBuffer::new(),
        };

        RingBuffer {
            coords: self.coords[2 * first as usize..2 * last as usize].to_vec(),
            ring_offsets: self.ring_offsets.iter().map(|&o| o - first).collect(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RingBufferData<T> {
    coords: Vec<T>,
    ring_offsets: Vec<u32>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RingBufferData<T>> for RingBuffer<T>
where
    T: Real,
{
    type Error = GeometryError;

    fn try_from(value: RingBufferData<T>) -> Result<Self, Self::Error> {
        RingBuffer::try_new(value.coords, value.ring_offsets)
    }
}
