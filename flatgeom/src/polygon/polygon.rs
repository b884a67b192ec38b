use super::{PolygonBuildOptions, PolygonSource};
use crate::{
    core::traits::Real,
    error::GeometryError,
    ragged::{RingBuffer, RingBufferView},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned single polygon: an exterior ring followed by zero or more hole rings in one flat
/// coordinate buffer. See [PolygonSource] for all the operations available.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent, bound(deserialize = "T: Real + Deserialize<'de>"))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    rings: RingBuffer<T>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new empty [Polygon] (no rings).
    #[inline]
    pub fn new() -> Self {
        Polygon {
            rings: RingBuffer::new(),
        }
    }

    /// Build a polygon from flat rings, the first ring is the exterior and the rest are holes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// // clockwise exterior
    /// let shell = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
    /// let polygon = Polygon::from_rings(&[shell.clone()], &PolygonBuildOptions::new()).unwrap();
    /// // oriented counter clockwise
    /// assert_eq!(polygon.exterior().unwrap(), &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    ///
    /// let polygon = Polygon::from_rings(&[shell.clone()], &PolygonBuildOptions::unoriented()).unwrap();
    /// assert_eq!(polygon.exterior().unwrap(), &shell[..]);
    /// ```
    pub fn from_rings<I, R>(rings: I, options: &PolygonBuildOptions) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        Ok(Polygon {
            rings: RingBuffer::from_rings(rings, options.orient)?,
        })
    }

    /// Wrap an existing [RingBuffer] as a polygon, ring orientation is kept as is.
    #[inline]
    pub fn from_ring_buffer(rings: RingBuffer<T>) -> Self {
        Polygon { rings }
    }

    #[inline]
    pub fn ring_buffer(&self) -> &RingBuffer<T> {
        &self.rings
    }

    #[inline]
    pub fn into_ring_buffer(self) -> RingBuffer<T> {
        self.rings
    }

    /// Borrow as a [PolygonView].
    #[inline]
    pub fn as_view(&self) -> PolygonView<'_, T> {
        PolygonView::new(self.rings.as_view())
    }
}

impl<T> PolygonSource for Polygon<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn rings(&self) -> RingBufferView<'_, T> {
        self.rings.as_view()
    }
}

/// Borrowed single polygon, typically an element of a
/// [PolygonArray](super::PolygonArray) sharing its coordinate buffer.
#[derive(Debug, Copy, Clone)]
pub struct PolygonView<'a, T = f64> {
    rings: RingBufferView<'a, T>,
}

impl<'a, T> PolygonView<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new(rings: RingBufferView<'a, T>) -> Self {
        PolygonView { rings }
    }

    /// Consume the view returning the underlying ring view.
    #[inline]
    pub fn detach(self) -> RingBufferView<'a, T> {
        self.rings
    }
}

impl<'a, T> PolygonSource for PolygonView<'a, T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn rings(&self) -> RingBufferView<'_, T> {
        self.rings
    }
}
