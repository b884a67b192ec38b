use super::{PolygonArraySource, PolygonBuildOptions, PolygonSource};
use crate::{
    core::traits::Real,
    error::GeometryError,
    ragged::{RaggedArray2, RaggedArray2Builder, RaggedArray2View},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owned collection of polygons sharing one flat coordinate buffer, one ring offsets array, and
/// one geometry offsets array. See [PolygonArraySource] for all the operations available.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent, bound(deserialize = "T: Real + Deserialize<'de>"))
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonArray<T = f64> {
    buffers: RaggedArray2<T>,
}

impl<T> Default for PolygonArray<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolygonArray<T>
where
    T: Real,
{
    /// Create a new empty [PolygonArray].
    #[inline]
    pub fn new() -> Self {
        PolygonArray {
            buffers: RaggedArray2::new(),
        }
    }

    /// Wrap existing ragged buffers as a polygon collection, ring orientation is kept as is.
    #[inline]
    pub fn from_buffers(buffers: RaggedArray2<T>) -> Self {
        PolygonArray { buffers }
    }

    /// Create a collection from raw buffers, see [RaggedArray2::try_new].
    pub fn try_from_parts(
        coords: Vec<T>,
        ring_offsets: Vec<u32>,
        geom_offsets: Vec<u32>,
        null_mask: Option<Vec<bool>>,
    ) -> Result<Self, GeometryError> {
        RaggedArray2::try_new(coords, ring_offsets, geom_offsets, null_mask).map(Self::from_buffers)
    }

    /// Build a collection from polygons given as lists of flat rings, `None` for a null polygon.
    pub fn from_polygons<G, I, R>(
        polygons: G,
        options: &PolygonBuildOptions,
    ) -> Result<Self, GeometryError>
    where
        G: IntoIterator<Item = Option<I>>,
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        RaggedArray2::from_nested(polygons, options.orient).map(Self::from_buffers)
    }

    #[inline]
    pub fn ragged_array(&self) -> &RaggedArray2<T> {
        &self.buffers
    }

    #[inline]
    pub fn into_ragged_array(self) -> RaggedArray2<T> {
        self.buffers
    }

    /// Borrow as a [PolygonArrayView].
    #[inline]
    pub fn as_view(&self) -> PolygonArrayView<'_, T> {
        PolygonArrayView::new(self.buffers.as_view())
    }
}

impl<T> PolygonArraySource for PolygonArray<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn buffers(&self) -> RaggedArray2View<'_, T> {
        self.buffers.as_view()
    }
}

/// Borrowed polygon collection, possibly a slice of a larger [PolygonArray].
#[derive(Debug, Copy, Clone)]
pub struct PolygonArrayView<'a, T = f64> {
    buffers: RaggedArray2View<'a, T>,
}

impl<'a, T> PolygonArrayView<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new(buffers: RaggedArray2View<'a, T>) -> Self {
        PolygonArrayView { buffers }
    }

    /// Consume the view returning the underlying ragged view.
    #[inline]
    pub fn detach(self) -> RaggedArray2View<'a, T> {
        self.buffers
    }
}

impl<'a, T> PolygonArraySource for PolygonArrayView<'a, T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn buffers(&self) -> RaggedArray2View<'_, T> {
        self.buffers
    }
}

/// Incrementally builds a [PolygonArray].
///
/// # Examples
///
/// ```
/// # use flatgeom::polygon::*;
/// let mut builder = PolygonArrayBuilder::new(PolygonBuildOptions::new());
/// builder.push_rings(&[vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]]).unwrap();
/// builder.push_null();
/// let array = builder.build();
/// assert_eq!(array.len(), 2);
/// assert!(array.is_null(1));
/// ```
#[derive(Debug, Clone)]
pub struct PolygonArrayBuilder<T = f64> {
    builder: RaggedArray2Builder<T>,
    options: PolygonBuildOptions,
}

impl<T> Default for PolygonArrayBuilder<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(PolygonBuildOptions::default())
    }
}

impl<T> PolygonArrayBuilder<T>
where
    T: Real,
{
    #[inline]
    pub fn new(options: PolygonBuildOptions) -> Self {
        PolygonArrayBuilder {
            builder: RaggedArray2Builder::new(),
            options,
        }
    }

    /// Number of polygons pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.builder.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// Push a polygon given as flat rings (exterior first), oriented according to the builder
    /// options. Nothing is pushed on error.
    #[inline]
    pub fn push_rings<I, R>(&mut self, rings: I) -> Result<(), GeometryError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        self.builder.push_rings(rings, self.options.orient)
    }

    /// Push a copy of an existing polygon, ring order and orientation are kept as is.
    #[inline]
    pub fn push_polygon<P>(&mut self, polygon: &P) -> Result<(), GeometryError>
    where
        P: PolygonSource<Num = T> + ?Sized,
    {
        self.builder.push_view(polygon.rings())
    }

    /// Push a null polygon.
    #[inline]
    pub fn push_null(&mut self) {
        self.builder.push_null();
    }

    #[inline]
    pub fn build(self) -> PolygonArray<T> {
        PolygonArray::from_buffers(self.builder.build())
    }
}
