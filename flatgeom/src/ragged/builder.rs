use super::{to_offset, RaggedArray2, RingBufferView};
use crate::{core::traits::Real, error::GeometryError, kernels::orient_ring_coords};

/// Append `rings` to the end of a flat coordinate buffer and its ring offsets.
///
/// If `orient` is true the first appended ring is made counter clockwise and the rest clockwise.
/// Returns the number of rings appended. On error both buffers are restored to their original
/// lengths.
pub(crate) fn append_rings<T, I, R>(
    coords: &mut Vec<T>,
    ring_offsets: &mut Vec<u32>,
    rings: I,
    orient: bool,
) -> Result<usize, GeometryError>
where
    T: Real,
    I: IntoIterator<Item = R>,
    R: AsRef<[T]>,
{
    let coords_len = coords.len();
    let offsets_len = ring_offsets.len();
    let result = extend_rings(coords, ring_offsets, rings, orient);
    if result.is_err() {
        coords.truncate(coords_len);
        ring_offsets.truncate(offsets_len);
    }

    result
}

fn extend_rings<T, I, R>(
    coords: &mut Vec<T>,
    ring_offsets: &mut Vec<u32>,
    rings: I,
    orient: bool,
) -> Result<usize, GeometryError>
where
    T: Real,
    I: IntoIterator<Item = R>,
    R: AsRef<[T]>,
{
    let mut ring_count = 0;
    for (i, ring) in rings.into_iter().enumerate() {
        let ring = ring.as_ref();
        if ring.len() % 2 != 0 {
            return Err(GeometryError::OddRingCoordinateCount {
                ring: i,
                len: ring.len(),
            });
        }

        let start = coords.len();
        coords.extend_from_slice(ring);
        if orient {
            orient_ring_coords(&mut coords[start..], i == 0);
        }

        ring_offsets.push(to_offset(coords.len() / 2)?);
        ring_count += 1;
    }

    Ok(ring_count)
}

/// Incrementally builds a [RaggedArray2] one geometry at a time.
///
/// # Examples
///
/// ```
/// # use flatgeom::ragged::*;
/// let mut builder = RaggedArray2Builder::new();
/// builder.push_rings(&[vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]], false).unwrap();
/// builder.push_null();
/// let array = builder.build();
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.geom_offsets(), &[0, 1, 1]);
/// assert_eq!(array.null_mask(), Some(&[false, true][..]));
/// ```
#[derive(Debug, Clone)]
pub struct RaggedArray2Builder<T = f64> {
    coords: Vec<T>,
    ring_offsets: Vec<u32>,
    geom_offsets: Vec<u32>,
    null_mask: Vec<bool>,
    has_nulls: bool,
}

impl<T> Default for RaggedArray2Builder<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RaggedArray2Builder<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a builder with space reserved for `geometry_count` geometries.
    pub fn with_capacity(geometry_count: usize) -> Self {
        let mut geom_offsets = Vec::with_capacity(geometry_count + 1);
        geom_offsets.push(0);
        RaggedArray2Builder {
            coords: Vec::new(),
            ring_offsets: vec![0],
            geom_offsets,
            null_mask: Vec::with_capacity(geometry_count),
            has_nulls: false,
        }
    }

    /// Number of geometries pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.null_mask.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.null_mask.is_empty()
    }

    /// Push a geometry made of `rings` (each ring a flat `[x0, y0, x1, y1, ...]` list).
    ///
    /// See [RingBuffer::from_rings](super::RingBuffer::from_rings) for `orient`. Nothing is pushed
    /// on error.
    pub fn push_rings<I, R>(&mut self, rings: I, orient: bool) -> Result<(), GeometryError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        append_rings(&mut self.coords, &mut self.ring_offsets, rings, orient)?;
        self.push_geometry_end()
    }

    /// Push a copy of the geometry in `view`.
    pub fn push_view(&mut self, view: RingBufferView<'_, T>) -> Result<(), GeometryError> {
        append_rings(&mut self.coords, &mut self.ring_offsets, view.iter_rings(), false)?;
        self.push_geometry_end()
    }

    /// Push a null geometry (no rings).
    pub fn push_null(&mut self) {
        let end = *self.geom_offsets.last().unwrap_or(&0);
        self.geom_offsets.push(end);
        self.null_mask.push(true);
        self.has_nulls = true;
    }

    fn push_geometry_end(&mut self) -> Result<(), GeometryError> {
        let ring_count = self.ring_offsets.len() - 1;
        match to_offset(ring_count) {
            Ok(end) => {
                self.geom_offsets.push(end);
                self.null_mask.push(false);
                Ok(())
            }
            Err(e) => {
                // roll back the rings appended for this geometry
                let last_end = *self.geom_offsets.last().unwrap_or(&0) as usize;
                self.ring_offsets.truncate(last_end + 1);
                self.coords.truncate(2 * self.ring_offsets[last_end] as usize);
                Err(e)
            }
        }
    }

    /// Finish building, the null mask is only kept if a null geometry was pushed.
    pub fn build(self) -> RaggedArray2<T> {
        log::debug!(
            "built ragged array: {} geometries, {} rings, {} coordinate pairs",
            self.null_mask.len(),
            self.ring_offsets.len() - 1,
            self.coords.len() / 2
        );
        let null_mask = if self.has_nulls {
            Some(self.null_mask)
        } else {
            None
        };

        RaggedArray2::from_parts_unchecked(
            self.coords,
            self.ring_offsets,
            self.geom_offsets,
            null_mask,
        )
    }
}
