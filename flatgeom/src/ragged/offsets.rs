use crate::error::{GeometryError, OffsetLevel};

/// Convert a count into a `u32` offset value.
#[inline]
pub fn to_offset(count: usize) -> Result<u32, GeometryError> {
    u32::try_from(count).map_err(|_| GeometryError::OffsetOverflow)
}

/// Returns the `(start, stop)` entries for item `i` of a CSR offsets array.
///
/// # Panics
///
/// Panics if `i + 1` is out of bounds for `offsets`.
#[inline]
pub fn start_stop(offsets: &[u32], i: usize) -> (usize, usize) {
    (offsets[i] as usize, offsets[i + 1] as usize)
}

/// Number of items addressed by a CSR offsets array.
#[inline]
pub fn offsets_item_count(offsets: &[u32]) -> usize {
    offsets.len().saturating_sub(1)
}

/// Validate that `offsets` is a CSR index covering exactly `0..expected_end` of the level below.
///
/// The offsets must be non-empty, start at 0, be non-decreasing, and end at `expected_end`.
///
/// # Examples
///
/// ```
/// # use flatgeom::ragged::*;
/// # use flatgeom::error::OffsetLevel;
/// assert!(validate_offsets(&[0, 4, 4, 9], 9, OffsetLevel::Ring).is_ok());
/// assert!(validate_offsets(&[0, 4, 3, 9], 9, OffsetLevel::Ring).is_err());
/// assert!(validate_offsets(&[0, 4], 9, OffsetLevel::Ring).is_err());
/// ```
pub fn validate_offsets(
    offsets: &[u32],
    expected_end: usize,
    level: OffsetLevel,
) -> Result<(), GeometryError> {
    let invalid = |reason| GeometryError::InvalidOffsets { level, reason };
    let (first, last) = match (offsets.first(), offsets.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(invalid("offsets must have at least one entry")),
    };

    if first != 0 {
        return Err(invalid("first offset must be zero"));
    }

    if offsets.windows(2).any(|w| w[1] < w[0]) {
        return Err(invalid("offsets must be non-decreasing"));
    }

    if last as usize != expected_end {
        return Err(invalid("last offset must equal the length of the level below"));
    }

    Ok(())
}
