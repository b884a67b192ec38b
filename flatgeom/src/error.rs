//! Errors raised while constructing geometry buffers.
use std::fmt;

/// Offset array level within the two level ragged layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffsetLevel {
    /// Offsets delimiting rings (or lines) in units of coordinate pairs.
    Ring,
    /// Offsets delimiting geometries in units of rings.
    Geometry,
}

impl fmt::Display for OffsetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetLevel::Ring => write!(f, "ring"),
            OffsetLevel::Geometry => write!(f, "geometry"),
        }
    }
}

/// All errors that may occur when building or reinterpreting geometry buffers.
///
/// Degenerate rings (fewer than 3 points) and null geometries are not errors, they are handled by
/// the kernels and reductions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// External shape is not of the expected kind.
    #[error("received invalid geometry of type {found}, must be a polygon")]
    InvalidShape { found: String },
    /// A kind factory was given parameters it does not support.
    #[error("unsupported geometry type arguments: {0}")]
    UnsupportedArguments(String),
    /// Type tag does not name a known geometry kind.
    #[error("unknown geometry type: {0}")]
    UnknownKind(String),
    /// A ring coordinate list does not hold complete `(x, y)` pairs.
    #[error("ring {ring} has {len} coordinate values, expected an even count of x, y pairs")]
    OddRingCoordinateCount { ring: usize, len: usize },
    /// The flat coordinate buffer does not hold complete `(x, y)` pairs.
    #[error("coordinate buffer has {len} values, expected an even count of x, y pairs")]
    OddCoordinateCount { len: usize },
    /// An offset array is not a valid CSR style index into the level below it.
    #[error("invalid {level} offsets: {reason}")]
    InvalidOffsets {
        level: OffsetLevel,
        reason: &'static str,
    },
    /// Null mask does not have one entry per geometry.
    #[error("null mask has {found} entries but there are {expected} geometries")]
    NullMaskLength { expected: usize, found: usize },
    /// More rings or coordinate pairs than a `u32` offset can address.
    #[error("offset exceeds u32::MAX")]
    OffsetOverflow,
    /// Building the spatial index failed (numeric cast of coordinate values).
    #[error("failed to build spatial index: {0}")]
    SpatialIndex(String),
}
