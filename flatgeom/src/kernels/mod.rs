//! Geometric kernels that operate directly on a flat coordinate buffer and its offset arrays.
//!
//! Coordinate buffers hold interleaved `[x0, y0, x1, y1, ...]` values. Ring offsets are in units
//! of coordinate pairs, geometry offsets are in units of rings. None of the kernels allocate.
mod intersection;
mod measures;
mod nested_map;
mod orient;

pub use intersection::*;
pub use measures::*;
pub use nested_map::*;
pub use orient::*;
