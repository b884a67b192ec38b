//! Polygon elements and polygon collections over the ragged buffer layout.
//!
//! [PolygonSource] and [PolygonArraySource] hold all the operations, [Polygon] / [PolygonArray]
//! (owned) and [PolygonView] / [PolygonArrayView] (borrowed, zero copy) implement them.
mod array;
mod polygon;
mod spatial_index;
mod traits;
mod types;

pub use array::*;
pub use polygon::*;
pub use spatial_index::*;
pub use traits::*;
pub use types::*;
