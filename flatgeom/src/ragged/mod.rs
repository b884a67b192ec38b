//! Ragged (CSR style) buffer layout shared by all geometry kinds.
//!
//! A [RingBuffer] holds the rings of a single geometry: one flat coordinate buffer plus ring
//! offsets. A [RaggedArray2] holds many geometries: one flat coordinate buffer, ring offsets
//! concatenated across all geometries, geometry offsets indexing into the ring offsets, and an
//! optional null mask.
mod builder;
mod offsets;
mod ragged_array;
mod ring_buffer;

pub use builder::*;
pub use offsets::*;
pub use ragged_array::*;
pub use ring_buffer::*;
