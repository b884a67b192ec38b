//! Flat (ragged array) encoding for collections of polygons with vectorized kernels for length,
//! area, and bounds intersection.
//!
//! All geometries of a collection share one interleaved `[x0, y0, x1, y1, ...]` coordinate buffer.
//! Ring offsets delimit rings within it and geometry offsets delimit the rings of each polygon, see
//! [ragged]. The kernels in [kernels] run directly over those buffers, [polygon] wraps them in
//! element and collection types.
//!
//! # Examples
//!
//! ```
//! use flatgeom::polygon::*;
//! use flatgeom::core::traits::*;
//! use flatgeom::AABB;
//!
//! let square = vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0, 0.0, 0.0];
//! let hole = vec![0.5, 0.5, 1.5, 0.5, 1.5, 1.5, 0.5, 1.5, 0.5, 0.5];
//! let array = PolygonArray::from_polygons(
//!     vec![Some(vec![square.clone(), hole]), None, Some(vec![square])],
//!     &PolygonBuildOptions::new(),
//! )
//! .unwrap();
//!
//! let area: Vec<f64> = array.area();
//! assert!(area[0].fuzzy_eq(3.0));
//! assert!(area[1].is_nan());
//! assert!(area[2].fuzzy_eq(4.0));
//!
//! let hits = array.intersects_bounds(&AABB::new(1.9, 1.9, 5.0, 5.0), None);
//! assert_eq!(hits, vec![true, false, true]);
//! ```
pub extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod error;
#[cfg(feature = "geo-types")]
pub mod geo_interop;
pub mod kernels;
pub mod kind;
pub mod multiline;
pub mod polygon;
pub mod ragged;

pub use static_aabb2d_index::AABB;

pub use crate::error::{GeometryError, OffsetLevel};
