//! This module contains the C foreign function interface for flatgeom.
//!
//! All functions returning `i32` return 0 on success, -1 if a panic was caught, and a function
//! specific positive code otherwise (listed in each function's documentation).
#![allow(non_camel_case_types)]
pub mod error_handling;

use error_handling::{clear_last_error, set_last_error, LAST_ERROR};
use flatgeom::{
    kind::example_polygon_array,
    polygon::{PolygonArray, PolygonArraySource},
    AABB,
};
use core::slice;
use std::{ffi::c_char, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Opaque type that wraps a [PolygonArray].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct fgeo_polygon_array(pub PolygonArray<f64>);

/// Borrow a C buffer as a slice, `None` if `data` is null while `len` is not 0.
unsafe fn buffer_slice<'a, T>(data: *const T, len: u32) -> Option<&'a [T]> {
    if len == 0 {
        Some(&[])
    } else if data.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(data, len as usize))
    }
}

/// Create a new polygon array object by copying raw ragged buffers.
///
/// `coords` holds interleaved `x, y` values (`n_coords` values, not pairs).
/// `ring_offsets` holds ring boundaries in units of coordinate pairs (`n_ring_offsets` entries).
/// `geom_offsets` holds polygon boundaries in units of rings (`n_geom_offsets` entries), the
/// polygon count is `n_geom_offsets - 1`.
/// `null_mask` may be null (no null polygons) or hold one entry per polygon, non-zero marks a null
/// polygon.
/// `array` is an out parameter to hold the created polygon array.
///
/// ## Specific Error Codes
/// * 1 = a required buffer is null while its length is not 0.
/// * 2 = buffers do not form a valid polygon array (message available from
///   [fgeo_get_last_error]).
///
/// # Safety
///
/// Each buffer may be null if its length is 0 or must point to a valid contiguous buffer with
/// at least the given length. `null_mask` may be null or must point to a valid contiguous buffer
/// with length of at least `n_geom_offsets - 1`.
/// `array` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn fgeo_polygon_array_create(
    coords: *const f64,
    n_coords: u32,
    ring_offsets: *const u32,
    n_ring_offsets: u32,
    geom_offsets: *const u32,
    n_geom_offsets: u32,
    null_mask: *const u8,
    array: *mut *const fgeo_polygon_array,
) -> i32 {
    ffi_catch_unwind!({
        let (coords, ring_offsets, geom_offsets) = match (
            buffer_slice(coords, n_coords),
            buffer_slice(ring_offsets, n_ring_offsets),
            buffer_slice(geom_offsets, n_geom_offsets),
        ) {
            (Some(c), Some(r), Some(g)) => (c, r, g),
            _ => return 1,
        };

        let null_mask = if null_mask.is_null() {
            None
        } else {
            let count = geom_offsets.len().saturating_sub(1);
            let mask = slice::from_raw_parts(null_mask, count);
            Some(mask.iter().map(|&m| m != 0).collect())
        };

        match PolygonArray::try_from_parts(
            coords.to_vec(),
            ring_offsets.to_vec(),
            geom_offsets.to_vec(),
            null_mask,
        ) {
            Ok(result) => {
                array.write(Box::into_raw(Box::new(fgeo_polygon_array(result))));
                0
            }
            Err(e) => {
                set_last_error(e.to_string(), "fgeo_polygon_array_create");
                2
            }
        }
    })
}

/// Create a new polygon array object holding the example collection (two polygons, the first
/// with one hole).
///
/// # Safety
///
/// `array` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_create_example(
    array: *mut *const fgeo_polygon_array,
) -> i32 {
    ffi_catch_unwind!({
        let result = PolygonArray::from_buffers(example_polygon_array());
        array.write(Box::into_raw(Box::new(fgeo_polygon_array(result))));
        0
    })
}

/// Free an existing [fgeo_polygon_array] object.
///
/// Nothing happens if `array` is null.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] (or [fgeo_polygon_array_create_example]) and has not already been
/// freed.
#[no_mangle]
pub unsafe extern "C" fn fgeo_polygon_array_f(array: *mut fgeo_polygon_array) {
    if !array.is_null() {
        drop(Box::from_raw(array))
    }
}

/// Get the number of polygons (null polygons included) in the array.
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_get_count(
    array: *const fgeo_polygon_array,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        // offsets are u32 so the polygon count always fits
        count.write(u32::try_from((*array).0.len()).unwrap());
        0
    })
}

/// Get whether the polygon at `index` is null (`is_null` set to 1) or not (set to 0).
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
/// * 2 = `index` is out of bounds.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `is_null` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_get_is_null(
    array: *const fgeo_polygon_array,
    index: u32,
    is_null: *mut u8,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        let array = &(*array).0;
        if index as usize >= array.len() {
            return 2;
        }

        is_null.write(array.is_null(index as usize) as u8);
        0
    })
}

/// Wraps [PolygonArraySource::length], fills `length` with one value per polygon (NaN for null
/// polygons).
///
/// You must use [fgeo_polygon_array_get_count] to ensure the buffer given has adequate length.
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `length` must point to a buffer that is large enough to hold a value for every polygon or a
/// buffer overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_eval_length(
    array: *const fgeo_polygon_array,
    length: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        let result = (*array).0.length();
        length.copy_from_nonoverlapping(result.as_ptr(), result.len());
        0
    })
}

/// Wraps [PolygonArraySource::area], fills `area` with one value per polygon (NaN for null
/// polygons).
///
/// You must use [fgeo_polygon_array_get_count] to ensure the buffer given has adequate length.
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `area` must point to a buffer that is large enough to hold a value for every polygon or a
/// buffer overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_eval_area(
    array: *const fgeo_polygon_array,
    area: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        let result = (*array).0.area();
        area.copy_from_nonoverlapping(result.as_ptr(), result.len());
        0
    })
}

/// Wraps [PolygonArraySource::intersects_bounds] for the rectangle with corners `(x0, y0)` and
/// `(x1, y1)` (any order).
///
/// `indices` may be null to test every polygon (`result` then needs one entry per polygon), or
/// hold `n_indices` polygon indexes to test (`result` then needs `n_indices` entries in the same
/// order). Each entry of `result` is set to 1 if the polygon intersects, 0 otherwise.
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
/// * 2 = an index in `indices` is out of bounds.
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `indices` must be null or point to a valid contiguous buffer of at least `n_indices` values.
/// `result` must point to a buffer large enough to hold all the results or a buffer overrun will
/// happen.
#[no_mangle]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn fgeo_polygon_array_intersects_bounds(
    array: *const fgeo_polygon_array,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    indices: *const u32,
    n_indices: u32,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        let array = &(*array).0;
        let indices: Option<Vec<usize>> = if indices.is_null() {
            None
        } else {
            let indices = slice::from_raw_parts(indices, n_indices as usize);
            if indices.iter().any(|&i| i as usize >= array.len()) {
                return 2;
            }
            Some(indices.iter().map(|&i| i as usize).collect())
        };

        let bounds = AABB::new(x0, y0, x1, y1);
        let hits = array.intersects_bounds(&bounds, indices.as_deref());
        for (i, hit) in hits.into_iter().enumerate() {
            result.add(i).write(hit as u8);
        }
        0
    })
}

/// Wraps [PolygonArraySource::total_extents], the bounding box of all non-null polygons.
///
/// ## Specific Error Codes
/// * 1 = `array` is null.
/// * 2 = `array` has no points (extents are not written).
///
/// # Safety
///
/// `array` must be null or a valid fgeo_polygon_array object that was created with
/// [fgeo_polygon_array_create] and has not been freed.
/// `min_x`, `min_y`, `max_x`, and `max_y` must point to valid places in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_polygon_array_get_extents(
    array: *const fgeo_polygon_array,
    min_x: *mut f64,
    min_y: *mut f64,
    max_x: *mut f64,
    max_y: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if array.is_null() {
            return 1;
        }

        match (*array).0.total_extents() {
            Some(extents) => {
                min_x.write(extents.min_x);
                min_y.write(extents.min_y);
                max_x.write(extents.max_x);
                max_y.write(extents.max_y);
                0
            }
            None => 2,
        }
    })
}

/// Get the message of the last error set on the current thread (null terminated C string).
///
/// The returned pointer stays valid until the next failing call on the same thread or a call to
/// [fgeo_clear_last_error].
///
/// ## Specific Error Codes
/// * 1 = no error has been set.
///
/// # Safety
///
/// `msg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fgeo_get_last_error(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        LAST_ERROR.with(|last_error| match &*last_error.borrow() {
            Some(data) => {
                msg.write(data.error_msg.as_ptr());
                0
            }
            None => 1,
        })
    })
}

/// Clear the last error set on the current thread.
#[no_mangle]
pub extern "C" fn fgeo_clear_last_error() {
    clear_last_error();
}
