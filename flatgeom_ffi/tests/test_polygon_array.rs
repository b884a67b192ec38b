mod macros;

use flatgeom::{
    kind::example_polygon_array,
    polygon::{PolygonArray, PolygonArraySource},
    AABB,
};
use flatgeom_ffi::*;
use std::{ffi::CStr, ptr};

fn create_example() -> *mut fgeo_polygon_array {
    let mut result = ptr::null();
    let err = unsafe { fgeo_polygon_array_create_example(&mut result) };
    assert_eq!(err, 0);
    result as *mut _
}

fn get_count(array: *const fgeo_polygon_array) -> usize {
    let mut count = 0u32;
    assert_eq!(unsafe { fgeo_polygon_array_get_count(array, &mut count) }, 0);
    count as usize
}

#[test]
fn example_matches_rust_api() {
    let array = create_example();
    let expected = PolygonArray::from_buffers(example_polygon_array());
    assert_eq!(get_count(array), 2);

    let mut area = [0.0; 2];
    let mut length = [0.0; 2];
    unsafe {
        assert_eq!(fgeo_polygon_array_eval_area(array, area.as_mut_ptr()), 0);
        assert_eq!(fgeo_polygon_array_eval_length(array, length.as_mut_ptr()), 0);
    }
    let expected_area = expected.area();
    let expected_length = expected.length();
    for i in 0..2 {
        assert_fuzzy_eq!(area[i], expected_area[i]);
        assert_fuzzy_eq!(length[i], expected_length[i]);
    }

    let mut min_x = 0.0;
    let mut min_y = 0.0;
    let mut max_x = 0.0;
    let mut max_y = 0.0;
    unsafe {
        assert_eq!(
            fgeo_polygon_array_get_extents(array, &mut min_x, &mut min_y, &mut max_x, &mut max_y),
            0
        );
        fgeo_polygon_array_f(array);
    }
    assert_fuzzy_eq!(min_x, 1.0);
    assert_fuzzy_eq!(min_y, 1.0);
    assert_fuzzy_eq!(max_x, 2.0);
    assert_fuzzy_eq!(max_y, 2.0);
}

#[test]
fn create_from_buffers_with_nulls() {
    let coords = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0, 0.0, 0.0];
    let ring_offsets = [0, 5];
    let geom_offsets = [0, 0, 1];
    let null_mask = [1u8, 0];
    let mut array = ptr::null();
    let err = unsafe {
        fgeo_polygon_array_create(
            coords.as_ptr(),
            coords.len() as u32,
            ring_offsets.as_ptr(),
            ring_offsets.len() as u32,
            geom_offsets.as_ptr(),
            geom_offsets.len() as u32,
            null_mask.as_ptr(),
            &mut array,
        )
    };
    assert_eq!(err, 0);
    let array = array as *mut fgeo_polygon_array;
    assert_eq!(get_count(array), 2);

    let mut is_null = 0u8;
    let mut area = [0.0; 2];
    unsafe {
        assert_eq!(fgeo_polygon_array_get_is_null(array, 0, &mut is_null), 0);
        assert_eq!(is_null, 1);
        assert_eq!(fgeo_polygon_array_get_is_null(array, 1, &mut is_null), 0);
        assert_eq!(is_null, 0);
        assert_eq!(fgeo_polygon_array_get_is_null(array, 2, &mut is_null), 2);

        assert_eq!(fgeo_polygon_array_eval_area(array, area.as_mut_ptr()), 0);
        fgeo_polygon_array_f(array);
    }
    assert!(area[0].is_nan());
    assert_fuzzy_eq!(area[1], 4.0);
}

#[test]
fn create_rejects_invalid_buffers() {
    let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    // ring offsets do not end at the coordinate pair count
    let ring_offsets = [0, 2];
    let geom_offsets = [0, 1];
    let mut array = ptr::null();
    unsafe {
        fgeo_clear_last_error();
        let mut msg = ptr::null();
        assert_eq!(fgeo_get_last_error(&mut msg), 1);

        let err = fgeo_polygon_array_create(
            coords.as_ptr(),
            coords.len() as u32,
            ring_offsets.as_ptr(),
            ring_offsets.len() as u32,
            geom_offsets.as_ptr(),
            geom_offsets.len() as u32,
            ptr::null(),
            &mut array,
        );
        assert_eq!(err, 2);
        assert!(array.is_null());

        assert_eq!(fgeo_get_last_error(&mut msg), 0);
        let msg = CStr::from_ptr(msg).to_str().unwrap();
        assert!(msg.contains("invalid ring offsets"), "{}", msg);

        // null buffer with a non zero length
        let err = fgeo_polygon_array_create(
            ptr::null(),
            6,
            ring_offsets.as_ptr(),
            ring_offsets.len() as u32,
            geom_offsets.as_ptr(),
            geom_offsets.len() as u32,
            ptr::null(),
            &mut array,
        );
        assert_eq!(err, 1);
    }
}

#[test]
fn intersects_bounds_all_and_indices() {
    let array = create_example();
    let expected = PolygonArray::from_buffers(example_polygon_array());
    let bounds = AABB::new(1.45, 1.2, 1.55, 1.3);
    let expected_hits: Vec<u8> = expected
        .intersects_bounds(&bounds, None)
        .into_iter()
        .map(|b| b as u8)
        .collect();

    let mut result = [9u8; 2];
    unsafe {
        // corners given in reverse order
        assert_eq!(
            fgeo_polygon_array_intersects_bounds(
                array,
                1.55,
                1.3,
                1.45,
                1.2,
                ptr::null(),
                0,
                result.as_mut_ptr()
            ),
            0
        );
    }
    assert_eq!(result.to_vec(), expected_hits);

    let indices = [1u32, 1, 0];
    let mut result = [9u8; 3];
    unsafe {
        assert_eq!(
            fgeo_polygon_array_intersects_bounds(
                array,
                2.5,
                0.0,
                3.0,
                3.0,
                indices.as_ptr(),
                indices.len() as u32,
                result.as_mut_ptr()
            ),
            0
        );
    }
    assert_eq!(result, [0, 0, 0]);

    let bad_indices = [0u32, 5];
    unsafe {
        assert_eq!(
            fgeo_polygon_array_intersects_bounds(
                array,
                0.0,
                0.0,
                1.0,
                1.0,
                bad_indices.as_ptr(),
                bad_indices.len() as u32,
                result.as_mut_ptr()
            ),
            2
        );
        fgeo_polygon_array_f(array);
    }
}

#[test]
fn null_array_arguments() {
    let null_ptr = ptr::null();
    let mut count = 0u32;
    let mut value = 0.0;
    unsafe {
        assert_eq!(fgeo_polygon_array_get_count(null_ptr, &mut count), 1);
        assert_eq!(fgeo_polygon_array_eval_area(null_ptr, &mut value), 1);
        assert_eq!(fgeo_polygon_array_eval_length(null_ptr, &mut value), 1);
        // freeing null does nothing
        fgeo_polygon_array_f(ptr::null_mut());
    }
}
