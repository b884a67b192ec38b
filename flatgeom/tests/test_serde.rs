#![cfg(feature = "serde")]

use flatgeom::{
    kind::{example_polygon_array, GeometryDtype},
    polygon::{Polygon, PolygonArray, PolygonArraySource, PolygonBuildOptions},
    ragged::RaggedArray2,
};

#[test]
fn ragged_array_json_layout() {
    let array = RaggedArray2::from_nested(
        vec![Some(vec![vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]]), None],
        false,
    )
    .unwrap();
    let json = serde_json::to_value(&array).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "coords": [0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            "ringOffsets": [0, 3],
            "geomOffsets": [0, 1, 1],
            "nullMask": [false, true],
        })
    );

    let parsed: RaggedArray2 = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, array);
}

#[test]
fn null_mask_omitted_when_absent() {
    let json = serde_json::to_value(example_polygon_array()).unwrap();
    assert!(json.get("nullMask").is_none());
}

#[test]
fn deserialize_validates_offsets() {
    let json = r#"{"coords": [0.0, 0.0, 1.0, 0.0], "ringOffsets": [0, 2], "geomOffsets": [0, 2]}"#;
    let result: Result<PolygonArray, _> = serde_json::from_str(json);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid geometry offsets"), "{}", err);

    let json = r#"{"coords": [0.0, 0.0, 1.0], "ringOffsets": [0, 1]}"#;
    assert!(serde_json::from_str::<Polygon>(json).is_err());
}

#[test]
fn polygon_array_round_trip_keeps_measures() {
    let array = PolygonArray::from_buffers(example_polygon_array());
    let json = serde_json::to_string(&array).unwrap();
    let parsed: PolygonArray = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.area(), array.area());
}

#[test]
fn polygon_is_transparent() {
    let polygon = Polygon::from_rings(
        &[vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0]],
        &PolygonBuildOptions::unoriented(),
    )
    .unwrap();
    let json = serde_json::to_value(&polygon).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "coords": [0.0, 0.0, 2.0, 0.0, 2.0, 2.0],
            "ringOffsets": [0, 3],
        })
    );
}

#[test]
fn dtype_serializes_lowercase() {
    let dtype: GeometryDtype = "multiline[float32]".parse().unwrap();
    let json = serde_json::to_value(dtype).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "multiline", "subtype": "float32" })
    );
}
