#![cfg(feature = "geo-types")]

use flatgeom::{
    assert_fuzzy_eq,
    core::traits::FuzzyEq,
    error::GeometryError,
    geo_interop::ToGeoPolygon,
    polygon::{Polygon, PolygonBuildOptions, PolygonSource},
};
use geo_types::{line_string, point, Geometry, LineString};

fn geo_square_with_hole() -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(
        line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 2.0), (x: 2.0, y: 2.0), (x: 2.0, y: 0.0)],
        vec![line_string![(x: 0.5, y: 0.5), (x: 1.5, y: 0.5), (x: 1.5, y: 1.5), (x: 0.5, y: 1.5)]],
    )
}

#[test]
fn from_geo_polygon() {
    let polygon = Polygon::from_geo(&geo_square_with_hole(), &PolygonBuildOptions::new()).unwrap();
    assert_eq!(polygon.ring_count(), 2);
    // geo closes rings by repeating the first coordinate
    assert_eq!(polygon.ring(0).len(), 10);
    assert_fuzzy_eq!(polygon.area(), 3.0);
    assert_fuzzy_eq!(polygon.length(), 12.0);
}

#[test]
fn try_from_geometry() {
    let geometry = Geometry::Polygon(geo_square_with_hole());
    let polygon = Polygon::try_from(&geometry).unwrap();
    assert_fuzzy_eq!(polygon.area(), 3.0);

    let geometry = Geometry::Point(point!(x: 1.0, y: 1.0));
    assert_eq!(
        Polygon::try_from(&geometry),
        Err(GeometryError::InvalidShape {
            found: "Point".to_string()
        })
    );

    let geometry = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
    assert!(matches!(
        Polygon::<f64>::try_from(&geometry),
        Err(GeometryError::InvalidShape { .. })
    ));
}

#[test]
fn to_geo_round_trip() {
    let source = geo_square_with_hole();
    let polygon = Polygon::from_geo(&source, &PolygonBuildOptions::unoriented()).unwrap();
    assert_eq!(polygon.to_geo_polygon(), source);
    assert_eq!(polygon.as_view().to_geo_polygon(), source);
}

#[test]
fn boundary_to_geo() {
    let polygon = Polygon::from_geo(&geo_square_with_hole(), &PolygonBuildOptions::new()).unwrap();
    let lines = polygon.boundary().to_geo_multi_line_string();
    assert_eq!(lines.0.len(), 2);
    assert_eq!(lines.0[0].0.len(), 5);
}
