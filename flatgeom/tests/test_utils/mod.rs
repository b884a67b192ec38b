#![allow(dead_code)]
use flatgeom::{
    core::traits::FuzzyEq,
    polygon::{PolygonArraySource, PolygonSource},
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Closed axis aligned square ring (first point repeated) with counter clockwise orientation.
pub fn square(x: f64, y: f64, size: f64) -> Vec<f64> {
    vec![
        x,
        y,
        x + size,
        y,
        x + size,
        y + size,
        x,
        y + size,
        x,
        y,
    ]
}

/// Same as [square] but clockwise.
pub fn square_cw(x: f64, y: f64, size: f64) -> Vec<f64> {
    vec![
        x,
        y,
        x,
        y + size,
        x + size,
        y + size,
        x + size,
        y,
        x,
        y,
    ]
}

/// Translate every coordinate pair of a flat ring.
pub fn translate(ring: &[f64], dx: f64, dy: f64) -> Vec<f64> {
    ring.chunks_exact(2)
        .flat_map(|xy| [xy[0] + dx, xy[1] + dy])
        .collect()
}

/// Holds a set of properties of a polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub ring_count: usize,
    pub area: f64,
    pub length: f64,
    pub extents: Option<AABB<f64>>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-9;

    pub fn new(
        ring_count: usize,
        area: f64,
        length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            ring_count,
            area,
            length,
            extents: Some(AABB::new(min_x, min_y, max_x, max_y)),
        }
    }

    pub fn from_polygon<P>(polygon: &P) -> Self
    where
        P: PolygonSource<Num = f64>,
    {
        Self {
            ring_count: polygon.ring_count(),
            area: polygon.area(),
            length: polygon.length(),
            extents: polygon.extents(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.ring_count != other.ring_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.length.fuzzy_eq_eps(other.length, eps) {
            return false;
        }
        match (&self.extents, &other.extents) {
            (Some(a), Some(b)) => aabb_fuzzy_eq_eps(a, b, eps),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Properties of every polygon in a collection, `None` for null polygons.
pub fn create_property_set<A>(array: &A) -> Vec<Option<PolygonProperties>>
where
    A: PolygonArraySource<Num = f64>,
{
    array
        .iter()
        .map(|p| p.as_ref().map(PolygonProperties::from_polygon))
        .collect()
}

pub fn property_sets_match(
    result_set: &[Option<PolygonProperties>],
    expected_set: &[Option<PolygonProperties>],
) -> bool {
    let sets_match = result_set.len() == expected_set.len()
        && result_set
            .iter()
            .zip(expected_set)
            .all(|(r, e)| match (r, e) {
                (Some(r), Some(e)) => r.fuzzy_eq_eps(e, PolygonProperties::PROP_CMP_EPS),
                (None, None) => true,
                _ => false,
            });

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Compare two per-polygon measure results treating NaN as equal to NaN.
pub fn measures_match(result: &[f64], expected: &[f64]) -> bool {
    result.len() == expected.len()
        && result
            .iter()
            .zip(expected)
            .all(|(&r, &e)| (r.is_nan() && e.is_nan()) || r.fuzzy_eq(e))
}
