//! Conversions between flatgeom polygons and [geo_types] shapes.
use crate::{
    core::traits::Real,
    error::GeometryError,
    multiline::MultiLineView,
    polygon::{Polygon, PolygonBuildOptions, PolygonSource},
    ragged::RingBuffer,
};
use geo_types::{CoordFloat, Geometry, LineString, MultiLineString};

fn geometry_type_name<T>(geometry: &Geometry<T>) -> &'static str
where
    T: CoordFloat,
{
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn flatten_line_string<T>(line: &LineString<T>) -> Vec<T>
where
    T: CoordFloat,
{
    line.coords().flat_map(|c| [c.x, c.y]).collect()
}

fn to_line_string<T>(coords: &[T]) -> LineString<T>
where
    T: CoordFloat,
{
    coords
        .chunks_exact(2)
        .map(|xy| (xy[0], xy[1]))
        .collect::<Vec<_>>()
        .into()
}

impl<T> Polygon<T>
where
    T: Real + CoordFloat,
{
    /// Build a polygon from a [geo_types::Polygon], exterior first then the interiors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flatgeom::polygon::*;
    /// # use flatgeom::core::traits::*;
    /// let square = geo_types::Polygon::new(
    ///     vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)].into(),
    ///     vec![],
    /// );
    /// let polygon = Polygon::from_geo(&square, &PolygonBuildOptions::new()).unwrap();
    /// assert!(polygon.area().fuzzy_eq(4.0));
    /// ```
    pub fn from_geo(
        polygon: &geo_types::Polygon<T>,
        options: &PolygonBuildOptions,
    ) -> Result<Self, GeometryError> {
        let rings = std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(flatten_line_string);
        Ok(Polygon::from_ring_buffer(RingBuffer::from_rings(
            rings,
            options.orient,
        )?))
    }
}

impl<T> TryFrom<&Geometry<T>> for Polygon<T>
where
    T: Real + CoordFloat,
{
    type Error = GeometryError;

    /// Converts with default [PolygonBuildOptions], fails with [GeometryError::InvalidShape] for
    /// anything but a polygon.
    fn try_from(geometry: &Geometry<T>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Polygon(polygon) => Polygon::from_geo(polygon, &PolygonBuildOptions::new()),
            other => Err(GeometryError::InvalidShape {
                found: geometry_type_name(other).to_string(),
            }),
        }
    }
}

/// Conversion of any [PolygonSource] into a [geo_types::Polygon].
pub trait ToGeoPolygon: PolygonSource {
    /// Exterior becomes the geo exterior, remaining rings become interiors.
    fn to_geo_polygon(&self) -> geo_types::Polygon<Self::Num>;
}

impl<P> ToGeoPolygon for P
where
    P: PolygonSource + ?Sized,
    P::Num: CoordFloat,
{
    fn to_geo_polygon(&self) -> geo_types::Polygon<Self::Num> {
        let rings = self.rings();
        let exterior = rings
            .iter_rings()
            .next()
            .map(to_line_string)
            .unwrap_or_else(|| LineString::new(Vec::new()));
        let interiors = rings.iter_rings().skip(1).map(to_line_string).collect();
        geo_types::Polygon::new(exterior, interiors)
    }
}

impl<'a, T> MultiLineView<'a, T>
where
    T: Real + CoordFloat,
{
    /// Each line becomes one [geo_types::LineString].
    pub fn to_geo_multi_line_string(&self) -> MultiLineString<T> {
        MultiLineString::new(self.detach().iter_rings().map(to_line_string).collect())
    }
}
