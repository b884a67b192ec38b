//! Geometry kinds sharing the ragged buffer layout and their registration with an external
//! array framework.
use crate::{
    core::traits::Real,
    error::GeometryError,
    multiline::MultiLineArrayView,
    polygon::{PolygonArraySource, PolygonArrayView},
    ragged::{RaggedArray2, RaggedArray2View},
};
use static_aabb2d_index::AABB;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry kinds stored in a two level ragged layout.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Exterior ring plus zero or more holes, rings are implicitly closed.
    Polygon,
    /// One or more open lines.
    MultiLine,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 2] = [GeometryKind::Polygon, GeometryKind::MultiLine];

    /// Type tag the kind is registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Polygon => "polygon",
            GeometryKind::MultiLine => "multiline",
        }
    }

    /// Number of offset arrays above the coordinate buffer.
    #[inline]
    pub fn nesting_levels(&self) -> usize {
        2
    }

    /// Factory for the small literal example collection of this kind.
    #[inline]
    pub fn example_factory(&self) -> ExampleFactory {
        match self {
            GeometryKind::Polygon => example_polygon_array,
            GeometryKind::MultiLine => example_multiline_array,
        }
    }

    /// Interpret `buffers` as a collection of this kind.
    #[inline]
    pub fn view<'a, T>(&self, buffers: RaggedArray2View<'a, T>) -> GeometryArrayView<'a, T>
    where
        T: Real,
    {
        match self {
            GeometryKind::Polygon => GeometryArrayView::Polygon(PolygonArrayView::new(buffers)),
            GeometryKind::MultiLine => {
                GeometryArrayView::MultiLine(MultiLineArrayView::new(buffers))
            }
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeometryError::UnknownKind(s.to_string()))
    }
}

/// Numeric type of the coordinate buffer.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CoordType {
    Float32,
    #[default]
    Float64,
}

impl CoordType {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            CoordType::Float32 => "float32",
            CoordType::Float64 => "float64",
        }
    }
}

impl FromStr for CoordType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float32" | "f32" => Ok(CoordType::Float32),
            "float64" | "f64" => Ok(CoordType::Float64),
            _ => Err(GeometryError::UnsupportedArguments(s.to_string())),
        }
    }
}

/// Geometry kind plus coordinate type, written `kind` or `kind[subtype]`.
///
/// # Examples
///
/// ```
/// # use flatgeom::kind::*;
/// let dtype: GeometryDtype = "polygon[float32]".parse().unwrap();
/// assert_eq!(dtype.kind, GeometryKind::Polygon);
/// assert_eq!(dtype.subtype, CoordType::Float32);
/// assert_eq!(dtype.to_string(), "polygon[float32]");
///
/// let dtype: GeometryDtype = "polygon".parse().unwrap();
/// assert_eq!(dtype.subtype, CoordType::Float64);
///
/// assert!("polygon[int8]".parse::<GeometryDtype>().is_err());
/// assert!("triangle".parse::<GeometryDtype>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryDtype {
    pub kind: GeometryKind,
    pub subtype: CoordType,
}

impl GeometryDtype {
    #[inline]
    pub fn new(kind: GeometryKind, subtype: CoordType) -> Self {
        GeometryDtype { kind, subtype }
    }

    /// Resolve the array kind for this dtype. The kind takes no construction parameters.
    pub fn construct_array_kind(&self, args: &[&str]) -> Result<GeometryKind, GeometryError> {
        if !args.is_empty() {
            return Err(GeometryError::UnsupportedArguments(args.join(", ")));
        }

        Ok(self.kind)
    }
}

impl From<GeometryKind> for GeometryDtype {
    #[inline]
    fn from(kind: GeometryKind) -> Self {
        GeometryDtype::new(kind, CoordType::default())
    }
}

impl fmt::Display for GeometryDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.subtype.name())
    }
}

impl FromStr for GeometryDtype {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('[') {
            None => Ok(GeometryDtype::from(s.parse::<GeometryKind>()?)),
            Some((kind, rest)) => {
                let subtype = rest
                    .strip_suffix(']')
                    .ok_or_else(|| GeometryError::UnknownKind(s.to_string()))?;
                Ok(GeometryDtype::new(kind.parse()?, subtype.parse()?))
            }
        }
    }
}

/// Borrowed collection of any [GeometryKind], dispatching the shared operations.
#[derive(Debug, Copy, Clone)]
pub enum GeometryArrayView<'a, T = f64> {
    Polygon(PolygonArrayView<'a, T>),
    MultiLine(MultiLineArrayView<'a, T>),
}

impl<'a, T> GeometryArrayView<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryArrayView::Polygon(_) => GeometryKind::Polygon,
            GeometryArrayView::MultiLine(_) => GeometryKind::MultiLine,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            GeometryArrayView::Polygon(a) => a.len(),
            GeometryArrayView::MultiLine(a) => a.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Perimeter (polygons) or line length (multi-lines) of every geometry, NaN for nulls.
    pub fn length(&self) -> Vec<T> {
        match self {
            GeometryArrayView::Polygon(a) => a.length(),
            GeometryArrayView::MultiLine(a) => a.length(),
        }
    }

    pub fn intersects_bounds(&self, bounds: &AABB<T>, indices: Option<&[usize]>) -> Vec<bool> {
        match self {
            GeometryArrayView::Polygon(a) => a.intersects_bounds(bounds, indices),
            GeometryArrayView::MultiLine(a) => a.intersects_bounds(bounds, indices),
        }
    }
}

/// Produces the example collection handed to an external framework at registration.
pub type ExampleFactory = fn() -> RaggedArray2<f64>;

/// Two polygons, the first with one hole. Coordinates are kept exactly as written (no
/// re-orientation).
///
/// # Examples
///
/// ```
/// # use flatgeom::kind::*;
/// # use flatgeom::polygon::*;
/// # use flatgeom::core::traits::*;
/// let array = PolygonArray::from_buffers(example_polygon_array());
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(0).unwrap().ring_count(), 2);
/// assert!(array.area()[1].fuzzy_eq(1.0));
/// ```
pub fn example_polygon_array() -> RaggedArray2<f64> {
    #[rustfmt::skip]
    let coords = vec![
        1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0, 1.0, 1.0,
        1.1, 1.1, 1.5, 1.9, 1.9, 1.1, 1.1, 1.1,
        1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0, 1.0, 1.0,
    ];
    RaggedArray2::from_parts_unchecked(coords, vec![0, 5, 9, 14], vec![0, 2, 3], None)
}

/// Two multi-lines, the first with two lines.
pub fn example_multiline_array() -> RaggedArray2<f64> {
    #[rustfmt::skip]
    let coords = vec![
        1.0, 1.0, 2.0, 2.0,
        3.0, 3.0, 4.0, 4.0,
        1.0, 1.0, 2.0, 2.0,
    ];
    RaggedArray2::from_parts_unchecked(coords, vec![0, 2, 4, 6], vec![0, 2, 3], None)
}

/// Collaborator that geometry kinds are registered with (e.g. a dataframe extension type
/// registry).
pub trait ExtensionRegistry {
    fn register(&mut self, dtype: GeometryDtype, example: ExampleFactory);
}

/// Register every [GeometryKind] with `registry`.
pub fn register_geometry_kinds<R>(registry: &mut R)
where
    R: ExtensionRegistry + ?Sized,
{
    for kind in GeometryKind::ALL {
        log::debug!("registering geometry kind {}", kind);
        registry.register(GeometryDtype::from(kind), kind.example_factory());
    }
}

/// Simple in memory [ExtensionRegistry], registering a dtype again replaces its example factory.
///
/// # Examples
///
/// ```
/// # use flatgeom::kind::*;
/// let mut registry = KindRegistry::new();
/// register_geometry_kinds(&mut registry);
/// assert_eq!(registry.len(), 2);
/// let (dtype, example) = registry.lookup("polygon").unwrap();
/// assert_eq!(dtype.kind, GeometryKind::Polygon);
/// assert_eq!(example().len(), 2);
/// assert!(registry.lookup("point").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    entries: Vec<(GeometryDtype, ExampleFactory)>,
}

impl KindRegistry {
    #[inline]
    pub fn new() -> Self {
        KindRegistry {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a registered dtype by its string form (`"polygon"`, `"polygon[float64]"`, etc.).
    pub fn lookup(&self, name: &str) -> Option<(GeometryDtype, ExampleFactory)> {
        let dtype = name.parse::<GeometryDtype>().ok()?;
        self.entries.iter().copied().find(|(d, _)| *d == dtype)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(GeometryDtype, ExampleFactory)> + '_ {
        self.entries.iter()
    }
}

impl ExtensionRegistry for KindRegistry {
    fn register(&mut self, dtype: GeometryDtype, example: ExampleFactory) {
        match self.entries.iter_mut().find(|(d, _)| *d == dtype) {
            Some(entry) => entry.1 = example,
            None => self.entries.push((dtype, example)),
        }
    }
}
