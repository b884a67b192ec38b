//! Supporting public types used when building polygons.

/// Struct to hold options parameters when building polygons from rings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PolygonBuildOptions {
    /// If true, reorder ring vertexes so exterior rings are stored counter clockwise and holes are
    /// stored clockwise. If false, vertexes are kept as given. Some algorithms rely on this ordering
    /// convention, so only set it to false if the input is known to follow it already.
    pub orient: bool,
}

impl PolygonBuildOptions {
    #[inline]
    pub fn new() -> Self {
        Self { orient: true }
    }

    /// Options that keep ring vertexes as given.
    #[inline]
    pub fn unoriented() -> Self {
        Self { orient: false }
    }
}

impl Default for PolygonBuildOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
