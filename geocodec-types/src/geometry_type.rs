//! See documentation for [`GeometryType`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a geometry, named the way it is written into the `type` member of a GeoJSON geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Single position.
    Point,
    /// Sequence of positions.
    LineString,
    /// Shell with optional holes.
    Polygon,
    /// Set of positions.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Set of arbitrary geometries.
    GeometryCollection,
}

impl GeometryType {
    /// All geometry types.
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::LineString,
        GeometryType::Polygon,
        GeometryType::MultiPoint,
        GeometryType::MultiLineString,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// Name of the type as used on the wire.
    pub const fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Looks the type up by its wire name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Collections carry `geometries` instead of `coordinates`.
    pub const fn is_collection(&self) -> bool {
        matches!(self, GeometryType::GeometryCollection)
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
