use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, Dimension};
use crate::geometry_type::GeometryType;
use crate::polygon::Polygon;
use crate::sequence::CoordinateSequence;
use crate::srid::Srid;

/// Shape of a geometry. The set of variants is closed: code matching on it must handle every kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom {
    /// Single position.
    Point(Coordinate),
    /// Sequence of positions connected by straight segments.
    LineString(CoordinateSequence),
    /// Polygon with holes.
    Polygon(Polygon),
    /// Each coordinate of the sequence is a separate point.
    MultiPoint(CoordinateSequence),
    /// Set of line strings.
    MultiLineString(Vec<CoordinateSequence>),
    /// Set of polygons.
    MultiPolygon(Vec<Polygon>),
    /// Members carry their own SRIDs.
    GeometryCollection(Vec<Geometry>),
}

impl Geom {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geom::Point(_) => GeometryType::Point,
            Geom::LineString(_) => GeometryType::LineString,
            Geom::Polygon(_) => GeometryType::Polygon,
            Geom::MultiPoint(_) => GeometryType::MultiPoint,
            Geom::MultiLineString(_) => GeometryType::MultiLineString,
            Geom::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geom::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns true if the geometry has no coordinates.
    ///
    /// A point is never empty. A polygon is empty if its shell is empty. A collection is empty if all its members
    /// are empty, which is also the case for a collection without members.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) => false,
            Geom::LineString(sequence) | Geom::MultiPoint(sequence) => sequence.is_empty(),
            Geom::Polygon(polygon) => polygon.is_empty(),
            Geom::MultiLineString(lines) => lines.iter().all(CoordinateSequence::is_empty),
            Geom::MultiPolygon(polygons) => polygons.iter().all(Polygon::is_empty),
            Geom::GeometryCollection(members) => members.iter().all(Geometry::is_empty),
        }
    }

    /// Iterates over all coordinates of this geometry, without descending into collection members.
    fn own_coordinates(&self) -> Box<dyn Iterator<Item = &'_ Coordinate> + '_> {
        match self {
            Geom::Point(c) => Box::new(std::iter::once(c)),
            Geom::LineString(sequence) | Geom::MultiPoint(sequence) => Box::new(sequence.iter()),
            Geom::Polygon(polygon) => Box::new(polygon.iter_rings().flat_map(|r| r.iter())),
            Geom::MultiLineString(lines) => Box::new(lines.iter().flat_map(|l| l.iter())),
            Geom::MultiPolygon(polygons) => Box::new(
                polygons
                    .iter()
                    .flat_map(|p| p.iter_rings().flat_map(|r| r.iter())),
            ),
            Geom::GeometryCollection(_) => Box::new(std::iter::empty()),
        }
    }

    /// Returns true if the geometry has both 2d and 3d coordinates. Collection members are not inspected.
    pub fn has_mixed_dimensions(&self) -> bool {
        let mut coordinates = self.own_coordinates();
        match coordinates.next() {
            Some(first) => {
                let dimension = first.dimension();
                coordinates.any(|c| c.dimension() != dimension)
            }
            None => false,
        }
    }

    /// Dimension shared by all coordinates of the geometry.
    ///
    /// `None` for empty geometries, for geometries that mix 2d and 3d coordinates and for collections, which have no
    /// coordinates of their own.
    pub fn dimension(&self) -> Option<Dimension> {
        let mut coordinates = self.own_coordinates();
        let first = coordinates.next()?.dimension();
        coordinates
            .all(|c| c.dimension() == first)
            .then_some(first)
    }
}

/// Geometry together with the spatial reference system its coordinates are in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Spatial reference identifier.
    pub srid: Srid,
    /// Shape.
    pub geom: Geom,
}

impl Geometry {
    /// Creates a new geometry.
    pub fn new(geom: Geom, srid: Srid) -> Self {
        Self { srid, geom }
    }

    /// Same geometry in a different reference system. Coordinates are not transformed.
    pub fn with_srid(self, srid: Srid) -> Self {
        Self { srid, ..self }
    }

    /// Type of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        self.geom.geometry_type()
    }

    /// See [`Geom::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.geom.is_empty()
    }
}

/// Geometries created without SRID are in [`Srid::WGS84`].
impl From<Geom> for Geometry {
    fn from(value: Geom) -> Self {
        Self::new(value, Srid::WGS84)
    }
}

impl From<Coordinate> for Geom {
    fn from(value: Coordinate) -> Self {
        Self::Point(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Vec<Polygon>> for Geom {
    fn from(value: Vec<Polygon>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<Vec<Geometry>> for Geom {
    fn from(value: Vec<Geometry>) -> Self {
        Self::GeometryCollection(value)
    }
}
