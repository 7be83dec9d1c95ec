//! Conversions between [`Geometry`] and the [`geo_types`](::geo_types) geometry model.
//!
//! `geo_types` has no notion of a reference system and no third ordinate, so converting into it drops `z` and the
//! SRID, and converting from it needs the SRID given explicitly. Rings are copied coordinate by coordinate in both
//! directions.

use ::geo_types as gt;

use crate::error::GeometryError;
use crate::{Coordinate, CoordinateSequence, Geom, Geometry, Polygon, Srid};

impl Geometry {
    /// Converts a `geo_types` geometry into a geometry in the given reference system.
    ///
    /// `Line`, `Rect` and `Triangle` have no counterpart here and become a line string and polygons respectively.
    /// Collection members inherit `srid`. Fails if any coordinate is not finite.
    pub fn from_geo_types(geometry: gt::Geometry<f64>, srid: Srid) -> Result<Self, GeometryError> {
        let geom = match geometry {
            gt::Geometry::Point(p) => Geom::Point(coordinate_from_coord(p.0)?),
            gt::Geometry::Line(line) => Geom::LineString(
                [line.start, line.end]
                    .into_iter()
                    .map(coordinate_from_coord)
                    .collect::<Result<_, _>>()?,
            ),
            gt::Geometry::LineString(line) => Geom::LineString(sequence_from_line(&line)?),
            gt::Geometry::Polygon(polygon) => Geom::Polygon(polygon_from_geo(&polygon)?),
            gt::Geometry::MultiPoint(points) => Geom::MultiPoint(
                points
                    .iter()
                    .map(|p| coordinate_from_coord(p.0))
                    .collect::<Result<_, _>>()?,
            ),
            gt::Geometry::MultiLineString(lines) => Geom::MultiLineString(
                lines
                    .iter()
                    .map(sequence_from_line)
                    .collect::<Result<_, _>>()?,
            ),
            gt::Geometry::MultiPolygon(polygons) => Geom::MultiPolygon(
                polygons
                    .iter()
                    .map(polygon_from_geo)
                    .collect::<Result<_, _>>()?,
            ),
            gt::Geometry::GeometryCollection(collection) => Geom::GeometryCollection(
                collection
                    .0
                    .into_iter()
                    .map(|member| Geometry::from_geo_types(member, srid))
                    .collect::<Result<_, _>>()?,
            ),
            gt::Geometry::Rect(rect) => Geom::Polygon(polygon_from_geo(&rect.to_polygon())?),
            gt::Geometry::Triangle(triangle) => {
                Geom::Polygon(polygon_from_geo(&triangle.to_polygon())?)
            }
        };

        Ok(Geometry::new(geom, srid))
    }
}

impl TryFrom<&Geometry> for gt::Geometry<f64> {
    type Error = GeometryError;

    /// Fails if a collection contains members in a reference system other than the collection's own, since
    /// `geo_types` cannot express that. Members with [`Srid::UNSET`] are accepted.
    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        Ok(match &value.geom {
            Geom::Point(c) => gt::Geometry::Point(gt::Point::new(c.x(), c.y())),
            Geom::LineString(sequence) => gt::Geometry::LineString(line_from_sequence(sequence)),
            Geom::Polygon(polygon) => gt::Geometry::Polygon(polygon_to_geo(polygon)),
            Geom::MultiPoint(sequence) => gt::Geometry::MultiPoint(gt::MultiPoint(
                sequence
                    .iter()
                    .map(|c| gt::Point::new(c.x(), c.y()))
                    .collect(),
            )),
            Geom::MultiLineString(lines) => gt::Geometry::MultiLineString(gt::MultiLineString(
                lines.iter().map(line_from_sequence).collect(),
            )),
            Geom::MultiPolygon(polygons) => gt::Geometry::MultiPolygon(gt::MultiPolygon(
                polygons.iter().map(polygon_to_geo).collect(),
            )),
            Geom::GeometryCollection(members) => {
                let members = members
                    .iter()
                    .map(|member| {
                        if member.srid != value.srid && !member.srid.is_unset() {
                            return Err(GeometryError::Conversion(format!(
                                "collection member in SRID {} cannot be converted into a collection in SRID {}",
                                member.srid, value.srid
                            )));
                        }

                        gt::Geometry::try_from(member)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                gt::Geometry::GeometryCollection(gt::GeometryCollection(members))
            }
        })
    }
}

fn coordinate_from_coord(coord: gt::Coord<f64>) -> Result<Coordinate, GeometryError> {
    Coordinate::try_new(coord.x, coord.y, None)
}

fn sequence_from_line(line: &gt::LineString<f64>) -> Result<CoordinateSequence, GeometryError> {
    line.coords().copied().map(coordinate_from_coord).collect()
}

fn polygon_from_geo(polygon: &gt::Polygon<f64>) -> Result<Polygon, GeometryError> {
    Ok(Polygon::new(
        sequence_from_line(polygon.exterior())?,
        polygon
            .interiors()
            .iter()
            .map(sequence_from_line)
            .collect::<Result<_, _>>()?,
    ))
}

fn line_from_sequence(sequence: &CoordinateSequence) -> gt::LineString<f64> {
    gt::LineString(
        sequence
            .iter()
            .map(|c| gt::Coord { x: c.x(), y: c.y() })
            .collect(),
    )
}

/// `geo_types` closes rings that are not closed yet.
fn polygon_to_geo(polygon: &Polygon) -> gt::Polygon<f64> {
    gt::Polygon::new(
        line_from_sequence(&polygon.shell),
        polygon.holes.iter().map(line_from_sequence).collect(),
    )
}
