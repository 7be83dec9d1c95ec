use geocodec_types::{Geom, Geometry, Polygon, Srid};
use serde_json::{Map, Value};

use crate::config::CodecConfig;
use crate::coordinates::CoordinateCodec;
use crate::crs::CrsResolver;
use crate::decoder::{COORDINATES, GEOMETRIES, TYPE};

/// Encodes [`Geometry`] values into GeoJSON geometry objects.
///
/// Encoding cannot fail: every geometry value has a JSON representation, and every SRID can be written as a linked
/// `crs`. Empty geometries have no representation though, and encode into `None`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonEncoder {
    config: CodecConfig,
    coordinates: CoordinateCodec,
    crs: CrsResolver,
}

impl GeoJsonEncoder {
    /// Creates a new encoder.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            coordinates: CoordinateCodec::new(config.axis_order),
            crs: CrsResolver,
        }
    }

    /// Configuration of the encoder.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes a top-level geometry, using the configured default SRID as the parent SRID.
    pub fn encode_geometry(&self, geometry: Option<&Geometry>) -> Option<Value> {
        self.encode(geometry?, self.config.default_srid)
    }

    /// Encodes a geometry. A `crs` member is written only if the geometry's SRID differs from `parent_srid`, see
    /// [`CrsResolver::annotate`].
    ///
    /// Returns `None` for empty geometries, see [`Geom::is_empty`]. Empty members of a non-empty collection are
    /// left out of its `geometries`.
    pub fn encode(&self, geometry: &Geometry, parent_srid: Srid) -> Option<Value> {
        if geometry.is_empty() {
            return None;
        }

        let mut node = Map::new();
        node.insert(TYPE.into(), geometry.geometry_type().name().into());

        match &geometry.geom {
            Geom::GeometryCollection(members) => {
                let srid = self.crs.annotate(&mut node, geometry.srid, parent_srid);
                let members = members
                    .iter()
                    .filter_map(|member| self.encode(member, srid))
                    .collect();
                node.insert(GEOMETRIES.into(), Value::Array(members));
            }
            geom => {
                node.insert(COORDINATES.into(), self.encode_coordinates(geom));
                self.crs.annotate(&mut node, geometry.srid, parent_srid);
            }
        }

        Some(Value::Object(node))
    }

    fn encode_coordinates(&self, geom: &Geom) -> Value {
        match geom {
            Geom::Point(coordinate) => self.coordinates.encode_coordinate(coordinate),
            Geom::LineString(sequence) | Geom::MultiPoint(sequence) => {
                self.coordinates.encode_sequence(sequence)
            }
            Geom::Polygon(polygon) => self.encode_rings(polygon),
            Geom::MultiLineString(lines) => Value::Array(
                lines
                    .iter()
                    .map(|line| self.coordinates.encode_sequence(line))
                    .collect(),
            ),
            Geom::MultiPolygon(polygons) => Value::Array(
                polygons
                    .iter()
                    .map(|polygon| self.encode_rings(polygon))
                    .collect(),
            ),
            Geom::GeometryCollection(_) => Value::Array(vec![]),
        }
    }

    /// Shell first, then holes in their original order. Each ring is written into a new array.
    fn encode_rings(&self, polygon: &Polygon) -> Value {
        Value::Array(
            polygon
                .iter_rings()
                .map(|ring| self.coordinates.encode_sequence(ring))
                .collect(),
        )
    }
}
