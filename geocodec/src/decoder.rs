use geocodec_types::{CoordinateSequence, Geom, Geometry, GeometryType, Polygon, Srid};
use serde_json::{Map, Value};

use crate::config::CodecConfig;
use crate::coordinates::{expect_array, CoordinateCodec};
use crate::crs::CrsResolver;
use crate::error::GeoJsonError;

pub(crate) const TYPE: &str = "type";
pub(crate) const COORDINATES: &str = "coordinates";
pub(crate) const GEOMETRIES: &str = "geometries";

/// Decodes GeoJSON geometry objects into [`Geometry`] values.
///
/// Decoding is all or nothing: the first structural violation anywhere in the document is returned as an error.
///
/// ```
/// use geocodec::GeoJsonDecoder;
/// use geocodec_types::{Geom, Srid};
/// use serde_json::json;
///
/// let node = json!({
///     "type": "Point",
///     "coordinates": [10, 20],
///     "crs": {"type": "name", "properties": {"name": "EPSG:3857"}}
/// });
/// let point = GeoJsonDecoder::default().decode_geometry(Some(&node)).unwrap().unwrap();
/// assert_eq!(point.srid, Srid::WEB_MERCATOR);
/// assert!(matches!(point.geom, Geom::Point(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoJsonDecoder {
    config: CodecConfig,
    coordinates: CoordinateCodec,
    crs: CrsResolver,
}

impl GeoJsonDecoder {
    /// Creates a new decoder.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            coordinates: CoordinateCodec::new(config.axis_order),
            crs: CrsResolver,
        }
    }

    /// Configuration of the decoder.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a top-level geometry. Geometries without `crs` get the configured default SRID.
    ///
    /// Absent or `null` node decodes into `None`.
    pub fn decode_geometry(&self, node: Option<&Value>) -> Result<Option<Geometry>, GeoJsonError> {
        match node {
            None | Some(Value::Null) => Ok(None),
            Some(node) => self.decode(node, self.config.default_srid).map(Some),
        }
    }

    /// Parses the JSON text and decodes it with [`GeoJsonDecoder::decode_geometry`].
    pub fn decode_str(&self, json: &str) -> Result<Option<Geometry>, GeoJsonError> {
        let node = crate::json::parse_str(json)?;
        self.decode_geometry(Some(&node))
    }

    /// Decodes a geometry object. `parent_srid` applies if the object has no `crs` member of its own.
    pub fn decode(&self, node: &Value, parent_srid: Srid) -> Result<Geometry, GeoJsonError> {
        let object = node
            .as_object()
            .ok_or_else(|| GeoJsonError::WrongShape("geometry has to be an object".into()))?;
        let type_name = Self::geometry_type_name(object)?;
        let srid = self.crs.resolve(object, parent_srid)?;
        let geometry_type = GeometryType::from_name(type_name).ok_or_else(|| {
            GeoJsonError::UnknownType(format!("Unknown geometry type: {type_name}"))
        })?;

        log::trace!("Decoding {geometry_type} in SRID {srid}");

        let geom = match geometry_type {
            GeometryType::Point => {
                Geom::Point(self.coordinates.decode_coordinate(require_coordinates(object)?)?)
            }
            GeometryType::LineString => {
                Geom::LineString(self.coordinates.decode_sequence(require_coordinates(object)?)?)
            }
            GeometryType::MultiPoint => {
                Geom::MultiPoint(self.coordinates.decode_sequence(require_coordinates(object)?)?)
            }
            GeometryType::Polygon => Geom::Polygon(self.decode_polygon(require_coordinates(object)?)?),
            GeometryType::MultiLineString => Geom::MultiLineString(
                expect_array(require_coordinates(object)?)?
                    .iter()
                    .map(|line| self.coordinates.decode_sequence(line))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            GeometryType::MultiPolygon => Geom::MultiPolygon(
                expect_array(require_coordinates(object)?)?
                    .iter()
                    .map(|polygon| self.decode_polygon(polygon))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            GeometryType::GeometryCollection => Geom::GeometryCollection(
                require_geometries(object)?
                    .iter()
                    .map(|member| self.decode(member, srid))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };

        if geom.has_mixed_dimensions() {
            return Err(GeoJsonError::Dimension(format!(
                "{geometry_type} mixes 2d and 3d coordinates"
            )));
        }

        Ok(Geometry::new(geom, srid))
    }

    /// First ring is the shell, the rest are holes. Ring closure is not checked.
    fn decode_polygon(&self, node: &Value) -> Result<Polygon, GeoJsonError> {
        let mut rings = expect_array(node)?
            .iter()
            .map(|ring| self.coordinates.decode_sequence(ring));

        let shell = rings
            .next()
            .ok_or_else(|| GeoJsonError::EmptyShell("missing polygon shell".into()))??;
        let holes = rings.collect::<Result<Vec<CoordinateSequence>, _>>()?;

        Ok(Polygon::new(shell, holes))
    }

    fn geometry_type_name(object: &Map<String, Value>) -> Result<&str, GeoJsonError> {
        match object.get(TYPE) {
            None => Err(GeoJsonError::MissingField(
                "Can not determine geometry type (missing 'type' field)".into(),
            )),
            Some(Value::String(type_name)) => Ok(type_name.as_str()),
            Some(_) => Err(GeoJsonError::WrongShape(
                "'type' field has to be a string".into(),
            )),
        }
    }
}

fn require_coordinates(object: &Map<String, Value>) -> Result<&Value, GeoJsonError> {
    match object.get(COORDINATES) {
        None | Some(Value::Null) => Err(GeoJsonError::MissingField(
            "missing 'coordinates' field".into(),
        )),
        Some(coordinates) if coordinates.is_array() => Ok(coordinates),
        Some(_) => Err(GeoJsonError::WrongShape(
            "'coordinates' field has to be an array".into(),
        )),
    }
}

fn require_geometries(object: &Map<String, Value>) -> Result<&Vec<Value>, GeoJsonError> {
    match object.get(GEOMETRIES) {
        None | Some(Value::Null) => Err(GeoJsonError::MissingField(
            "missing 'geometries' field".into(),
        )),
        Some(Value::Array(geometries)) => Ok(geometries),
        Some(_) => Err(GeoJsonError::WrongShape(
            "expected 'geometries' array".into(),
        )),
    }
}
