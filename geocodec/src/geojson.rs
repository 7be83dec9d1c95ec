//! Conversion from and into [`geojson::Geometry`].
//!
//! Both directions go through the JSON object of the geometry, so the `crs` member travels as a foreign member of
//! the `geojson` value.

use geocodec_types::{Geometry, Srid};

use crate::decoder::GeoJsonDecoder;
use crate::encoder::GeoJsonEncoder;
use crate::error::GeoJsonError;

impl GeoJsonDecoder {
    /// Decodes a `geojson` geometry. The geometry gets the configured default SRID unless it has a `crs` foreign
    /// member.
    pub fn decode_geojson(&self, geometry: &geojson::Geometry) -> Result<Geometry, GeoJsonError> {
        let node = serde_json::to_value(geometry)?;
        self.decode(&node, self.config().default_srid)
    }
}

impl GeoJsonEncoder {
    /// Encodes the geometry into a `geojson` geometry. Returns `None` for empty geometries.
    pub fn encode_geojson(
        &self,
        geometry: &Geometry,
        parent_srid: Srid,
    ) -> Result<Option<geojson::Geometry>, GeoJsonError> {
        match self.encode(geometry, parent_srid) {
            Some(node) => Ok(Some(geojson::Geometry::from_json_value(node)?)),
            None => Ok(None),
        }
    }
}
