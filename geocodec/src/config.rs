//! Codec configuration.
//!
//! The codec never reads configuration on its own. The request layer decides which reference system is the default
//! and in which axis order coordinates travel on the wire, and hands the result to
//! [`GeoJsonDecoder::new`](crate::GeoJsonDecoder::new) and [`GeoJsonEncoder::new`](crate::GeoJsonEncoder::new).

use geocodec_types::Srid;
use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;

/// Order of the first two ordinates of coordinates on the wire.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// Coordinates are written `[x, y]` (longitude first for geographic systems), whatever the axis order defined by
    /// the authority is.
    #[default]
    ForcedXy,
    /// Coordinates are written `[y, x]` (latitude first for geographic systems). They are swapped while decoding and
    /// encoding, so that in-memory geometries are always `x`/`y`.
    LatLon,
}

/// Settings shared by the encoder and the decoder.
///
/// ```
/// use geocodec::config::{AxisOrder, CodecConfig};
/// use geocodec_types::Srid;
///
/// let config = CodecConfig::from_json_str(r#"{"default_srid": 3857, "axis_order": "lat_lon"}"#).unwrap();
/// assert_eq!(config.default_srid, Srid::WEB_MERCATOR);
/// assert_eq!(config.axis_order, AxisOrder::LatLon);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecConfig {
    /// SRID of geometries that do not declare a `crs`, and the parent SRID of top-level encoded geometries.
    pub default_srid: Srid,
    /// Wire axis order.
    pub axis_order: AxisOrder,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_srid: Srid::WGS84,
            axis_order: AxisOrder::default(),
        }
    }
}

impl CodecConfig {
    /// Sets the default SRID.
    pub fn with_default_srid(mut self, srid: Srid) -> Self {
        self.default_srid = srid;
        self
    }

    /// Sets the wire axis order.
    pub fn with_axis_order(mut self, axis_order: AxisOrder) -> Self {
        self.axis_order = axis_order;
        self
    }

    /// Reads the configuration from a JSON document. Missing members keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self, GeoJsonError> {
        Ok(serde_json::from_str(json)?)
    }
}
