//! GeoJSON codec for the geometry model of [`geocodec_types`].
//!
//! [`GeoJsonDecoder`] turns GeoJSON geometry objects (already parsed into [`serde_json::Value`]) into
//! [`Geometry`](geocodec_types::Geometry) values, and [`GeoJsonEncoder`] does the opposite. Both resolve the SRID of
//! every geometry from the legacy `crs` member:
//!
//! * a geometry without `crs` inherits the SRID of the enclosing collection, or the configured default SRID at the top
//!   level;
//! * named (`EPSG:3857`, `urn:ogc:def:crs:EPSG::3857`) and linked
//!   (`http://www.opengis.net/def/crs/EPSG/0/3857`) declarations are understood on input;
//! * the encoder writes a linked declaration only where the SRID cannot be inferred from the parent.
//!
//! ```
//! use geocodec::{GeoJsonDecoder, GeoJsonEncoder};
//! use geocodec_types::Srid;
//! use serde_json::json;
//!
//! let node = json!({
//!     "type": "GeometryCollection",
//!     "crs": {"type": "name", "properties": {"name": "EPSG::3857"}},
//!     "geometries": [{"type": "Point", "coordinates": [1.0, 2.0]}]
//! });
//!
//! let geometry = GeoJsonDecoder::default().decode_geometry(Some(&node)).unwrap().unwrap();
//! assert_eq!(geometry.srid, Srid::WEB_MERCATOR);
//!
//! let encoded = GeoJsonEncoder::default().encode_geometry(Some(&geometry)).unwrap();
//! assert_eq!(
//!     encoded["crs"]["properties"]["href"],
//!     json!("http://www.opengis.net/def/crs/EPSG/0/3857")
//! );
//! assert!(encoded["geometries"][0].get("crs").is_none());
//! ```
//!
//! Both codecs are immutable and can be shared between threads. Their behaviour is set once with a
//! [`CodecConfig`].

pub mod config;
pub mod coordinates;
pub mod crs;
mod decoder;
mod encoder;
pub mod error;
pub mod feature;
#[cfg(feature = "geojson")]
mod geojson;
pub mod json;

pub use config::{AxisOrder, CodecConfig};
pub use decoder::GeoJsonDecoder;
pub use encoder::GeoJsonEncoder;
pub use error::GeoJsonError;
pub use feature::Feature;
pub use geocodec_types;
