//! Error types used by the crate.

use thiserror::Error;

/// Error returned when a document cannot be decoded.
///
/// Every variant carries a human-readable cause. Decoding stops at the first error, no partial geometry is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// A required member (`type`, `coordinates`, `geometries`, feature `id`) is absent.
    #[error("{0}")]
    MissingField(String),
    /// A member is present but is not of the expected JSON kind.
    #[error("{0}")]
    WrongShape(String),
    /// Coordinate with fewer than 2 or more than 3 ordinates, or a geometry mixing 2d and 3d coordinates.
    #[error("{0}")]
    Dimension(String),
    /// Unrecognized geometry `type`.
    #[error("{0}")]
    UnknownType(String),
    /// `crs` member that cannot be resolved into an SRID.
    #[error("{0}")]
    UnsupportedCrs(String),
    /// Polygon without rings.
    #[error("{0}")]
    EmptyShell(String),
    /// Document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
    /// Document could not be read.
    #[error("failed to read document: {0}")]
    Io(String),
    /// Conversion from or into `geojson` types failed.
    #[cfg(feature = "geojson")]
    #[error("geojson error: {0}")]
    GeoJson(String),
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_io() {
            Self::Io(value.to_string())
        } else {
            Self::Json(value.to_string())
        }
    }
}

impl From<std::io::Error> for GeoJsonError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

#[cfg(feature = "geojson")]
impl From<geojson::Error> for GeoJsonError {
    fn from(value: geojson::Error) -> Self {
        Self::GeoJson(value.to_string())
    }
}
