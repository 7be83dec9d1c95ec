//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// SRS identifier cannot be interpreted as an SRID.
    #[error("invalid spatial reference: {0}")]
    InvalidSrs(String),
    /// Coordinate with a `NaN` or infinite `x` or `y`.
    #[error("{0}")]
    NonFiniteOrdinate(String),
}
