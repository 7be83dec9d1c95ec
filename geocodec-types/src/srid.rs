//! Spatial reference identifiers.
//!
//! An [`Srid`] is the integer code of a coordinate reference system as assigned by the EPSG registry, e.g. `4326`
//! for WGS84. Geometries carry an SRID instead of a full CRS definition: the codec only records *which* reference
//! system applies, and leaves the actual transformation to whoever knows how to do it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Identifier of the default CRS: WGS84 with longitude/latitude axis order.
pub const DEFAULT_CRS: &str = "CRS:84";

const EPSG_PREFIX: &str = "EPSG:";

/// Spatial reference identifier.
///
/// Value `0` is reserved as the "unset" marker, see [`Srid::UNSET`]. The type is unsigned, so any value it holds can
/// be written into an EPSG code or URL.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Srid(u32);

impl Srid {
    /// SRID of a geometry that was never assigned a reference system.
    pub const UNSET: Srid = Srid(0);

    /// WGS84 geographic coordinates (EPSG:4326).
    ///
    /// Geometries in this system are stored in longitude/latitude order, see [`DEFAULT_CRS`].
    pub const WGS84: Srid = Srid(4326);

    /// Web Mercator projection (EPSG:3857).
    pub const WEB_MERCATOR: Srid = Srid(3857);

    /// Creates a new SRID from its numeric code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Numeric code of the SRID.
    pub const fn code(&self) -> u32 {
        self.0
    }

    /// Returns true if this is the [`Srid::UNSET`] marker.
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Returns the code in `EPSG:<code>` form.
    pub fn epsg_code(&self) -> String {
        format!("{EPSG_PREFIX}{}", self.0)
    }

    /// Parses an SRS definition string in one of the loose forms that appear in request parameters.
    ///
    /// Accepted are bare codes (`4326`), authority prefixed codes in any letter case (`EPSG:4326`, `epsg::4326`),
    /// URNs with any number of `:`-separated parts (`urn:ogc:def:crs:EPSG:3.5:4326`) and URLs, where the code is the
    /// last path segment (`http://www.opengis.net/def/crs/EPSG/0/4326`).
    ///
    /// ```
    /// use geocodec_types::Srid;
    ///
    /// assert_eq!(Srid::from_srs_str("urn:ogc:def:crs:EPSG::31466").unwrap(), Srid::new(31466));
    /// assert_eq!(Srid::from_srs_str("http://www.opengis.net/def/crs/epsg/0/4326").unwrap(), Srid::WGS84);
    /// ```
    pub fn from_srs_str(srs: &str) -> Result<Self, GeometryError> {
        let code = if srs.starts_with("http") {
            srs.rsplit('/').next()
        } else {
            srs.rsplit(':').next()
        };

        code.and_then(|code| code.parse::<u32>().ok())
            .map(Srid)
            .ok_or_else(|| GeometryError::InvalidSrs(srs.to_string()))
    }
}

impl From<u32> for Srid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Srid> for u32 {
    fn from(value: Srid) -> Self {
        value.0
    }
}

impl FromStr for Srid {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_srs_str(s)
    }
}

impl Display for Srid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
