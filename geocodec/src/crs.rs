//! Resolution of `crs` members into SRIDs.
//!
//! A GeoJSON geometry may declare its reference system in one of two forms:
//!
//! * **named**: `{"type": "name", "properties": {"name": "EPSG:4326"}}`
//! * **linked**: `{"type": "link", "properties": {"href": "http://www.opengis.net/def/crs/EPSG/0/4326"}}`
//!
//! A geometry without `crs` inherits the SRID of its parent (or the default SRID at the top level). Only the
//! resolved [`Srid`] is kept, the declaration itself is not part of the geometry model.

use geocodec_types::Srid;
use serde_json::{json, Map, Value};

use crate::error::GeoJsonError;

pub(crate) const CRS: &str = "crs";
const TYPE: &str = "type";
const PROPERTIES: &str = "properties";
const NAME: &str = "name";
const LINK: &str = "link";
const HREF: &str = "href";

/// Prefixes of named CRS declarations, in the order they are tried.
pub const SRS_NAME_PREFIXES: [&str; 3] = ["urn:ogc:def:crs:EPSG::", "EPSG::", "EPSG:"];

/// Prefixes of linked CRS declarations, in the order they are tried.
pub const SRS_LINK_PREFIXES: [&str; 2] = [
    "http://www.opengis.net/def/crs/EPSG/0/",
    "http://spatialreference.org/ref/epsg/",
];

/// Base URL of linked CRS declarations written by the encoder.
pub const SRID_LINK_PREFIX: &str = SRS_LINK_PREFIXES[0];

/// Reads and writes `crs` members of geometry objects.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CrsResolver;

impl CrsResolver {
    /// Returns the effective SRID of the geometry object `node`.
    ///
    /// If the object has no `crs` member (or it is `null`), this is `parent_srid`.
    pub fn resolve(&self, node: &Map<String, Value>, parent_srid: Srid) -> Result<Srid, GeoJsonError> {
        let crs = match node.get(CRS) {
            None | Some(Value::Null) => return Ok(parent_srid),
            Some(Value::Object(crs)) => crs,
            Some(_) => {
                return Err(GeoJsonError::WrongShape(
                    "'crs' field has to be an object".into(),
                ))
            }
        };

        let crs_type = match crs.get(TYPE) {
            None | Some(Value::Null) => {
                return Err(GeoJsonError::UnsupportedCrs("Missing CRS type".into()))
            }
            Some(crs_type) => crs_type,
        };

        let properties = crs.get(PROPERTIES);
        let srid = match crs_type.as_str() {
            Some(NAME) => Self::decode_named(properties)?,
            Some(LINK) => Self::decode_linked(properties)?,
            Some(other) => {
                return Err(GeoJsonError::UnsupportedCrs(format!(
                    "Unknown CRS type: {other}"
                )))
            }
            None => {
                return Err(GeoJsonError::UnsupportedCrs(format!(
                    "Unknown CRS type: {crs_type}"
                )))
            }
        };

        log::debug!("Resolved crs declaration to SRID {srid} (parent SRID {parent_srid})");
        Ok(srid)
    }

    /// Adds a linked `crs` member to `node` if the geometry's SRID cannot be inferred from its parent.
    ///
    /// Nothing is written if `child_srid` equals `parent_srid`, if `child_srid` is [`Srid::UNSET`], or if both are
    /// [`Srid::WGS84`]. Returns the SRID that members of this geometry inherit: `parent_srid` when nothing was written,
    /// `child_srid` otherwise.
    pub fn annotate(&self, node: &mut Map<String, Value>, child_srid: Srid, parent_srid: Srid) -> Srid {
        if child_srid == parent_srid
            || child_srid.is_unset()
            || parent_srid == Srid::WGS84 && child_srid == Srid::WGS84
        {
            return parent_srid;
        }

        log::debug!("Writing crs for SRID {child_srid} under parent SRID {parent_srid}");
        node.insert(
            CRS.into(),
            json!({
                TYPE: LINK,
                PROPERTIES: {
                    HREF: format!("{SRID_LINK_PREFIX}{child_srid}"),
                },
            }),
        );

        child_srid
    }

    fn decode_named(properties: Option<&Value>) -> Result<Srid, GeoJsonError> {
        let name = string_property(properties, NAME).ok_or_else(|| {
            GeoJsonError::UnsupportedCrs("Missing name attribute for name crs".into())
        })?;

        match strip_any_prefix(name, &SRS_NAME_PREFIXES) {
            Some(code) => parse_srid(code)
                .ok_or_else(|| GeoJsonError::UnsupportedCrs(format!("Invalid CRS name: {name}"))),
            None => Err(GeoJsonError::UnsupportedCrs(format!(
                "Unsupported named crs: {name}"
            ))),
        }
    }

    fn decode_linked(properties: Option<&Value>) -> Result<Srid, GeoJsonError> {
        let href = string_property(properties, HREF).ok_or_else(|| {
            GeoJsonError::UnsupportedCrs("Missing href attribute for link crs".into())
        })?;

        match strip_any_prefix(href, &SRS_LINK_PREFIXES) {
            Some(code) => parse_srid(code)
                .ok_or_else(|| GeoJsonError::UnsupportedCrs(format!("Invalid CRS link: {href}"))),
            None => Err(GeoJsonError::UnsupportedCrs(format!(
                "Unsupported linked crs: {href}"
            ))),
        }
    }
}

fn string_property<'a>(properties: Option<&'a Value>, key: &str) -> Option<&'a str> {
    properties?.get(key)?.as_str()
}

/// Strips the first matching prefix. Only that prefix is tried, even if the rest does not parse.
fn strip_any_prefix<'a>(value: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
}

fn parse_srid(code: &str) -> Option<Srid> {
    code.parse::<u32>().ok().map(Srid::new)
}
