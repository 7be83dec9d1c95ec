//! Geometry value model used by the `geocodec` GeoJSON codec.
//!
//! A [`Geometry`] is a closed set of shapes (see [`Geom`]) built from [`Coordinate`]s and [`CoordinateSequence`]s,
//! tagged with the [`Srid`] of the reference system the coordinates are in. All types are plain immutable values
//! without behaviour beyond construction, inspection and equality.

mod coordinate;
pub mod error;
#[cfg(feature = "geo-types")]
mod geo_types;
mod geometry;
pub mod geometry_type;
mod polygon;
mod sequence;
pub mod srid;

pub use coordinate::{Coordinate, Dimension};
pub use geometry::{Geom, Geometry};
pub use geometry_type::GeometryType;
pub use polygon::Polygon;
pub use sequence::CoordinateSequence;
pub use srid::{Srid, DEFAULT_CRS};
