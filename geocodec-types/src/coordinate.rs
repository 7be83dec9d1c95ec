use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Number of ordinates in a coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Dimension {
    /// `x` and `y`.
    Xy,
    /// `x`, `y` and `z`.
    Xyz,
}

impl Dimension {
    /// Number of ordinates.
    pub const fn ordinates(&self) -> usize {
        match self {
            Dimension::Xy => 2,
            Dimension::Xyz => 3,
        }
    }
}

/// A position with two or three ordinates.
///
/// `x` and `y` are always finite numbers. The fallible constructors ([`Coordinate::try_new`], the `TryFrom` impls
/// and deserialization) reject anything else. [`Coordinate::new`] and [`Coordinate::with_z`] expect finite `x` and
/// `y` from the caller and check it only in debug builds.
///
/// The `z` ordinate is either a finite number or absent. Constructors drop a non-finite `z` instead of keeping it
/// as a placeholder value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    x: f64,
    y: f64,
    z: Option<f64>,
}

#[derive(Deserialize)]
struct RawCoordinate {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeometryError;

    fn try_from(RawCoordinate { x, y, z }: RawCoordinate) -> Result<Self, Self::Error> {
        Self::try_new(x, y, z)
    }
}

impl Coordinate {
    /// Creates a 2d coordinate. `x` and `y` must be finite.
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "non-finite coordinate ({x}, {y})"
        );
        Self { x, y, z: None }
    }

    /// Creates a 3d coordinate. If `z` is `NaN` or infinite, the coordinate is 2d. `x` and `y` must be finite.
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            z: z.is_finite().then_some(z),
            ..Self::new(x, y)
        }
    }

    /// Creates a coordinate with optional `z`, see [`Coordinate::with_z`].
    pub fn from_xyz(x: f64, y: f64, z: Option<f64>) -> Self {
        match z {
            Some(z) => Self::with_z(x, y, z),
            None => Self::new(x, y),
        }
    }

    /// Creates a coordinate, failing if `x` or `y` is `NaN` or infinite.
    pub fn try_new(x: f64, y: f64, z: Option<f64>) -> Result<Self, GeometryError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFiniteOrdinate(format!(
                "coordinate ({x}, {y}) has a non-finite ordinate"
            )));
        }

        Ok(Self::from_xyz(x, y, z))
    }

    /// X ordinate (longitude for geographic systems).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y ordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z ordinate, if the coordinate is 3d.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Dimension of the coordinate.
    pub fn dimension(&self) -> Dimension {
        match self.z {
            Some(_) => Dimension::Xyz,
            None => Dimension::Xy,
        }
    }

    /// Returns a copy of the coordinate with `x` and `y` exchanged. `z` stays in place.
    pub fn swap_xy(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = GeometryError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::try_new(x, y, None)
    }
}

impl TryFrom<[f64; 3]> for Coordinate {
    type Error = GeometryError;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::try_new(x, y, Some(z))
    }
}
