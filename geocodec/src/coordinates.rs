//! Conversion of single positions and position arrays.

use geocodec_types::{Coordinate, CoordinateSequence, Dimension};
use serde_json::Value;

use crate::config::AxisOrder;
use crate::error::GeoJsonError;

const MIN_ORDINATES: usize = Dimension::Xy.ordinates();
const MAX_ORDINATES: usize = Dimension::Xyz.ordinates();

/// Reads and writes GeoJSON positions (`[x, y]` or `[x, y, z]`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CoordinateCodec {
    axis_order: AxisOrder,
}

impl CoordinateCodec {
    /// Creates a codec for the given wire axis order.
    pub fn new(axis_order: AxisOrder) -> Self {
        Self { axis_order }
    }

    /// Decodes an array of 2 or 3 numbers.
    pub fn decode_coordinate(&self, node: &Value) -> Result<Coordinate, GeoJsonError> {
        let ordinates = expect_array(node)?;
        if ordinates.len() < MIN_ORDINATES {
            return Err(GeoJsonError::Dimension(format!(
                "coordinates may have at least {MIN_ORDINATES} dimensions"
            )));
        }
        if ordinates.len() > MAX_ORDINATES {
            return Err(GeoJsonError::Dimension(format!(
                "coordinates may have at most {MAX_ORDINATES} dimensions"
            )));
        }

        let mut values = [0.0; MAX_ORDINATES];
        for (i, ordinate) in ordinates.iter().enumerate() {
            values[i] = ordinate.as_f64().ok_or_else(|| {
                GeoJsonError::WrongShape(format!("coordinate index {i} has to be a number"))
            })?;
        }

        let coordinate = if ordinates.len() == MAX_ORDINATES {
            Coordinate::with_z(values[0], values[1], values[2])
        } else {
            Coordinate::new(values[0], values[1])
        };

        Ok(self.orient(coordinate))
    }

    /// Decodes an array of positions. An empty array is a valid, empty sequence.
    pub fn decode_sequence(&self, node: &Value) -> Result<CoordinateSequence, GeoJsonError> {
        let sequence = expect_array(node)?
            .iter()
            .map(|c| self.decode_coordinate(c))
            .collect::<Result<CoordinateSequence, _>>()?;

        if !sequence.is_empty() && sequence.dimension().is_none() {
            return Err(GeoJsonError::Dimension(
                "all coordinates of a sequence must have the same number of dimensions".into(),
            ));
        }

        Ok(sequence)
    }

    /// Writes `x` and `y`, and `z` only if the coordinate has one.
    pub fn encode_coordinate(&self, coordinate: &Coordinate) -> Value {
        let coordinate = self.orient(*coordinate);
        let mut ordinates = Vec::with_capacity(MAX_ORDINATES);
        ordinates.push(Value::from(coordinate.x()));
        ordinates.push(Value::from(coordinate.y()));
        if let Some(z) = coordinate.z() {
            ordinates.push(Value::from(z));
        }

        Value::Array(ordinates)
    }

    /// Writes the positions into a new array, one by one.
    pub fn encode_sequence<'a>(
        &self,
        coordinates: impl IntoIterator<Item = &'a Coordinate>,
    ) -> Value {
        Value::Array(
            coordinates
                .into_iter()
                .map(|c| self.encode_coordinate(c))
                .collect(),
        )
    }

    fn orient(&self, coordinate: Coordinate) -> Coordinate {
        match self.axis_order {
            AxisOrder::ForcedXy => coordinate,
            AxisOrder::LatLon => coordinate.swap_xy(),
        }
    }
}

pub(crate) fn expect_array(node: &Value) -> Result<&Vec<Value>, GeoJsonError> {
    node.as_array()
        .ok_or_else(|| GeoJsonError::WrongShape("expected array".into()))
}
