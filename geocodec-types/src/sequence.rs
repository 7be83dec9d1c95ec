use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, Dimension};

/// Ordered list of coordinates.
///
/// Used as the payload of line strings and multipoints, and as polygon rings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CoordinateSequence(Vec<Coordinate>);

impl CoordinateSequence {
    /// Creates a new sequence.
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the coordinates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Coordinate> {
        self.0.iter()
    }

    /// First coordinate, if any.
    pub fn first(&self) -> Option<&Coordinate> {
        self.0.first()
    }

    /// Coordinates as a slice.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Consumes the sequence, returning the coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }

    /// Dimension shared by all coordinates of the sequence.
    ///
    /// Returns `None` if the sequence is empty or if it mixes 2d and 3d coordinates.
    pub fn dimension(&self) -> Option<Dimension> {
        let first = self.0.first()?.dimension();
        self.0
            .iter()
            .all(|c| c.dimension() == first)
            .then_some(first)
    }

    /// Returns true if the first and the last coordinates of a non-empty sequence are the same.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(value: Vec<Coordinate>) -> Self {
        Self(value)
    }
}

impl FromIterator<Coordinate> for CoordinateSequence {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CoordinateSequence {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CoordinateSequence {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_of_mixed_sequence() {
        let sequence = CoordinateSequence::from(vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::with_z(3.0, 4.0, 5.0),
        ]);
        assert_eq!(sequence.dimension(), None);
        assert_eq!(CoordinateSequence::default().dimension(), None);

        let sequence: CoordinateSequence = [[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]
            .into_iter()
            .map(|[x, y, z]| Coordinate::with_z(x, y, z))
            .collect();
        assert_eq!(sequence.dimension(), Some(Dimension::Xyz));
    }

    #[test]
    fn closed_sequence() {
        let ring: CoordinateSequence = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]
            .into_iter()
            .map(|[x, y]| Coordinate::new(x, y))
            .collect();
        assert!(ring.is_closed());
        assert!(!CoordinateSequence::default().is_closed());
    }
}
