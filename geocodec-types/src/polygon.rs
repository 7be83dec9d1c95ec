use serde::{Deserialize, Serialize};

use crate::sequence::CoordinateSequence;

/// Polygon consists of one outer ring (shell), and zero or more inner rings (holes).
///
/// Rings are expected to be closed, with the last coordinate repeating the first one. This is not checked: rings are
/// stored exactly as they were given.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    /// Outer ring.
    pub shell: CoordinateSequence,
    /// Inner rings.
    pub holes: Vec<CoordinateSequence>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(shell: CoordinateSequence, holes: Vec<CoordinateSequence>) -> Self {
        Self { shell, holes }
    }

    /// Iterates over all rings of the polygon starting with the shell.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ CoordinateSequence> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }

    /// A polygon without shell coordinates is empty, whatever its holes are.
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }
}

impl From<CoordinateSequence> for Polygon {
    fn from(value: CoordinateSequence) -> Self {
        Self {
            shell: value,
            holes: vec![],
        }
    }
}
