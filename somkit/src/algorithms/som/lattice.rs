#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/lattice_test.rs"]
mod lattice_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Coordinate of the cell in the grid as `(x, y)`, where `x` is a column and `y` is a row.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate(pub usize, pub usize);

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// Defines grid topology: a topological distance between cells and a neighbor predicate.
///
/// Implementations guarantee `distance_between(a, a) == 0`, symmetry and that `are_neighbors`
/// is true only for cells at the minimal positive distance. Opposite grid edges are never wrapped.
pub trait Lattice {
    /// Returns a non-negative topological distance between two cells.
    fn distance_between(&self, a: &Coordinate, b: &Coordinate) -> Float;

    /// Returns true if two cells are direct neighbors.
    fn are_neighbors(&self, a: &Coordinate, b: &Coordinate) -> bool;

    /// Returns lattice kind.
    fn kind(&self) -> LatticeType;
}

/// A rectangular lattice: euclidean distance over `(x, y)`, cells at distance 1 are neighbors,
/// so every interior cell has 4 neighbors.
#[derive(Clone, Debug, Default)]
pub struct RectangularLattice;

impl Lattice for RectangularLattice {
    fn distance_between(&self, a: &Coordinate, b: &Coordinate) -> Float {
        let dx = a.0.abs_diff(b.0) as Float;
        let dy = a.1.abs_diff(b.1) as Float;

        (dx * dx + dy * dy).sqrt()
    }

    fn are_neighbors(&self, a: &Coordinate, b: &Coordinate) -> bool {
        a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
    }

    fn kind(&self) -> LatticeType {
        LatticeType::Rectangular
    }
}

/// A hexagonal lattice with "even-r" horizontal layout: even rows are shoved right by half a cell.
///
/// Distance is the number of hex steps between cells, computed in axial coordinates.
/// Every interior cell has exactly 6 neighbors.
#[derive(Clone, Debug, Default)]
pub struct HexagonalLattice;

impl HexagonalLattice {
    /// Converts an "even-r" offset coordinate into axial `(q, r)` coordinate.
    fn to_axial(coordinate: &Coordinate) -> (i64, i64) {
        let (x, y) = (coordinate.0 as i64, coordinate.1 as i64);

        (x - (y + (y & 1)) / 2, y)
    }
}

impl Lattice for HexagonalLattice {
    fn distance_between(&self, a: &Coordinate, b: &Coordinate) -> Float {
        let (aq, ar) = Self::to_axial(a);
        let (bq, br) = Self::to_axial(b);
        let (dq, dr) = (bq - aq, br - ar);

        ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as Float
    }

    fn are_neighbors(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.distance_between(a, b) == 1.
    }

    fn kind(&self) -> LatticeType {
        LatticeType::Hexagonal
    }
}

/// Specifies a closed set of supported lattice variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LatticeType {
    /// A rectangular lattice.
    Rectangular,
    /// A hexagonal lattice.
    Hexagonal,
}

impl LatticeType {
    /// Creates a shared lattice of the given type.
    pub fn create(&self) -> Arc<dyn Lattice + Send + Sync> {
        match self {
            LatticeType::Rectangular => Arc::new(RectangularLattice),
            LatticeType::Hexagonal => Arc::new(HexagonalLattice),
        }
    }
}

impl Display for LatticeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeType::Rectangular => write!(f, "rectangular"),
            LatticeType::Hexagonal => write!(f, "hexagonal"),
        }
    }
}

impl TryFrom<&str> for LatticeType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "rect" | "rectangular" => Ok(LatticeType::Rectangular),
            "hex" | "hexagonal" => Ok(LatticeType::Hexagonal),
            _ => Err(format!("unknown lattice type: '{value}'")),
        }
    }
}
