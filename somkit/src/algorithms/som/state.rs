#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::utils::{Float, parallel_collect};
use std::fmt::{Display, Formatter, Result, Write};

/// Represents a read-only snapshot of the map, e.g. for U-matrix rendering.
pub struct GridState {
    /// Shape of the map as (width, height, dimension).
    pub shape: (usize, usize, usize),
    /// Lattice kind.
    pub lattice: LatticeType,
    /// Cells of the map in row-major order.
    pub cells: Vec<CellState>,
}

/// Contains information about grid cell state.
pub struct CellState {
    /// Cell coordinate.
    pub coordinate: Coordinate,
    /// Unified distance: a mean distance to prototypes of lattice neighbors.
    pub unified_distance: Float,
    /// Prototype vector.
    pub weights: Vec<Float>,
}

/// Gets map state.
pub fn get_grid_state(model: &SomModel) -> GridState {
    let grid = model.grid();
    let lattice = model.lattice();
    let metric = model.metric();

    let indices = (0..grid.size()).collect::<Vec<_>>();
    let cells = parallel_collect(indices.as_slice(), |&idx| {
        let coordinate = grid.coordinate(idx);
        let weights = grid.cells()[idx].as_slice();

        let (sum, count) = grid
            .iter()
            .filter(|(other, _)| lattice.are_neighbors(&coordinate, other))
            .fold((0., 0), |(sum, count), (_, other)| (sum + metric.distance(weights, other), count + 1));

        CellState {
            coordinate,
            unified_distance: if count > 0 { sum / count as Float } else { 0. },
            weights: weights.to_vec(),
        }
    });

    GridState { shape: (grid.width(), grid.height(), grid.dimension()), lattice: lattice.kind(), cells }
}

impl Display for GridState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let cells = self.cells.iter().fold(String::new(), |mut res, cell| {
            let Coordinate(x, y) = cell.coordinate;
            let weights = cell.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            // NOTE writing into a string never fails
            let _ = write!(&mut res, "({x},{y},{:.7},[{weights}]),", cell.unified_distance);

            res
        });

        write!(f, "({},{},{},{},[{}])", self.lattice, self.shape.0, self.shape.1, self.shape.2, cells)
    }
}
