#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/grid_test.rs"]
mod grid_test;

use super::Coordinate;
use crate::utils::{Float, GenericError, GenericResult};

/// A `width x height` array of prototype vectors of the same dimensionality, stored in
/// row-major order. The grid is never resized after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PrototypeGrid {
    width: usize,
    height: usize,
    dimension: usize,
    cells: Vec<Vec<Float>>,
}

impl PrototypeGrid {
    /// Creates a new grid from prototypes given in row-major order.
    pub fn new(width: usize, height: usize, dimension: usize, cells: Vec<Vec<Float>>) -> GenericResult<Self> {
        validate_shape(width, height, dimension)?;

        if cells.len() != width * height {
            return Err(format!("expected {} prototypes for {width}x{height} grid, got {}", width * height, cells.len())
                .into());
        }

        if let Some((idx, cell)) = cells.iter().enumerate().find(|(_, cell)| cell.len() != dimension) {
            return Err(format!(
                "prototype at {} has dimension {}, expected {dimension}",
                Coordinate(idx % width, idx / width),
                cell.len()
            )
            .into());
        }

        Ok(Self { width, height, dimension, cells })
    }

    /// Creates a new grid where each prototype is produced by the given function.
    pub fn new_with<F>(width: usize, height: usize, dimension: usize, mut cell_fn: F) -> GenericResult<Self>
    where
        F: FnMut(Coordinate) -> Vec<Float>,
    {
        validate_shape(width, height, dimension)?;

        let cells = (0..width * height).map(|idx| cell_fn(Coordinate(idx % width, idx / width))).collect();

        Self::new(width, height, dimension, cells)
    }

    /// Returns grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns dimensionality of prototypes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns a total amount of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns a prototype at given coordinate.
    pub fn get(&self, coordinate: &Coordinate) -> Option<&[Float]> {
        self.index(coordinate).map(|idx| self.cells[idx].as_slice())
    }

    /// Returns row-major index of the coordinate if it is within grid bounds.
    pub fn index(&self, coordinate: &Coordinate) -> Option<usize> {
        if coordinate.0 < self.width && coordinate.1 < self.height {
            Some(coordinate.1 * self.width + coordinate.0)
        } else {
            None
        }
    }

    /// Returns coordinate of the cell with given row-major index.
    pub fn coordinate(&self, index: usize) -> Coordinate {
        debug_assert!(index < self.cells.len());
        Coordinate(index % self.width, index / self.width)
    }

    /// Iterates over coordinates and prototypes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &[Float])> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| (self.coordinate(idx), cell.as_slice()))
    }

    /// Returns all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.cells.len()).map(|idx| self.coordinate(idx))
    }

    /// Returns prototypes in row-major order.
    pub fn cells(&self) -> &[Vec<Float>] {
        self.cells.as_slice()
    }

    /// Returns mutable prototypes in row-major order. Cells cannot be added or removed.
    pub(crate) fn cells_mut(&mut self) -> &mut [Vec<Float>] {
        self.cells.as_mut_slice()
    }

    /// Returns all prototypes flattened into one vector in row-major order.
    pub fn flatten(&self) -> Vec<Float> {
        self.cells.iter().flat_map(|cell| cell.iter().copied()).collect()
    }
}

fn validate_shape(width: usize, height: usize, dimension: usize) -> GenericResult<()> {
    if width == 0 || height == 0 {
        return Err(GenericError::from(format!("grid size must be positive, got {width}x{height}")));
    }

    if dimension == 0 {
        return Err("prototype dimension must be positive".into());
    }

    Ok(())
}
