#[cfg(test)]
#[path = "../../tests/unit/analysis/plane_test.rs"]
mod plane_test;

use crate::algorithms::som::{Coordinate, PrototypeGrid};
use crate::utils::{Float, GenericResult};

/// A single-dimension slice of all prototypes across the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentPlane {
    name: String,
    width: usize,
    height: usize,
    values: Vec<Float>,
}

impl ComponentPlane {
    /// Extracts the plane of the given input dimension from the grid.
    pub fn extract(grid: &PrototypeGrid, dimension_index: usize, name: &str) -> GenericResult<Self> {
        if dimension_index >= grid.dimension() {
            return Err(format!(
                "dimension index {dimension_index} is out of range [0, {}) for plane '{name}'",
                grid.dimension()
            )
            .into());
        }

        Ok(Self {
            name: name.to_string(),
            width: grid.width(),
            height: grid.height(),
            values: grid.cells().iter().map(|cell| cell[dimension_index]).collect(),
        })
    }

    /// Returns plane name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns plane width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns plane height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns value at given coordinate.
    pub fn get(&self, coordinate: &Coordinate) -> Option<Float> {
        if coordinate.0 < self.width && coordinate.1 < self.height {
            Some(self.values[coordinate.1 * self.width + coordinate.0])
        } else {
            None
        }
    }

    /// Returns plane values flattened in row-major order.
    pub fn flatten(&self) -> &[Float] {
        self.values.as_slice()
    }
}

/// Extracts component planes for every input dimension using given names.
pub fn get_component_planes(grid: &PrototypeGrid, names: &[String]) -> GenericResult<Vec<ComponentPlane>> {
    if names.len() != grid.dimension() {
        return Err(format!("expected {} plane names, got {}", grid.dimension(), names.len()).into());
    }

    names.iter().enumerate().map(|(idx, name)| ComponentPlane::extract(grid, idx, name)).collect()
}
