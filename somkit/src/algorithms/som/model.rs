#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/model_test.rs"]
mod model_test;

use super::*;
use crate::algorithms::math::{DistanceMetric, EuclideanDistance, move_towards};
use crate::utils::*;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::Arc;

/// A minimal amount of cells when per-cell scans are split across threads.
/// Below it, the overhead of scheduling is higher than the scan itself.
const PARALLEL_THRESHOLD: usize = 1024;

/// Specifies a self-organizing map shape and its pluggable parts.
#[derive(Clone)]
pub struct SomConfig {
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Input dimensionality.
    pub dimension: usize,
    /// Grid topology.
    pub lattice: Arc<dyn Lattice + Send + Sync>,
    /// A distance between input and prototype vectors.
    pub metric: Arc<dyn DistanceMetric + Send + Sync>,
    /// A neighborhood influence function.
    pub neighborhood: NeighborhoodFunction,
}

impl SomConfig {
    /// Creates a new config with euclidean distance and gaussian neighborhood.
    pub fn new(width: usize, height: usize, dimension: usize, lattice: LatticeType) -> Self {
        Self {
            width,
            height,
            dimension,
            lattice: lattice.create(),
            metric: Arc::new(EuclideanDistance::new(dimension)),
            neighborhood: NeighborhoodFunction::default(),
        }
    }

    /// Sets a distance metric.
    pub fn with_metric(mut self, metric: Arc<dyn DistanceMetric + Send + Sync>) -> Self {
        self.metric = metric;
        self
    }

    /// Sets a neighborhood function.
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodFunction) -> Self {
        self.neighborhood = neighborhood;
        self
    }
}

/// A self-organizing map: owns the prototype grid and references a lattice and a distance metric.
pub struct SomModel {
    grid: PrototypeGrid,
    lattice: Arc<dyn Lattice + Send + Sync>,
    metric: Arc<dyn DistanceMetric + Send + Sync>,
    neighborhood: NeighborhoodFunction,
}

impl SomModel {
    /// Creates a new model using an existing grid which must match the config shape.
    pub fn new(config: SomConfig, grid: PrototypeGrid) -> GenericResult<Self> {
        if (grid.width(), grid.height(), grid.dimension()) != (config.width, config.height, config.dimension) {
            return Err(format!(
                "grid shape {}x{}x{} does not match config shape {}x{}x{}",
                grid.width(),
                grid.height(),
                grid.dimension(),
                config.width,
                config.height,
                config.dimension
            )
            .into());
        }

        if config.metric.dimension() != config.dimension {
            return Err(format!(
                "distance metric is defined for {} dimensions, map has {}",
                config.metric.dimension(),
                config.dimension
            )
            .into());
        }

        Ok(Self { grid, lattice: config.lattice, metric: config.metric, neighborhood: config.neighborhood })
    }

    /// Creates a new model with prototypes given in row-major order.
    pub fn from_prototypes(config: SomConfig, prototypes: Vec<Vec<Float>>) -> GenericResult<Self> {
        let grid = PrototypeGrid::new(config.width, config.height, config.dimension, prototypes)?;

        Self::new(config, grid)
    }

    /// Creates a new model with prototypes sampled uniformly from `[0, 1)` in each dimension,
    /// which is the input space of normalized data.
    pub fn new_random(config: SomConfig, random: &(dyn Random + Send + Sync)) -> GenericResult<Self> {
        let bounds = vec![(0., 1.); config.dimension];

        Self::new_with_bounds(config, bounds.as_slice(), random)
    }

    /// Creates a new model with prototypes sampled uniformly within per-dimension `(min, max)` bounds.
    pub fn new_with_bounds(
        config: SomConfig,
        bounds: &[(Float, Float)],
        random: &(dyn Random + Send + Sync),
    ) -> GenericResult<Self> {
        if bounds.len() != config.dimension {
            return Err(GenericError::dimension_mismatch(config.dimension, bounds.len()));
        }

        if let Some((min, max)) = bounds.iter().find(|(min, max)| min.is_nan() || max.is_nan() || min > max) {
            return Err(format!("invalid initialization bounds: ({min}, {max})").into());
        }

        let mut rng = random.get_rng();
        let grid = PrototypeGrid::new_with(config.width, config.height, config.dimension, |_| {
            bounds.iter().map(|&(min, max)| min + (max - min) * rng.gen_range(0.0..1.0)).collect()
        })?;

        Self::new(config, grid)
    }

    /// Returns grid width.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns grid height.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns input dimensionality.
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Returns the prototype grid.
    pub fn grid(&self) -> &PrototypeGrid {
        &self.grid
    }

    /// Returns the lattice.
    pub fn lattice(&self) -> &(dyn Lattice + Send + Sync) {
        self.lattice.as_ref()
    }

    /// Returns the distance metric.
    pub fn metric(&self) -> &(dyn DistanceMetric + Send + Sync) {
        self.metric.as_ref()
    }

    /// Returns the neighborhood function.
    pub fn neighborhood(&self) -> NeighborhoodFunction {
        self.neighborhood
    }

    /// Returns grid diagonal in lattice units, at least 1.
    pub fn diagonal(&self) -> Float {
        let corner = Coordinate(self.width() - 1, self.height() - 1);

        self.lattice.distance_between(&Coordinate(0, 0), &corner).max(1.)
    }

    /// Replaces prototypes with the grid of the same shape, e.g. loaded from a storage.
    pub fn replace_grid(&mut self, grid: PrototypeGrid) -> GenericResult<()> {
        if (grid.width(), grid.height(), grid.dimension()) != (self.width(), self.height(), self.dimension()) {
            return Err(format!(
                "cannot replace {}x{}x{} grid with {}x{}x{}",
                self.width(),
                self.height(),
                self.dimension(),
                grid.width(),
                grid.height(),
                grid.dimension()
            )
            .into());
        }

        self.grid = grid;

        Ok(())
    }

    /// Finds the best matching unit for the input. Ties are resolved to the first cell in
    /// row-major order.
    pub fn find_bmu(&self, input: &[Float]) -> GenericResult<Coordinate> {
        self.find_bmu_with_distance(input).map(|(coordinate, _)| coordinate)
    }

    /// Finds the best matching unit for the input and returns it with its distance to the input.
    pub fn find_bmu_with_distance(&self, input: &[Float]) -> GenericResult<(Coordinate, Float)> {
        self.validate_input(input)?;

        let metric = self.metric.as_ref();
        let select = |a: (Float, usize), b: (Float, usize)| {
            if compare_ranked(&a, &b) == Ordering::Greater { b } else { a }
        };
        let empty = || (Float::INFINITY, usize::MAX);

        let (distance, index) = if self.grid.size() >= PARALLEL_THRESHOLD {
            map_reduce(self.grid.cells(), |idx, cell| (metric.distance(input, cell), idx), empty, select)
        } else {
            self.grid
                .cells()
                .iter()
                .enumerate()
                .map(|(idx, cell)| (metric.distance(input, cell), idx))
                .fold(empty(), select)
        };

        if index == usize::MAX {
            return Err("cannot find best matching unit: distances are not comparable".into());
        }

        Ok((self.grid.coordinate(index), distance))
    }

    /// Finds the best and the second best matching units for the input.
    /// For a grid with a single cell, both are the same.
    pub fn find_two_bmus(&self, input: &[Float]) -> GenericResult<(Coordinate, Coordinate)> {
        self.validate_input(input)?;

        let mut ranked = self
            .grid
            .cells()
            .iter()
            .enumerate()
            .map(|(idx, cell)| (self.metric.distance(input, cell), idx))
            .collect::<Vec<_>>();
        ranked.sort_by(compare_ranked);

        let first = self.grid.coordinate(ranked[0].1);
        let second = ranked.get(1).map_or(first, |(_, idx)| self.grid.coordinate(*idx));

        Ok((first, second))
    }

    /// Pulls every prototype towards the input: `c += learning_rate * h * (input - c)`, where `h`
    /// is the neighborhood influence of the cell's topological distance to the best matching unit.
    pub fn adapt_towards(
        &mut self,
        input: &[Float],
        bmu: &Coordinate,
        learning_rate: Float,
        radius: Float,
    ) -> GenericResult<()> {
        self.validate_input(input)?;

        if self.grid.index(bmu).is_none() {
            return Err(format!("best matching unit {bmu} is outside of the grid").into());
        }

        if !learning_rate.is_finite() || learning_rate < 0. {
            return Err(format!("learning rate must be a non-negative number, got {learning_rate}").into());
        }

        let width = self.width();
        let lattice = self.lattice.as_ref();
        let neighborhood = self.neighborhood;
        let adjust = |idx: usize, cell: &mut Vec<Float>| {
            let coordinate = Coordinate(idx % width, idx / width);
            let influence = neighborhood.influence(lattice.distance_between(bmu, &coordinate), radius);

            if influence > 0. {
                move_towards(cell.as_mut_slice(), input, learning_rate * influence);
            }
        };

        if self.grid.size() >= PARALLEL_THRESHOLD {
            parallel_foreach_mut(self.grid.cells_mut(), adjust);
        } else {
            self.grid.cells_mut().iter_mut().enumerate().for_each(|(idx, cell)| adjust(idx, cell));
        }

        Ok(())
    }

    /// Runs a single adaptation step: finds the best matching unit and adapts the grid towards
    /// the input. Returns the unit with its distance to the input measured before adaptation.
    pub fn learn(
        &mut self,
        input: &[Float],
        learning_rate: Float,
        radius: Float,
    ) -> GenericResult<(Coordinate, Float)> {
        let (bmu, distance) = self.find_bmu_with_distance(input)?;

        self.adapt_towards(input, &bmu, learning_rate, radius)?;

        Ok((bmu, distance))
    }

    fn validate_input(&self, input: &[Float]) -> GenericResult<()> {
        if input.len() != self.dimension() {
            Err(GenericError::dimension_mismatch(self.dimension(), input.len()))
        } else {
            Ok(())
        }
    }
}
