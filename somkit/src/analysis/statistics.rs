#[cfg(test)]
#[path = "../../tests/unit/analysis/statistics_test.rs"]
mod statistics_test;

use crate::algorithms::som::{Coordinate, SomModel};
use crate::dataset::Dataset;
use crate::utils::*;
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// Keeps statistics of how well the model fits a dataset.
#[derive(Clone, Debug, Default)]
pub struct ModelStatistics {
    /// Mean distance between input vectors and their best matching units.
    pub quantization_error: Float,
    /// A share of input vectors whose best and second best matching units are not neighbors.
    pub topographic_error: Float,
    /// Amount of input vectors mapped to each cell. Cells without hits are absent.
    pub hits: FxHashMap<Coordinate, usize>,
    /// Amount of evaluated input vectors.
    pub samples: usize,
}

impl ModelStatistics {
    /// Computes statistics by mapping every input vector of the dataset to the model.
    pub fn compute(model: &SomModel, dataset: &dyn Dataset) -> GenericResult<Self> {
        if dataset.dimension() != model.dimension() {
            return Err(GenericError::dimension_mismatch(model.dimension(), dataset.dimension()));
        }

        let inputs = dataset.iter().collect::<Vec<_>>();
        let results = parallel_collect(inputs.as_slice(), |input| -> GenericResult<_> {
            let (bmu, distance) = model.find_bmu_with_distance(input)?;
            let (_, second) = model.find_two_bmus(input)?;
            let is_error = model.width() * model.height() > 1 && !model.lattice().are_neighbors(&bmu, &second);

            Ok((bmu, distance, is_error))
        })
        .into_iter()
        .collect::<GenericResult<Vec<_>>>()?;

        let samples = results.len();
        if samples == 0 {
            return Ok(Self::default());
        }

        let (error_sum, topographic_errors, hits) = results.into_iter().fold(
            (0., 0_usize, FxHashMap::<Coordinate, usize>::default()),
            |(error_sum, topographic_errors, mut hits), (bmu, distance, is_error)| {
                *hits.entry(bmu).or_insert(0) += 1;
                (error_sum + distance, topographic_errors + usize::from(is_error), hits)
            },
        );

        Ok(Self {
            quantization_error: error_sum / samples as Float,
            topographic_error: topographic_errors as Float / samples as Float,
            hits,
            samples,
        })
    }

    /// Returns amount of hits of the cell.
    pub fn hits_at(&self, coordinate: &Coordinate) -> usize {
        self.hits.get(coordinate).copied().unwrap_or(0)
    }
}

impl Display for ModelStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "samples: {}, quantization error: {:.5}, topographic error: {:.5}, used cells: {}",
            self.samples,
            self.quantization_error,
            self.topographic_error,
            self.hits.len()
        )
    }
}
