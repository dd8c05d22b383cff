//! This module contains training algorithms which drive prototype adaptation.
//!
//! Both variants share the single adaptation step of [`SomModel::learn`] and differ only in how
//! learning rate and neighborhood radius are scheduled:
//!
//! - [`StreamingTrainer`]: one sample at a time, no epochs, exponential decay towards non-zero
//!   final values.
//! - [`OfflineTrainer`]: a fixed dataset presented for a number of epochs split into an ordering
//!   and a fine-tuning phase.

use crate::algorithms::som::SomModel;
use crate::dataset::Dataset;
use crate::utils::{Float, GenericResult};
use std::fmt::{Display, Formatter};

mod offline;
pub use self::offline::*;

mod schedule;
pub use self::schedule::*;

mod streaming;
pub use self::streaming::*;

/// Drives the adaptation loop of a self-organizing map.
pub trait TrainingAlgorithm {
    /// Trains the model on the dataset presenting samples in their current order.
    fn train(&mut self, model: &mut SomModel, dataset: &dyn Dataset) -> GenericResult<TrainingSummary>;
}

/// Summarizes a training run.
#[derive(Clone, Debug, Default)]
pub struct TrainingSummary {
    /// Amount of complete passes over the dataset.
    pub epochs: usize,
    /// Amount of adaptation steps.
    pub iterations: usize,
    /// Learning rate used by the last adaptation step.
    pub learning_rate: Float,
    /// Neighborhood radius used by the last adaptation step, in lattice units.
    pub radius: Float,
    /// Mean quantization error measured during each pass.
    pub errors: Vec<Float>,
    /// True if training was stopped by quota before the schedule was completed.
    pub is_interrupted: bool,
}

impl Display for TrainingSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "epochs: {}, iterations: {}, learning rate: {:.5}, radius: {:.3}, error: {}{}",
            self.epochs,
            self.iterations,
            self.learning_rate,
            self.radius,
            self.errors.last().map_or("n/a".to_string(), |error| format!("{error:.5}")),
            if self.is_interrupted { " (interrupted)" } else { "" }
        )
    }
}

pub(crate) fn validate_dataset(model: &SomModel, dataset: &dyn Dataset) -> GenericResult<()> {
    if dataset.dimension() != model.dimension() {
        return Err(format!(
            "dataset dimension {} does not match map dimension {}",
            dataset.dimension(),
            model.dimension()
        )
        .into());
    }

    Ok(())
}
