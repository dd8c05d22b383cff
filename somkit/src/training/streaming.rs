#[cfg(test)]
#[path = "../../tests/unit/training/streaming_test.rs"]
mod streaming_test;

use super::*;
use crate::algorithms::som::Coordinate;
use crate::utils::{Environment, GenericError};
use std::sync::Arc;

/// A streaming trainer configuration.
#[derive(Clone, Debug)]
pub struct StreamingConfig {
    /// Initial and final learning rate.
    pub learning_rate: (Float, Float),
    /// Initial and final neighborhood radius as fractions of the grid diagonal.
    pub radius: (Float, Float),
    /// Amount of iterations after which learning rate and radius stay at their final values.
    pub horizon: usize,
    /// A smoothing factor in `[0, 1)` of the moving average of the quantization error:
    /// the higher it is, the longer the memory.
    pub error_smoothing: Float,
    /// Log progress every given amount of iterations.
    pub log_interval: Option<usize>,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self { learning_rate: (0.1, 0.08), radius: (0.6, 0.2), horizon: 2000, error_smoothing: 0.7, log_interval: None }
    }
}

/// Adapts the map one sample at a time, in arrival order, without a notion of epochs.
///
/// Learning rate and radius decay exponentially during the first `horizon` iterations and then
/// stay at their final values forever. As final values are non-zero, the map keeps following
/// the input distribution when it drifts; no explicit drift detection is performed.
///
/// The iteration counter is not a part of the model: a trainer created for a loaded model
/// starts its schedule from zero unless [`StreamingTrainer::resume_at`] is used.
pub struct StreamingTrainer {
    learning_rate: Decay,
    radius: Decay,
    horizon: usize,
    error_smoothing: Float,
    log_interval: Option<usize>,
    iteration: usize,
    mean_error: Option<Float>,
    environment: Arc<Environment>,
}

impl StreamingTrainer {
    /// Creates a new instance of `StreamingTrainer`.
    pub fn new(config: StreamingConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        if config.horizon == 0 {
            return Err("decay horizon must be positive".into());
        }

        if !(0. ..1.).contains(&config.error_smoothing) {
            return Err(format!("error smoothing must be in [0, 1), got {}", config.error_smoothing).into());
        }

        let create_decay = |(initial, last): (Float, Float), name: &str| {
            Decay::new(initial, last, DecayKind::Exponential)
                .map_err(|err| GenericError::from(format!("invalid {name}: {err}")))
        };

        Ok(Self {
            learning_rate: create_decay(config.learning_rate, "learning rate")?,
            radius: create_decay(config.radius, "radius")?,
            horizon: config.horizon,
            error_smoothing: config.error_smoothing,
            log_interval: config.log_interval.filter(|interval| *interval > 0),
            iteration: 0,
            mean_error: None,
            environment,
        })
    }

    /// Continues the schedule from given iteration, e.g. for a model loaded from a storage.
    pub fn resume_at(mut self, iteration: usize) -> Self {
        self.iteration = iteration;
        self
    }

    /// Returns amount of samples seen so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns learning rate which will be used for the next sample.
    pub fn learning_rate(&self) -> Float {
        self.learning_rate.value(self.progress())
    }

    /// Returns radius, as a fraction of the grid diagonal, which will be used for the next sample.
    pub fn radius_fraction(&self) -> Float {
        self.radius.value(self.progress())
    }

    /// Returns moving average of the quantization error normalized by `sqrt(dimension)`.
    pub fn mean_error(&self) -> Option<Float> {
        self.mean_error
    }

    /// Adapts the model to a single sample and returns its best matching unit.
    pub fn learn(&mut self, model: &mut SomModel, input: &[Float]) -> GenericResult<Coordinate> {
        self.step(model, input).map(|step| step.bmu)
    }

    fn step(&mut self, model: &mut SomModel, input: &[Float]) -> GenericResult<Step> {
        let learning_rate = self.learning_rate();
        let radius = self.radius_fraction() * model.diagonal();

        let (bmu, distance) = model.learn(input, learning_rate, radius)?;

        let error = distance / (model.dimension() as Float).sqrt();
        self.mean_error = Some(match self.mean_error {
            Some(mean) => self.error_smoothing * mean + (1. - self.error_smoothing) * error,
            None => error,
        });
        self.iteration += 1;

        if self.log_interval.is_some_and(|interval| self.iteration % interval == 0) {
            (self.environment.logger)(&format!(
                "[streaming] iteration {}: learning rate={learning_rate:.5}, radius={radius:.3}, mean error={:.5}",
                self.iteration,
                self.mean_error.unwrap_or_default()
            ));
        }

        Ok(Step { bmu, distance, learning_rate, radius })
    }

    fn progress(&self) -> Float {
        self.iteration.min(self.horizon) as Float / self.horizon as Float
    }
}

impl TrainingAlgorithm for StreamingTrainer {
    fn train(&mut self, model: &mut SomModel, dataset: &dyn Dataset) -> GenericResult<TrainingSummary> {
        validate_dataset(model, dataset)?;

        let mut summary = TrainingSummary {
            learning_rate: self.learning_rate(),
            radius: self.radius_fraction() * model.diagonal(),
            ..TrainingSummary::default()
        };
        let mut errors_sum = 0.;

        for input in dataset.iter() {
            let step = self.step(model, input)?;

            errors_sum += step.distance;
            summary.iterations += 1;
            summary.learning_rate = step.learning_rate;
            summary.radius = step.radius;
        }

        summary.epochs = 1;
        summary.errors.push(if summary.iterations > 0 { errors_sum / summary.iterations as Float } else { 0. });

        Ok(summary)
    }
}

struct Step {
    bmu: Coordinate,
    distance: Float,
    learning_rate: Float,
    radius: Float,
}
