#[cfg(test)]
#[path = "../../tests/unit/training/offline_test.rs"]
mod offline_test;

use super::*;
use crate::utils::{Environment, Timer};
use std::sync::Arc;

/// An ordering phase configuration.
#[derive(Clone, Debug)]
pub struct OrderingPhase {
    /// Amount of epochs.
    pub epochs: usize,
    /// Initial and final learning rate.
    pub learning_rate: (Float, Float),
    /// Initial and final radius in lattice units. When not set, the radius decays from the grid
    /// diagonal to one.
    pub radius: Option<(Float, Float)>,
}

/// A fine-tuning phase configuration.
#[derive(Clone, Debug)]
pub struct FineTuningPhase {
    /// Amount of epochs.
    pub epochs: usize,
    /// A constant learning rate.
    pub learning_rate: Float,
    /// A constant radius in lattice units.
    pub radius: Float,
}

/// An offline trainer configuration.
#[derive(Clone, Debug)]
pub struct OfflineConfig {
    /// Coarse ordering phase.
    pub ordering: OrderingPhase,
    /// Local refinement phase.
    pub fine_tuning: FineTuningPhase,
    /// Log progress every given amount of epochs.
    pub log_interval: Option<usize>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            ordering: OrderingPhase { epochs: 10, learning_rate: (0.5, 0.05), radius: None },
            fine_tuning: FineTuningPhase { epochs: 20, learning_rate: 0.02, radius: 1. },
            log_interval: Some(1),
        }
    }
}

/// Trains the map on a finite dataset for a fixed amount of epochs.
///
/// During the ordering phase, learning rate and radius decay linearly with every adaptation step
/// from their initial to their final values. During the fine-tuning phase both stay constant.
/// Samples are presented in the dataset's order and adapted strictly one after another, so the
/// same initial grid, config and sample order always produce the same grid.
///
/// The environment quota is checked between epochs only.
pub struct OfflineTrainer {
    config: OfflineConfig,
    environment: Arc<Environment>,
}

impl OfflineTrainer {
    /// Creates a new instance of `OfflineTrainer`.
    pub fn new(config: OfflineConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        Decay::new(config.ordering.learning_rate.0, config.ordering.learning_rate.1, DecayKind::Linear)
            .map_err(|err| format!("invalid ordering learning rate: {err}"))?;

        if let Some((initial, last)) = config.ordering.radius {
            Decay::new(initial, last, DecayKind::Linear).map_err(|err| format!("invalid ordering radius: {err}"))?;
        }

        let FineTuningPhase { learning_rate, radius, .. } = config.fine_tuning;
        if !learning_rate.is_finite() || learning_rate < 0. || !radius.is_finite() || radius < 0. {
            return Err(
                format!("invalid fine tuning parameters: learning rate={learning_rate}, radius={radius}").into()
            );
        }

        Ok(Self { config, environment })
    }

    /// Returns total amount of epochs in both phases.
    pub fn total_epochs(&self) -> usize {
        self.config.ordering.epochs + self.config.fine_tuning.epochs
    }

    fn run_epoch(
        &self,
        model: &mut SomModel,
        dataset: &dyn Dataset,
        summary: &mut TrainingSummary,
        mut parameters: impl FnMut(usize) -> (Float, Float),
    ) -> GenericResult<Float> {
        let mut errors_sum = 0.;

        for (step, input) in dataset.iter().enumerate() {
            let (learning_rate, radius) = parameters(step);
            let (_, distance) = model.learn(input, learning_rate, radius)?;

            errors_sum += distance;
            summary.iterations += 1;
            summary.learning_rate = learning_rate;
            summary.radius = radius;
        }

        Ok(errors_sum / dataset.size().max(1) as Float)
    }

    fn log_epoch(&self, phase: &str, epoch: usize, summary: &TrainingSummary, timer: &Timer) {
        let is_last = epoch == self.total_epochs();
        if self.config.log_interval.is_some_and(|interval| interval > 0 && (epoch % interval == 0 || is_last)) {
            (self.environment.logger)(&format!(
                "[{phase}] epoch {epoch}/{}: learning rate={:.5}, radius={:.3}, error={:.5}, elapsed {:.3}s",
                self.total_epochs(),
                summary.learning_rate,
                summary.radius,
                summary.errors.last().copied().unwrap_or_default(),
                timer.elapsed_secs_as_float()
            ));
        }
    }
}

impl TrainingAlgorithm for OfflineTrainer {
    fn train(&mut self, model: &mut SomModel, dataset: &dyn Dataset) -> GenericResult<TrainingSummary> {
        validate_dataset(model, dataset)?;

        if dataset.size() == 0 {
            return Err("cannot train on empty dataset".into());
        }

        let timer = Timer::start();
        let ordering = &self.config.ordering;
        let (radius_initial, radius_last) = ordering.radius.unwrap_or((model.diagonal(), 1.));
        let learning_rate = Decay::new(ordering.learning_rate.0, ordering.learning_rate.1, DecayKind::Linear)?;
        let radius = Decay::new(radius_initial, radius_last, DecayKind::Linear)?;

        let samples = dataset.size();
        let total_steps = ordering.epochs * samples;
        let progress = |step: usize| if total_steps > 1 { step as Float / (total_steps - 1) as Float } else { 1. };

        let mut summary = TrainingSummary::default();

        (self.environment.logger)(&format!(
            "start training: {}x{} map, {samples} samples, {} ordering and {} fine tuning epochs",
            model.width(),
            model.height(),
            ordering.epochs,
            self.config.fine_tuning.epochs
        ));

        for epoch in 0..ordering.epochs {
            if self.environment.is_quota_reached() {
                summary.is_interrupted = true;
                break;
            }

            let offset = epoch * samples;
            let error = self.run_epoch(model, dataset, &mut summary, |step| {
                let progress = progress(offset + step);
                (learning_rate.value(progress), radius.value(progress))
            })?;

            summary.epochs += 1;
            summary.errors.push(error);
            self.log_epoch("ordering", summary.epochs, &summary, &timer);
        }

        let FineTuningPhase { epochs, learning_rate, radius } = self.config.fine_tuning;
        for _ in 0..epochs {
            if summary.is_interrupted || self.environment.is_quota_reached() {
                summary.is_interrupted = true;
                break;
            }

            let error = self.run_epoch(model, dataset, &mut summary, |_| (learning_rate, radius))?;

            summary.epochs += 1;
            summary.errors.push(error);
            self.log_epoch("fine tuning", summary.epochs, &summary, &timer);
        }

        (self.environment.logger)(&format!(
            "training is {} in {:.3}s: {summary}",
            if summary.is_interrupted { "interrupted" } else { "completed" },
            timer.elapsed_secs_as_float()
        ));

        Ok(summary)
    }
}
