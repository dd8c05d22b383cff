//! Prepares a model and runs training.

#[cfg(test)]
#[path = "../../tests/unit/extensions/train_test.rs"]
mod train_test;

use super::config::*;
use somkit::algorithms::som::*;
use somkit::dataset::Dataset;
use somkit::persistence::load_grid;
use somkit::training::*;
use somkit::utils::{Environment, GenericResult};
use std::path::Path;
use std::sync::Arc;

/// Specifies a map shape resolved from config and command line arguments.
#[derive(Clone, Debug)]
pub struct MapShape {
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Lattice type.
    pub lattice: LatticeType,
    /// Neighborhood function.
    pub neighborhood: NeighborhoodFunction,
}

impl MapShape {
    /// Creates a map shape from config where command line values take precedence.
    pub fn new(
        config: Option<&MapConfig>,
        width: Option<usize>,
        height: Option<usize>,
        lattice: Option<LatticeType>,
    ) -> Self {
        let config = config.cloned().unwrap_or_default();

        Self {
            width: width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            height: height.or(config.height).unwrap_or(DEFAULT_HEIGHT),
            lattice: lattice.or(config.lattice).unwrap_or(LatticeType::Rectangular),
            neighborhood: config.neighborhood.unwrap_or_default(),
        }
    }
}

/// Loads previously saved model or creates a new one with random prototypes when there is no
/// saved model yet. A loaded model keeps its own size.
pub fn get_model(
    shape: &MapShape,
    dimension: usize,
    models_dir: &Path,
    name: &str,
    environment: &Environment,
) -> GenericResult<SomModel> {
    match load_grid(models_dir, name)? {
        Some(grid) => {
            if grid.dimension() != dimension {
                return Err(format!(
                    "saved model '{name}' has dimension {}, dataset has {dimension}",
                    grid.dimension()
                )
                .into());
            }

            (environment.logger)(&format!(
                "loaded model '{name}' from '{}': {}x{} {} map",
                models_dir.display(),
                grid.width(),
                grid.height(),
                shape.lattice
            ));

            let config = SomConfig::new(grid.width(), grid.height(), dimension, shape.lattice)
                .with_neighborhood(shape.neighborhood);

            SomModel::new(config, grid)
        }
        None => {
            (environment.logger)(&format!(
                "model '{name}' is not found in '{}', starting from random initialization",
                models_dir.display()
            ));

            let config = SomConfig::new(shape.width, shape.height, dimension, shape.lattice)
                .with_neighborhood(shape.neighborhood);

            SomModel::new_random(config, environment.random.as_ref())
        }
    }
}

/// Trains the model with the configured algorithm. A streaming trainer sees the dataset
/// `epochs` times keeping its schedule across passes; the quota is checked between passes.
pub fn train_model(
    model: &mut SomModel,
    dataset: &dyn Dataset,
    config: &TrainingConfig,
    epochs: Option<usize>,
    environment: Arc<Environment>,
) -> GenericResult<TrainingSummary> {
    if let Some((streaming, default_epochs)) = get_streaming_config(config) {
        let epochs = epochs.unwrap_or(default_epochs);
        let mut trainer = StreamingTrainer::new(streaming, environment.clone())?;
        let mut summary = TrainingSummary::default();

        for _ in 0..epochs {
            if environment.is_quota_reached() {
                summary.is_interrupted = true;
                break;
            }

            let pass = trainer.train(model, dataset)?;

            summary.epochs += pass.epochs;
            summary.iterations += pass.iterations;
            summary.learning_rate = pass.learning_rate;
            summary.radius = pass.radius;
            summary.errors.extend(pass.errors);
        }

        return Ok(summary);
    }

    match get_offline_config(config) {
        Some(offline) => OfflineTrainer::new(offline, environment)?.train(model, dataset),
        None => Err("unknown training configuration".into()),
    }
}
