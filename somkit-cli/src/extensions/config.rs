//! Training configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use serde::Deserialize;
use somkit::algorithms::som::{LatticeType, NeighborhoodFunction};
use somkit::training::*;
use somkit::utils::{Float, GenericResult};
use std::io::{BufReader, Read};

/// Default map width.
pub const DEFAULT_WIDTH: usize = 40;
/// Default map height.
pub const DEFAULT_HEIGHT: usize = 20;
/// Default amount of passes over the dataset for the streaming trainer.
pub const DEFAULT_STREAMING_EPOCHS: usize = 100;

/// A training run configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies map shape.
    pub map: Option<MapConfig>,
    /// Specifies training algorithm.
    pub training: Option<TrainingConfig>,
}

/// A map configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub lattice: Option<LatticeType>,
    pub neighborhood: Option<NeighborhoodFunction>,
}

/// A training algorithm configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TrainingConfig {
    /// A streaming trainer which sees every sample once per pass.
    #[serde(rename_all = "camelCase")]
    Streaming {
        /// Initial and final learning rate. Default is `[0.1, 0.08]`.
        learning_rate: Option<(Float, Float)>,
        /// Initial and final radius as fractions of the grid diagonal. Default is `[0.6, 0.2]`.
        radius: Option<(Float, Float)>,
        /// Decay horizon in iterations. Default is 2000.
        horizon: Option<usize>,
        /// A smoothing factor of the error moving average. Default is 0.7.
        error_smoothing: Option<Float>,
        /// Amount of passes over the dataset. Default is 100.
        epochs: Option<usize>,
        /// Log progress every given amount of iterations.
        log_interval: Option<usize>,
    },

    /// An offline trainer with ordering and fine-tuning phases.
    #[serde(rename_all = "camelCase")]
    Offline {
        ordering: Option<OrderingConfig>,
        fine_tuning: Option<FineTuningConfig>,
        /// Log progress every given amount of epochs. Default is 1.
        log_interval: Option<usize>,
    },
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig::Streaming {
            learning_rate: None,
            radius: None,
            horizon: None,
            error_smoothing: None,
            epochs: None,
            log_interval: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingConfig {
    pub epochs: Option<usize>,
    pub learning_rate: Option<(Float, Float)>,
    /// When omitted, radius decays from the grid diagonal to one.
    pub radius: Option<(Float, Float)>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineTuningConfig {
    pub epochs: Option<usize>,
    pub learning_rate: Option<Float>,
    pub radius: Option<Float>,
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a streaming trainer config from training config, filling missing values with defaults.
/// Returns `None` if training config is not a streaming one.
pub fn get_streaming_config(config: &TrainingConfig) -> Option<(StreamingConfig, usize)> {
    match config {
        TrainingConfig::Streaming { learning_rate, radius, horizon, error_smoothing, epochs, log_interval } => {
            let default = StreamingConfig::default();

            Some((
                StreamingConfig {
                    learning_rate: learning_rate.unwrap_or(default.learning_rate),
                    radius: radius.unwrap_or(default.radius),
                    horizon: horizon.unwrap_or(default.horizon),
                    error_smoothing: error_smoothing.unwrap_or(default.error_smoothing),
                    log_interval: log_interval.or(default.log_interval),
                },
                epochs.unwrap_or(DEFAULT_STREAMING_EPOCHS),
            ))
        }
        TrainingConfig::Offline { .. } => None,
    }
}

/// Creates an offline trainer config from training config, filling missing values with defaults.
/// Returns `None` if training config is not an offline one.
pub fn get_offline_config(config: &TrainingConfig) -> Option<OfflineConfig> {
    match config {
        TrainingConfig::Offline { ordering, fine_tuning, log_interval } => {
            let default = OfflineConfig::default();

            let ordering = ordering.as_ref().map_or(default.ordering.clone(), |ordering| OrderingPhase {
                epochs: ordering.epochs.unwrap_or(default.ordering.epochs),
                learning_rate: ordering.learning_rate.unwrap_or(default.ordering.learning_rate),
                radius: ordering.radius.or(default.ordering.radius),
            });

            let fine_tuning = fine_tuning.as_ref().map_or(default.fine_tuning.clone(), |fine_tuning| FineTuningPhase {
                epochs: fine_tuning.epochs.unwrap_or(default.fine_tuning.epochs),
                learning_rate: fine_tuning.learning_rate.unwrap_or(default.fine_tuning.learning_rate),
                radius: fine_tuning.radius.unwrap_or(default.fine_tuning.radius),
            });

            Some(OfflineConfig { ordering, fine_tuning, log_interval: log_interval.or(default.log_interval) })
        }
        TrainingConfig::Streaming { .. } => None,
    }
}
