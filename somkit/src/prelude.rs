//! This module reimports a common used types.

pub use crate::algorithms::math::DistanceMetric;
pub use crate::algorithms::math::EuclideanDistance;

pub use crate::algorithms::som::Coordinate;
pub use crate::algorithms::som::LatticeType;
pub use crate::algorithms::som::NeighborhoodFunction;
pub use crate::algorithms::som::PrototypeGrid;
pub use crate::algorithms::som::SomConfig;
pub use crate::algorithms::som::SomModel;

pub use crate::analysis::ComponentPlane;
pub use crate::analysis::ModelStatistics;
pub use crate::analysis::PlaneDistance;

pub use crate::dataset::Dataset;
pub use crate::dataset::MinMaxNormalization;
pub use crate::dataset::VectorDataset;

pub use crate::training::OfflineConfig;
pub use crate::training::OfflineTrainer;
pub use crate::training::StreamingConfig;
pub use crate::training::StreamingTrainer;
pub use crate::training::TrainingAlgorithm;
pub use crate::training::TrainingSummary;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Random;
