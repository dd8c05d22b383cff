//! This crate exposes a self-organizing map (Kohonen map) engine: a fixed grid of prototype
//! vectors on a rectangular or hexagonal lattice, streaming and offline training algorithms and
//! post-training analysis used to find correlated input features.
//!
//! A typical flow:
//!
//! - build a [`SomConfig`](crate::algorithms::som::SomConfig) and a random
//!   [`SomModel`](crate::algorithms::som::SomModel);
//! - train it with [`StreamingTrainer`](crate::training::StreamingTrainer) or
//!   [`OfflineTrainer`](crate::training::OfflineTrainer) on a
//!   [`Dataset`](crate::dataset::Dataset);
//! - extract component planes and compare them to group features which vary together.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod analysis;
pub mod dataset;
pub mod persistence;
pub mod prelude;
pub mod training;
pub mod utils;
