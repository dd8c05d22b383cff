//! Specifies a dataset interface consumed by training and an in-memory implementation.

#[cfg(test)]
#[path = "../../tests/unit/dataset/dataset_test.rs"]
mod dataset_test;

mod normalization;
pub use self::normalization::*;

use crate::utils::{Float, GenericError, GenericResult, Random};
use rand::seq::SliceRandom;

/// Represents a restartable sequence of input vectors of a fixed dimensionality.
pub trait Dataset {
    /// Returns dimensionality of the input vectors.
    fn dimension(&self) -> usize;

    /// Returns amount of input vectors.
    fn size(&self) -> usize;

    /// Returns per-dimension names.
    fn names(&self) -> &[String];

    /// Returns iterator over input vectors in the current order.
    fn iter(&self) -> Box<dyn Iterator<Item = &'_ [Float]> + '_>;

    /// Changes the order of input vectors without changing their values.
    fn shuffle(&mut self, random: &(dyn Random + Send + Sync));

    /// Transforms input vectors in place.
    fn normalize(&mut self, normalization: &dyn Normalization);
}

/// An in-memory dataset.
#[derive(Clone, Debug)]
pub struct VectorDataset {
    names: Vec<String>,
    items: Vec<Vec<Float>>,
}

impl VectorDataset {
    /// Creates a new instance of `VectorDataset`. If names are empty, default ones are generated.
    /// All values must be finite.
    pub fn new(names: Vec<String>, items: Vec<Vec<Float>>) -> GenericResult<Self> {
        let dimension = if names.is_empty() { items.first().map_or(0, |item| item.len()) } else { names.len() };

        if dimension == 0 {
            return Err("dataset dimension must be positive".into());
        }

        if let Some((idx, item)) = items.iter().enumerate().find(|(_, item)| item.len() != dimension) {
            return Err(format!("item {idx}: {}", GenericError::dimension_mismatch(dimension, item.len())).into());
        }

        let non_finite = items
            .iter()
            .enumerate()
            .find_map(|(idx, item)| item.iter().find(|value| !value.is_finite()).map(|value| (idx, *value)));
        if let Some((idx, value)) = non_finite {
            return Err(format!("item {idx}: values must be finite, got {value}").into());
        }

        let names = if names.is_empty() { (0..dimension).map(|idx| format!("x{idx}")).collect() } else { names };

        Ok(Self { names, items })
    }

    /// Returns an input vector by its index.
    pub fn get(&self, index: usize) -> Option<&[Float]> {
        self.items.get(index).map(|item| item.as_slice())
    }

    /// Returns `(min, max)` bounds per dimension, `(0, 0)` for empty dataset.
    pub fn bounds(&self) -> Vec<(Float, Float)> {
        get_bounds(self)
    }
}

impl Dataset for VectorDataset {
    fn dimension(&self) -> usize {
        self.names.len()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'_ [Float]> + '_> {
        Box::new(self.items.iter().map(|item| item.as_slice()))
    }

    fn shuffle(&mut self, random: &(dyn Random + Send + Sync)) {
        self.items.shuffle(&mut random.get_rng());
    }

    fn normalize(&mut self, normalization: &dyn Normalization) {
        self.items.iter_mut().for_each(|item| normalization.normalize(item.as_mut_slice()));
    }
}

/// Returns `(min, max)` bounds per dimension of the dataset.
pub fn get_bounds(dataset: &dyn Dataset) -> Vec<(Float, Float)> {
    let dimension = dataset.dimension();

    if dataset.size() == 0 {
        return vec![(0., 0.); dimension];
    }

    dataset.iter().fold(vec![(Float::MAX, Float::MIN); dimension], |mut bounds, item| {
        bounds.iter_mut().zip(item.iter()).for_each(|((min, max), &value)| {
            *min = min.min(value);
            *max = max.max(value);
        });

        bounds
    })
}
