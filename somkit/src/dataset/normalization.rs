use super::{Dataset, get_bounds};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Transforms input values in place and back.
pub trait Normalization {
    /// Normalizes values in place.
    fn normalize(&self, values: &mut [Float]);

    /// Restores original values in place.
    fn denormalize(&self, values: &mut [Float]);
}

/// Scales every dimension into `[0, 1]` using bounds observed in the dataset.
/// Constant dimensions are mapped to zero.
#[derive(Clone, Debug)]
pub struct MinMaxNormalization {
    bounds: Vec<(Float, Float)>,
}

impl MinMaxNormalization {
    /// Creates a new instance of `MinMaxNormalization` from the dataset bounds.
    pub fn new(dataset: &dyn Dataset) -> Self {
        Self { bounds: get_bounds(dataset) }
    }

    /// Returns `(min, max)` bounds per dimension.
    pub fn bounds(&self) -> &[(Float, Float)] {
        self.bounds.as_slice()
    }
}

impl Normalization for MinMaxNormalization {
    fn normalize(&self, values: &mut [Float]) {
        debug_assert_eq!(values.len(), self.bounds.len());

        values.iter_mut().zip(self.bounds.iter()).for_each(|(value, &(min, max))| {
            let range = max - min;
            *value = if compare_floats(range, 0.) == Ordering::Equal { 0. } else { (*value - min) / range };
        });
    }

    fn denormalize(&self, values: &mut [Float]) {
        debug_assert_eq!(values.len(), self.bounds.len());

        values.iter_mut().zip(self.bounds.iter()).for_each(|(value, &(min, max))| {
            *value = min + *value * (max - min);
        });
    }
}
