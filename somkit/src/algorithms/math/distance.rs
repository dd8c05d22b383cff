#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use super::euclidean_distance;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Defines a distance between an input vector and a prototype vector.
///
/// Implementations must return a non-negative value which is zero only for identical vectors.
/// Both vectors are expected to have the dimensionality the metric was created for: a mismatch
/// is a programming error and makes the metric panic. Model operations validate input
/// dimensionality before calling the metric.
pub trait DistanceMetric {
    /// Returns the distance between input and prototype.
    fn distance(&self, input: &[Float], prototype: &[Float]) -> Float;

    /// Returns the dimensionality the metric expects.
    fn dimension(&self) -> usize;
}

/// A plain euclidean distance in `n` dimensions.
#[derive(Clone, Debug)]
pub struct EuclideanDistance {
    dimension: usize,
}

impl EuclideanDistance {
    /// Creates a new instance of `EuclideanDistance` for vectors of the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl DistanceMetric for EuclideanDistance {
    fn distance(&self, input: &[Float], prototype: &[Float]) -> Float {
        assert_dimensions(self.dimension, input, prototype);

        euclidean_distance(input, prototype)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// A distance which standardizes each coordinate using relative change:
/// `D = sqrt(sum((|x - y| / max(|x|, |y|))^2))`. Useful when input dimensions are not normalized.
#[derive(Clone, Debug)]
pub struct RelativeDistance {
    dimension: usize,
}

impl RelativeDistance {
    /// Creates a new instance of `RelativeDistance` for vectors of the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl DistanceMetric for RelativeDistance {
    fn distance(&self, input: &[Float], prototype: &[Float]) -> Float {
        assert_dimensions(self.dimension, input, prototype);

        relative_distance(input.iter().copied(), prototype.iter().copied())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Calculates relative distance between two vectors. As weights are not normalized, apply
/// standardization using relative change: D = |x - y| / max(|x|, |y|)
pub fn relative_distance<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    a.zip(b)
        .fold(Float::default(), |acc, (a, b)| {
            let divider = a.abs().max(b.abs());
            let change = if compare_floats(divider, 0.) == Ordering::Equal { 0. } else { (a - b).abs() / divider };

            acc + change * change
        })
        .sqrt()
}

fn assert_dimensions(dimension: usize, input: &[Float], prototype: &[Float]) {
    assert!(
        input.len() == dimension && prototype.len() == dimension,
        "dimension mismatch: metric expects {dimension}, got input {} and prototype {}",
        input.len(),
        prototype.len()
    );
}
