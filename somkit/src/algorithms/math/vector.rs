#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/vector_test.rs"]
mod vector_test;

use crate::utils::Float;

/// Calculates dot product of two vectors of equal size.
pub fn dot(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).map(|(a, b)| a * b).sum()
}

/// Calculates magnitude (euclidean norm) of the vector.
pub fn magnitude(a: &[Float]) -> Float {
    dot(a, a).sqrt()
}

/// Calculates squared euclidean distance between two vectors of equal size.
pub fn squared_euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum()
}

/// Calculates euclidean distance between two vectors of equal size.
pub fn euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    squared_euclidean_distance(a, b).sqrt()
}

/// Subtracts scalar from every element of the vector.
pub fn subtract_scalar(target: &mut [Float], value: Float) {
    target.iter_mut().for_each(|item| *item -= value);
}

/// Divides every element of the vector by scalar.
pub fn divide_scalar(target: &mut [Float], value: Float) {
    target.iter_mut().for_each(|item| *item /= value);
}

/// Moves target vector towards source: `target += factor * (source - target)`.
pub fn move_towards(target: &mut [Float], source: &[Float], factor: Float) {
    debug_assert_eq!(target.len(), source.len());

    target.iter_mut().zip(source.iter()).for_each(|(target, source)| *target += factor * (source - *target));
}
