#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN values are considered greater than any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares two `(distance, index)` pairs: smaller distance wins, ties go to the lower index.
/// This gives a total order which does not depend on the scan order.
#[inline]
pub fn compare_ranked(a: &(Float, usize), b: &(Float, usize)) -> Ordering {
    compare_floats(a.0, b.0).then_with(|| a.1.cmp(&b.1))
}
