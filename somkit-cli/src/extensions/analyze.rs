//! Formats analysis results of a trained map.

#[cfg(test)]
#[path = "../../tests/unit/extensions/analyze_test.rs"]
mod analyze_test;

use somkit::algorithms::som::GridState;
use somkit::analysis::{Clusterable, feature_distance_matrix};
use std::fmt::Write;

/// Formats a pairwise distance matrix of features as a table with labeled rows and columns.
pub fn format_distance_matrix<C: Clusterable>(features: &[C]) -> String {
    let matrix = feature_distance_matrix(features);
    let width = features.iter().map(|feature| feature.label().len()).max().unwrap_or(0).max(8);

    let mut out = format!("{:width$}", "");
    features.iter().for_each(|feature| {
        let _ = write!(out, " {:>width$}", feature.label());
    });
    out.push('\n');

    features.iter().zip(matrix.iter()).for_each(|(feature, row)| {
        let _ = write!(out, "{:width$}", feature.label());
        row.iter().for_each(|distance| {
            let _ = write!(out, " {distance:>width$.4}");
        });
        out.push('\n');
    });

    out
}

/// Formats unified distances of the grid as rows of the map (U-matrix).
pub fn format_unified_distances(state: &GridState) -> String {
    let (width, _, _) = state.shape;

    state
        .cells
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| format!("{:.4}", cell.unified_distance)).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
