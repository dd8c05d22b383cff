#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/neighborhood_test.rs"]
mod neighborhood_test;

use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Specifies how strongly a cell is pulled towards the input depending on its topological
/// distance to the best matching unit. Influence is monotonically decreasing and zero beyond
/// the radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NeighborhoodFunction {
    /// A gaussian kernel `exp(-d^2 / (2 r^2))` truncated at the radius.
    #[default]
    Gaussian,
    /// A step kernel: full influence within the radius.
    Bubble,
}

impl NeighborhoodFunction {
    /// Returns influence in `[0, 1]` for the given topological distance and radius.
    pub fn influence(&self, distance: Float, radius: Float) -> Float {
        if distance <= 0. {
            return 1.;
        }

        if radius <= 0. || distance > radius {
            return 0.;
        }

        match self {
            NeighborhoodFunction::Gaussian => (-(distance * distance) / (2. * radius * radius)).exp(),
            NeighborhoodFunction::Bubble => 1.,
        }
    }
}
