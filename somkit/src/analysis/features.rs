#[cfg(test)]
#[path = "../../tests/unit/analysis/features_test.rs"]
mod features_test;

use super::{ComponentPlane, get_component_planes};
use crate::algorithms::math::*;
use crate::algorithms::som::SomModel;
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A distance returned when a plane is constant (zero variance or zero magnitude) and a
/// correlation based similarity is undefined.
pub const DEGENERATE_PLANE_DISTANCE: Float = 1.;

/// An object which can be grouped by an external hierarchical clustering.
pub trait Clusterable {
    /// Returns a label shown in the clustering result.
    fn label(&self) -> &str;

    /// Returns a point in the feature space.
    fn point(&self) -> &[Float];

    /// Returns a distance to another object.
    fn distance(&self, other: &Self) -> Float;
}

/// Specifies a distance between two component planes compared as flattened vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaneDistance {
    /// `1 - pearson correlation`, in `[0, 2]`.
    #[default]
    Pearson,
    /// A plain euclidean distance, not scale-invariant.
    Euclidean,
    /// `1 - cosine similarity`, in `[0, 2]`.
    Cosine,
}

impl PlaneDistance {
    /// Returns distance between two planes of the same size.
    ///
    /// Pearson and cosine distances return [`DEGENERATE_PLANE_DISTANCE`] when either plane is
    /// constant or has zero magnitude, so the result is never NaN.
    ///
    /// # Panics
    ///
    /// Panics if planes have different sizes. Planes extracted from the same grid, e.g. by
    /// [`get_component_features`], always have the same size.
    pub fn distance(&self, a: &ComponentPlane, b: &ComponentPlane) -> Float {
        let (a, b) = (a.flatten(), b.flatten());
        assert_eq!(a.len(), b.len(), "component planes must have the same size");

        match self {
            PlaneDistance::Pearson => pearson_distance(a, b),
            PlaneDistance::Euclidean => euclidean_distance(a, b),
            PlaneDistance::Cosine => cosine_distance(a, b),
        }
    }
}

impl Display for PlaneDistance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaneDistance::Pearson => write!(f, "pearson"),
            PlaneDistance::Euclidean => write!(f, "euclidean"),
            PlaneDistance::Cosine => write!(f, "cosine"),
        }
    }
}

impl TryFrom<&str> for PlaneDistance {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pearson" => Ok(PlaneDistance::Pearson),
            "euclidean" => Ok(PlaneDistance::Euclidean),
            "cosine" => Ok(PlaneDistance::Cosine),
            _ => Err(format!("unknown plane distance: '{value}'")),
        }
    }
}

/// Wraps a component plane to be used with an external hierarchical clustering.
#[derive(Clone, Debug)]
pub struct ComponentPlaneFeature {
    plane: ComponentPlane,
    metric: PlaneDistance,
}

impl ComponentPlaneFeature {
    /// Creates a new instance of `ComponentPlaneFeature`.
    pub fn new(plane: ComponentPlane, metric: PlaneDistance) -> Self {
        Self { plane, metric }
    }

    /// Returns the underlying plane.
    pub fn plane(&self) -> &ComponentPlane {
        &self.plane
    }
}

impl Clusterable for ComponentPlaneFeature {
    fn label(&self) -> &str {
        self.plane.name()
    }

    fn point(&self) -> &[Float] {
        self.plane.flatten()
    }

    fn distance(&self, other: &Self) -> Float {
        self.metric.distance(&self.plane, &other.plane)
    }
}

/// Wraps every component plane of the model into a clusterable feature.
pub fn get_component_features(
    model: &SomModel,
    names: &[String],
    metric: PlaneDistance,
) -> GenericResult<Vec<ComponentPlaneFeature>> {
    let planes = get_component_planes(model.grid(), names)?;

    Ok(planes.into_iter().map(|plane| ComponentPlaneFeature::new(plane, metric)).collect())
}

/// Calculates a symmetric matrix of pairwise distances between clusterable items.
pub fn feature_distance_matrix<C: Clusterable>(items: &[C]) -> Vec<Vec<Float>> {
    let mut matrix = vec![vec![0.; items.len()]; items.len()];

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let distance = items[i].distance(&items[j]);
            matrix[i][j] = distance;
            matrix[j][i] = distance;
        }
    }

    matrix
}

fn pearson_distance(a: &[Float], b: &[Float]) -> Float {
    let standardize = |values: &[Float]| {
        let (variance, mean) = get_variance_mean(values);
        let stdev = variance.sqrt();

        if is_degenerate_stdev(stdev) {
            return None;
        }

        let mut values = values.to_vec();
        subtract_scalar(values.as_mut_slice(), mean);
        divide_scalar(values.as_mut_slice(), stdev);

        Some(values)
    };

    match (standardize(a), standardize(b)) {
        (Some(a), Some(b)) => {
            let similarity = (dot(a.as_slice(), b.as_slice()) / a.len() as Float).clamp(-1., 1.);
            1. - similarity
        }
        _ => DEGENERATE_PLANE_DISTANCE,
    }
}

fn cosine_distance(a: &[Float], b: &[Float]) -> Float {
    let (magnitude_a, magnitude_b) = (magnitude(a), magnitude(b));

    if magnitude_a <= Float::EPSILON || magnitude_b <= Float::EPSILON || is_constant(a) || is_constant(b) {
        return DEGENERATE_PLANE_DISTANCE;
    }

    let similarity = (dot(a, b) / (magnitude_a * magnitude_b)).clamp(-1., 1.);

    1. - similarity
}

fn is_constant(values: &[Float]) -> bool {
    is_degenerate_stdev(get_stdev(values))
}

fn is_degenerate_stdev(stdev: Float) -> bool {
    stdev <= Float::EPSILON || !stdev.is_finite()
}
