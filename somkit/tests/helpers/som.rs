use crate::algorithms::som::*;
use crate::dataset::VectorDataset;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Creates a model with prototypes given in row-major order.
pub fn create_test_model(width: usize, height: usize, lattice: LatticeType, prototypes: Vec<Vec<Float>>) -> SomModel {
    let dimension = prototypes.first().map_or(1, |prototype| prototype.len());
    let config = SomConfig::new(width, height, dimension, lattice);

    SomModel::from_prototypes(config, prototypes).expect("cannot create test model")
}

/// Creates a model where every prototype encodes its own coordinate as `[x, y]`.
pub fn create_coordinate_model(width: usize, height: usize, lattice: LatticeType) -> SomModel {
    let prototypes = (0..width * height).map(|idx| vec![(idx % width) as Float, (idx / width) as Float]).collect();

    create_test_model(width, height, lattice, prototypes)
}

/// Creates a 2D dataset with three well separated clusters around unit corners.
pub fn create_clustered_dataset() -> VectorDataset {
    let centers = [(0.1, 0.1), (0.9, 0.1), (0.5, 0.9)];
    let items = (0..60)
        .map(|idx| {
            let (x, y) = centers[idx % centers.len()];
            let shift = (idx / centers.len()) as Float * 0.002;
            vec![x + shift, y - shift]
        })
        .collect();

    VectorDataset::new(vec!["x".to_string(), "y".to_string()], items).expect("cannot create test dataset")
}

pub fn assert_vectors_eq(actual: &[Float], expected: &[Float]) {
    assert_eq!(actual.len(), expected.len());
    actual.iter().zip(expected.iter()).for_each(|(&actual, &expected)| {
        assert_eq!(compare_floats((actual - expected).abs(), 1E-9), Ordering::Less, "{actual} != {expected}");
    });
}
