use super::*;
use crate::algorithms::som::LatticeType;
use crate::dataset::VectorDataset;
use crate::helpers::som::create_test_model;

fn create_dataset(items: Vec<Vec<Float>>) -> VectorDataset {
    VectorDataset::new(vec![], items).unwrap()
}

#[test]
fn can_compute_quantization_error_and_hits() {
    let model = create_test_model(3, 1, LatticeType::Rectangular, vec![vec![0.], vec![1.], vec![2.]]);
    let dataset = create_dataset(vec![vec![0.], vec![0.5], vec![2.], vec![2.25]]);

    let statistics = ModelStatistics::compute(&model, &dataset).unwrap();

    assert_eq!(statistics.samples, 4);
    assert!((statistics.quantization_error - 0.1875).abs() < 1E-12);
    assert_eq!(statistics.hits_at(&Coordinate(0, 0)), 2);
    assert_eq!(statistics.hits_at(&Coordinate(1, 0)), 0);
    assert_eq!(statistics.hits_at(&Coordinate(2, 0)), 2);
    assert_eq!(statistics.hits.len(), 2);
}

#[test]
fn can_compute_topographic_error() {
    // NOTE 1.4 and 1.9 have best and second best units at both ends of the row
    let model = create_test_model(3, 1, LatticeType::Rectangular, vec![vec![1.], vec![5.], vec![2.]]);
    let dataset = create_dataset(vec![vec![1.4], vec![4.9], vec![1.9], vec![6.]]);

    let statistics = ModelStatistics::compute(&model, &dataset).unwrap();

    assert!((statistics.topographic_error - 0.5).abs() < 1E-12);
}

#[test]
fn can_handle_empty_dataset_and_mismatch() {
    let model = create_test_model(2, 1, LatticeType::Hexagonal, vec![vec![0., 0.], vec![1., 1.]]);

    let empty = VectorDataset::new(vec!["a".to_string(), "b".to_string()], vec![]).unwrap();
    let statistics = ModelStatistics::compute(&model, &empty).unwrap();
    assert_eq!((statistics.samples, statistics.quantization_error, statistics.hits.len()), (0, 0., 0));

    assert!(ModelStatistics::compute(&model, &create_dataset(vec![vec![1.]])).is_err());
}

#[test]
fn can_format_statistics() {
    let model = create_test_model(1, 1, LatticeType::Rectangular, vec![vec![0.]]);
    let statistics = ModelStatistics::compute(&model, &create_dataset(vec![vec![1.]])).unwrap();

    assert_eq!(
        statistics.to_string(),
        "samples: 1, quantization error: 1.00000, topographic error: 0.00000, used cells: 1"
    );
}
