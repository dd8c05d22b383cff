use super::*;
use crate::helpers::utils::create_test_random;

fn create_dataset() -> VectorDataset {
    VectorDataset::new(
        vec!["a".to_string(), "b".to_string()],
        vec![vec![0., 10.], vec![5., 10.], vec![10., 10.], vec![2.5, 10.]],
    )
    .unwrap()
}

#[test]
fn can_create_dataset_with_default_names() {
    let dataset = VectorDataset::new(vec![], vec![vec![1., 2., 3.]]).unwrap();

    assert_eq!(dataset.dimension(), 3);
    assert_eq!(dataset.size(), 1);
    assert_eq!(dataset.names(), &["x0".to_string(), "x1".to_string(), "x2".to_string()]);
}

parameterized_test! {can_reject_invalid_dataset, (names, items), {
    assert!(VectorDataset::new(names, items).is_err());
}}

can_reject_invalid_dataset! {
    case01_no_dimension: (vec![], vec![]),
    case02_inconsistent_items: (vec![], vec![vec![1., 2.], vec![1.]]),
    case03_names_mismatch: (vec!["a".to_string()], vec![vec![1., 2.]]),
    case04_infinite_value: (vec![], vec![vec![0.1, 0.2], vec![0.1, Float::INFINITY]]),
    case05_nan_value: (vec![], vec![vec![Float::NAN, 0.2]]),
    case06_negative_infinite_value: (vec![], vec![vec![Float::NEG_INFINITY]]),
}

#[test]
fn can_iterate_dataset_many_times() {
    let dataset = create_dataset();

    let first = dataset.iter().map(|item| item.to_vec()).collect::<Vec<_>>();
    let second = dataset.iter().map(|item| item.to_vec()).collect::<Vec<_>>();

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_eq!(dataset.get(1), Some([5., 10.].as_slice()));
    assert_eq!(dataset.get(4), None);
}

#[test]
fn can_shuffle_without_changing_values() {
    let mut dataset = VectorDataset::new(vec![], (0..50).map(|idx| vec![idx as Float]).collect()).unwrap();

    dataset.shuffle(create_test_random().as_ref());

    let mut values = dataset.iter().map(|item| item[0]).collect::<Vec<_>>();
    assert_ne!(values, (0..50).map(|idx| idx as Float).collect::<Vec<_>>());

    values.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(values, (0..50).map(|idx| idx as Float).collect::<Vec<_>>());
}

#[test]
fn can_get_bounds() {
    assert_eq!(create_dataset().bounds(), vec![(0., 10.), (10., 10.)]);
    assert_eq!(VectorDataset::new(vec!["a".to_string()], vec![]).unwrap().bounds(), vec![(0., 0.)]);
}

#[test]
fn can_normalize_and_denormalize() {
    let mut dataset = create_dataset();
    let normalization = MinMaxNormalization::new(&dataset);

    dataset.normalize(&normalization);

    assert_eq!(
        dataset.iter().map(|item| item.to_vec()).collect::<Vec<_>>(),
        vec![vec![0., 0.], vec![0.5, 0.], vec![1., 0.], vec![0.25, 0.]]
    );

    let mut values = vec![0.5, 0.];
    normalization.denormalize(values.as_mut_slice());
    assert_eq!(values, vec![5., 10.]);
    assert_eq!(normalization.bounds(), &[(0., 10.), (10., 10.)]);
}

#[test]
fn can_report_item_with_non_finite_value() {
    let err = VectorDataset::new(vec![], vec![vec![0.1, 0.2], vec![0.5, Float::NAN]]).unwrap_err();

    assert_eq!(err.to_string(), "item 1: values must be finite, got NaN");
}
