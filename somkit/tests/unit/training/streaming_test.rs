use super::*;
use crate::algorithms::som::{LatticeType, SomConfig};
use crate::dataset::VectorDataset;
use crate::helpers::som::*;
use crate::helpers::utils::*;

fn create_trainer(config: StreamingConfig) -> StreamingTrainer {
    StreamingTrainer::new(config, create_test_environment()).unwrap()
}

fn create_random_model(width: usize, height: usize) -> SomModel {
    SomModel::new_random(SomConfig::new(width, height, 2, LatticeType::Hexagonal), create_test_random().as_ref())
        .unwrap()
}

#[test]
fn can_decay_exponentially_and_stay_at_final_values() {
    let config =
        StreamingConfig { learning_rate: (0.1, 0.025), radius: (0.6, 0.15), horizon: 100, ..Default::default() };
    let mut model = create_random_model(4, 4);
    let mut trainer = create_trainer(config);

    assert_eq!(trainer.learning_rate(), 0.1);
    assert_eq!(trainer.radius_fraction(), 0.6);

    (0..50).for_each(|_| {
        trainer.learn(&mut model, &[0.5, 0.5]).unwrap();
    });
    assert!((trainer.learning_rate() - 0.05).abs() < 1E-12);
    assert!((trainer.radius_fraction() - 0.3).abs() < 1E-12);

    (0..200).for_each(|_| {
        trainer.learn(&mut model, &[0.5, 0.5]).unwrap();
    });
    assert_eq!(trainer.iteration(), 250);
    assert!((trainer.learning_rate() - 0.025).abs() < 1E-12);
    assert!((trainer.radius_fraction() - 0.15).abs() < 1E-12);
}

#[test]
fn can_keep_adapting_to_drift_after_horizon() {
    let config = StreamingConfig { horizon: 10, ..Default::default() };
    let mut model = create_random_model(3, 3);
    let mut trainer = create_trainer(config);

    (0..500).for_each(|_| {
        trainer.learn(&mut model, &[0.1, 0.1]).unwrap();
    });
    let bmu = model.find_bmu(&[5., 5.]).unwrap();
    let before = model.metric().distance(&[5., 5.], model.grid().get(&bmu).unwrap());

    (0..50).for_each(|_| {
        trainer.learn(&mut model, &[5., 5.]).unwrap();
    });
    let (_, after) = model.find_bmu_with_distance(&[5., 5.]).unwrap();

    assert!(after < before * 0.1, "after: {after}, before: {before}");
}

#[test]
fn can_resume_schedule() {
    let config = StreamingConfig { horizon: 100, ..Default::default() };

    let fresh = create_trainer(config.clone());
    let resumed = create_trainer(config).resume_at(100);

    assert_eq!(fresh.iteration(), 0);
    assert_eq!(fresh.learning_rate(), 0.1);
    assert_eq!(resumed.iteration(), 100);
    assert!((resumed.learning_rate() - 0.08).abs() < 1E-12);
    assert!((resumed.radius_fraction() - 0.2).abs() < 1E-12);
}

#[test]
fn can_track_moving_average_of_error() {
    let config = StreamingConfig { error_smoothing: 0.5, ..Default::default() };
    let mut model = create_test_model(1, 1, LatticeType::Rectangular, vec![vec![0., 0.]]);
    let mut trainer = create_trainer(config);

    assert_eq!(trainer.mean_error(), None);

    trainer.learn(&mut model, &[0., 0.]).unwrap();
    assert_eq!(trainer.mean_error(), Some(0.));

    // NOTE error is measured before adaptation and normalized by sqrt(dimension)
    trainer.learn(&mut model, &[1., 1.]).unwrap();
    assert!((trainer.mean_error().unwrap() - 0.5).abs() < 1E-12);
}

#[test]
fn can_train_on_dataset_in_single_pass() {
    let dataset = create_clustered_dataset();
    let mut model = create_random_model(5, 5);
    let mut trainer = create_trainer(StreamingConfig::default());

    let summary = trainer.train(&mut model, &dataset).unwrap();

    assert_eq!(summary.epochs, 1);
    assert_eq!(summary.iterations, dataset.size());
    assert_eq!(summary.errors.len(), 1);
    assert!(!summary.is_interrupted);
    assert_eq!(trainer.iteration(), dataset.size());
}

#[test]
fn can_log_with_interval() {
    let (environment, messages) = create_test_environment_with_logs();
    let config = StreamingConfig { log_interval: Some(10), ..Default::default() };
    let mut model = create_random_model(3, 3);
    let mut trainer = StreamingTrainer::new(config, environment).unwrap();

    (0..35).for_each(|_| {
        trainer.learn(&mut model, &[0.3, 0.3]).unwrap();
    });

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("[streaming] iteration 10:"));
}

parameterized_test! {can_reject_invalid_config, config, {
    assert!(StreamingTrainer::new(config, create_test_environment()).is_err());
}}

can_reject_invalid_config! {
    case01_zero_horizon: StreamingConfig { horizon: 0, ..Default::default() },
    case02_smoothing_one: StreamingConfig { error_smoothing: 1., ..Default::default() },
    case03_zero_final_rate: StreamingConfig { learning_rate: (0.1, 0.), ..Default::default() },
    case04_negative_radius: StreamingConfig { radius: (-0.6, 0.2), ..Default::default() },
}

#[test]
fn can_reject_dataset_with_wrong_dimension() {
    let dataset = VectorDataset::new(vec![], vec![vec![1., 2., 3.]]).unwrap();
    let mut model = create_random_model(2, 2);

    assert!(create_trainer(StreamingConfig::default()).train(&mut model, &dataset).is_err());
}
