use super::*;
use rand::Rng;

#[test]
fn can_produce_same_sequence_with_same_seed() {
    let random = DefaultRandom::new_with_seed(7);

    let first = (0..10).map(|_| random.get_rng().gen_range(0.0..1.0)).collect::<Vec<Float>>();
    let second = (0..10).map(|_| random.get_rng().gen_range(0.0..1.0)).collect::<Vec<Float>>();
    let mut rng = random.get_rng();
    let sequence = (0..10).map(|_| rng.gen_range(0.0..1.0)).collect::<Vec<Float>>();
    let mut rng = DefaultRandom::new_with_seed(7).get_rng();
    let same_sequence = (0..10).map(|_| rng.gen_range(0.0..1.0)).collect::<Vec<Float>>();

    assert_eq!(first, second);
    assert_eq!(sequence, same_sequence);
    assert_eq!(random.seed(), Some(7));
}

#[test]
fn can_produce_different_sequences_with_different_seeds() {
    let mut first = DefaultRandom::new_with_seed(1).get_rng();
    let mut second = DefaultRandom::new_with_seed(2).get_rng();

    let first = (0..10).map(|_| first.gen_range(0.0..1.0)).collect::<Vec<Float>>();
    let second = (0..10).map(|_| second.gen_range(0.0..1.0)).collect::<Vec<Float>>();

    assert_ne!(first, second);
}

parameterized_test! {can_produce_uniform_real_within_range, (min, max), {
    let random = DefaultRandom::default();

    (0..100).for_each(|_| {
        let value = random.uniform_real(min, max);
        assert!(value >= min && (value < max || min == max), "{value} is not in [{min}, {max})");
    });
}}

can_produce_uniform_real_within_range! {
    case01_unit: (0., 1.),
    case02_negative: (-5., -1.),
    case03_degenerate: (3., 3.),
}

#[test]
fn can_create_default_random_without_seed() {
    assert_eq!(DefaultRandom::default().seed(), None);
}
