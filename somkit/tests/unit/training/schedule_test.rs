use super::*;

parameterized_test! {can_get_decayed_value, (kind, progress, expected), {
    let decay = Decay::new(1., 0.25, kind).unwrap();

    let value = decay.value(progress);

    assert!((value - expected).abs() < 1E-12, "{value} != {expected}");
}}

can_get_decayed_value! {
    case01_linear_start: (DecayKind::Linear, 0., 1.),
    case02_linear_middle: (DecayKind::Linear, 0.5, 0.625),
    case03_linear_end: (DecayKind::Linear, 1., 0.25),
    case04_exponential_start: (DecayKind::Exponential, 0., 1.),
    case05_exponential_middle: (DecayKind::Exponential, 0.5, 0.5),
    case06_exponential_end: (DecayKind::Exponential, 1., 0.25),
    case07_clamped_above: (DecayKind::Exponential, 2., 0.25),
    case08_clamped_below: (DecayKind::Linear, -1., 1.),
}

parameterized_test! {can_validate_bounds, (initial, last, kind, is_ok), {
    assert_eq!(Decay::new(initial, last, kind).is_ok(), is_ok);
}}

can_validate_bounds! {
    case01_linear_to_zero: (0.5, 0., DecayKind::Linear, true),
    case02_exponential_to_zero: (0.5, 0., DecayKind::Exponential, false),
    case03_negative: (-0.5, 0.1, DecayKind::Linear, false),
    case04_nan: (Float::NAN, 0.1, DecayKind::Linear, false),
    case05_growing: (0.1, 0.5, DecayKind::Exponential, true),
}

#[test]
fn can_keep_bounds() {
    let decay = Decay::new(0.6, 0.2, DecayKind::Exponential).unwrap();

    assert_eq!((decay.initial(), decay.last()), (0.6, 0.2));
}
