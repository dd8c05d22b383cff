use super::*;
use std::cmp::Ordering;

parameterized_test! {can_compare_floats, (left, right, expected), {
    assert_eq!(compare_floats(left, right), expected);
}}

can_compare_floats! {
    case01: (0., 1., Ordering::Less),
    case02: (1., 0., Ordering::Greater),
    case03: (1., 1., Ordering::Equal),
    case04: (-0., 0., Ordering::Equal),
    case05: (Float::NAN, 1., Ordering::Greater),
    case06: (1., Float::NAN, Ordering::Less),
    case07: (Float::NAN, Float::NAN, Ordering::Equal),
    case08: (Float::INFINITY, Float::MAX, Ordering::Greater),
}

parameterized_test! {can_compare_ranked, (left, right, expected), {
    assert_eq!(compare_ranked(&left, &right), expected);
}}

can_compare_ranked! {
    case01: ((1., 5), (2., 0), Ordering::Less),
    case02: ((2., 0), (1., 5), Ordering::Greater),
    case03_tie_lower_index_wins: ((1., 3), (1., 7), Ordering::Less),
    case04_tie_higher_index_loses: ((1., 7), (1., 3), Ordering::Greater),
    case05_same: ((1., 3), (1., 3), Ordering::Equal),
    case06_nan_loses: ((Float::NAN, 0), (100., 1), Ordering::Greater),
}

#[test]
fn can_sort_ranked_pairs_independently_of_input_order() {
    let mut pairs = vec![(2., 4), (1., 9), (1., 2), (3., 0), (1., 5)];

    pairs.sort_by(compare_ranked);

    assert_eq!(pairs.iter().map(|(_, idx)| *idx).collect::<Vec<_>>(), vec![2, 5, 9, 4, 0]);
}
