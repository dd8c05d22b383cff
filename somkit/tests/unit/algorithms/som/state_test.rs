use super::*;
use crate::helpers::som::create_test_model;

#[test]
fn can_get_unified_distances() {
    let model = create_test_model(2, 2, LatticeType::Rectangular, vec![vec![0.], vec![2.], vec![4.], vec![4.]]);

    let state = get_grid_state(&model);

    assert_eq!(state.shape, (2, 2, 1));
    assert_eq!(state.lattice, LatticeType::Rectangular);
    assert_eq!(
        state.cells.iter().map(|cell| (cell.coordinate, cell.unified_distance)).collect::<Vec<_>>(),
        vec![(Coordinate(0, 0), 3.), (Coordinate(1, 0), 2.), (Coordinate(0, 1), 2.), (Coordinate(1, 1), 1.)]
    );
}

#[test]
fn can_get_zero_unified_distance_for_single_cell() {
    let model = create_test_model(1, 1, LatticeType::Hexagonal, vec![vec![1., 2.]]);

    let state = get_grid_state(&model);

    assert_eq!(state.cells.len(), 1);
    assert_eq!(state.cells[0].unified_distance, 0.);
    assert_eq!(state.cells[0].weights, vec![1., 2.]);
}

#[test]
fn can_format_state() {
    let model = create_test_model(2, 1, LatticeType::Hexagonal, vec![vec![0.], vec![1.]]);

    let state = get_grid_state(&model).to_string();

    assert_eq!(state, "(hexagonal,2,1,1,[(0,0,1.0000000,[0.0000000]),(1,0,1.0000000,[1.0000000]),])");
}
