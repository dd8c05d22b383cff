use super::*;
use crate::algorithms::som::LatticeType;
use crate::helpers::som::create_test_model;

fn create_grid() -> PrototypeGrid {
    let model = create_test_model(
        3,
        2,
        LatticeType::Rectangular,
        (0..6).map(|idx| vec![idx as Float, 10. * idx as Float, 7.]).collect(),
    );

    model.grid().clone()
}

#[test]
fn can_extract_component_plane() {
    let grid = create_grid();

    let plane = ComponentPlane::extract(&grid, 1, "b").unwrap();

    assert_eq!(plane.name(), "b");
    assert_eq!((plane.width(), plane.height()), (3, 2));
    assert_eq!(plane.flatten(), &[0., 10., 20., 30., 40., 50.]);
    assert_eq!(plane.get(&Coordinate(2, 1)), Some(50.));
    assert_eq!(plane.get(&Coordinate(3, 0)), None);
}

#[test]
fn can_reject_out_of_range_dimension() {
    let grid = create_grid();

    assert!(ComponentPlane::extract(&grid, 3, "d").is_err());
}

#[test]
fn can_extract_all_planes() {
    let grid = create_grid();
    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let planes = get_component_planes(&grid, names.as_slice()).unwrap();

    assert_eq!(planes.iter().map(|plane| plane.name()).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(planes[2].flatten(), &[7.; 6]);
    assert!(get_component_planes(&grid, &names[..2]).is_err());
}
