use sea_battle::{Coordinate, Orientation, Vessel};

#[test]
fn test_occupied_cells_follow_orientation() {
    let across = Vessel::new(3, Coordinate::new(2, 1), Orientation::Horizontal).unwrap();
    let cells: Vec<_> = across.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(3, 1), Coordinate::new(4, 1)]
    );

    let down = Vessel::new(2, Coordinate::new(0, 0), Orientation::Vertical).unwrap();
    let cells: Vec<_> = down.occupied_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
    assert!(down.contains(Coordinate::new(0, 1)));
    assert!(!down.contains(Coordinate::new(1, 0)));
}

#[test]
fn test_register_hit_until_destroyed() {
    let mut v = Vessel::new(2, Coordinate::new(4, 4), Orientation::Horizontal).unwrap();
    assert_eq!(v.remaining(), 2);
    assert!(!v.is_destroyed());
    assert!(v.register_hit());
    assert!(!v.is_destroyed());
    assert!(v.register_hit());
    assert!(v.is_destroyed());
    // no-op once destroyed
    assert!(!v.register_hit());
    assert_eq!(v.remaining(), 0);
}

#[test]
fn test_occupied_cells_is_pure() {
    let v = Vessel::new(3, Coordinate::new(7, 7), Orientation::Vertical).unwrap();
    let first: Vec<_> = v.occupied_cells().collect();
    let second: Vec<_> = v.occupied_cells().collect();
    assert_eq!(first, second);
    assert_eq!(v.remaining(), 3);
}
