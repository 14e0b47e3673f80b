use sea_battle::{
    Board, BoardError, BoardPhase, CellState, Coordinate, Orientation, PlacementError,
    ShotOutcome, Vessel, Visibility, BOARD_SIZE,
};

fn vessel(length: usize, x: i32, y: i32, orientation: Orientation) -> Vessel {
    Vessel::new(length, Coordinate::new(x, y), orientation).unwrap()
}

fn board_with_cruiser() -> Board {
    let mut board = Board::new();
    board
        .place_vessel(vessel(3, 0, 0, Orientation::Horizontal))
        .unwrap();
    board
}

#[test]
fn test_place_horizontal_occupies_cells() {
    let board = board_with_cruiser();
    for x in 0..3 {
        assert_eq!(
            board.cell_state(Coordinate::new(x, 0)),
            Some(CellState::Occupied)
        );
    }
    assert_eq!(board.cell_state(Coordinate::new(3, 0)), Some(CellState::Empty));
    assert_eq!(board.vessels_alive(), 1);
    assert_eq!(board.occupied_cell_count(), 3);
}

#[test]
fn test_diagonal_neighbour_rejected() {
    let mut board = board_with_cruiser();
    let before = board.cell_states();
    let err = board
        .place_vessel(vessel(1, 1, 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, PlacementError::Adjacent(Coordinate::new(1, 1)));
    assert_eq!(board.cell_states(), before);
    assert_eq!(board.vessel_count(), 1);
}

#[test]
fn test_overlap_and_bounds_rejected() {
    let mut board = board_with_cruiser();
    assert_eq!(
        board.place_vessel(vessel(2, 2, 0, Orientation::Vertical)),
        Err(PlacementError::Overlap(Coordinate::new(2, 0)))
    );
    let edge = BOARD_SIZE as i32 - 1;
    assert_eq!(
        board.place_vessel(vessel(3, edge - 1, 5, Orientation::Horizontal)),
        Err(PlacementError::OutOfBounds(Coordinate::new(edge + 1, 5)))
    );
    assert_eq!(
        board.place_vessel(vessel(1, -1, 5, Orientation::Horizontal)),
        Err(PlacementError::OutOfBounds(Coordinate::new(-1, 5)))
    );
    // one free cell between vessels is enough
    board
        .place_vessel(vessel(1, 4, 0, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.vessels_alive(), 2);
}

#[test]
fn test_invalid_length_rejected() {
    assert_eq!(
        Vessel::new(4, Coordinate::new(0, 0), Orientation::Vertical),
        Err(PlacementError::InvalidLength(4))
    );
    assert_eq!(
        Vessel::new(0, Coordinate::new(0, 0), Orientation::Vertical),
        Err(PlacementError::InvalidLength(0))
    );
}

#[test]
fn test_first_hit_not_sunk() {
    let mut board = board_with_cruiser();
    let report = board.fire_at(Coordinate::new(0, 0)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(report.vessels_alive, 1);
    assert_eq!(board.vessels().next().unwrap().remaining(), 2);
    assert_eq!(board.cell_state(Coordinate::new(0, 0)), Some(CellState::Hit));
}

#[test]
fn test_sink_marks_contour() {
    let mut board = board_with_cruiser();
    assert_eq!(board.fire_at(Coordinate::new(0, 0)).unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(board.fire_at(Coordinate::new(1, 0)).unwrap().outcome, ShotOutcome::Hit);
    let report = board.fire_at(Coordinate::new(2, 0)).unwrap();
    match report.outcome {
        ShotOutcome::Sunk(v) => {
            assert_eq!(v.length(), 3);
            assert!(v.is_destroyed());
        }
        other => panic!("expected a sink, got {:?}", other),
    }
    assert_eq!(report.vessels_alive, 0);
    assert!(board.all_sunk());

    // ring around (0,0)-(2,0), clipped by the top and left edges
    for x in 0..=3 {
        assert_eq!(
            board.cell_state(Coordinate::new(x, 1)),
            Some(CellState::Blocked)
        );
    }
    assert_eq!(board.cell_state(Coordinate::new(3, 0)), Some(CellState::Blocked));
    assert_eq!(board.cell_state(Coordinate::new(4, 0)), Some(CellState::Empty));
    assert_eq!(board.cell_state(Coordinate::new(0, 2)), Some(CellState::Empty));
    for x in 0..3 {
        assert_eq!(board.cell_state(Coordinate::new(x, 0)), Some(CellState::Hit));
    }
}

#[test]
fn test_contour_keeps_misses() {
    let mut board = Board::new();
    board
        .place_vessel(vessel(1, 5, 5, Orientation::Horizontal))
        .unwrap();
    board.fire_at(Coordinate::new(4, 4)).unwrap();
    board.fire_at(Coordinate::new(5, 5)).unwrap();
    assert_eq!(board.cell_state(Coordinate::new(4, 4)), Some(CellState::Miss));
    assert_eq!(board.cell_state(Coordinate::new(6, 6)), Some(CellState::Blocked));

    let blocked_before = board.cell_states();
    let sunk = *board.vessels().next().unwrap();
    board.mark_contour(&sunk);
    assert_eq!(board.cell_states(), blocked_before);
}

#[test]
fn test_contour_ignores_vessel_afloat() {
    let mut board = Board::new();
    board
        .place_vessel(vessel(1, 5, 5, Orientation::Horizontal))
        .unwrap();
    let afloat = *board.vessels().next().unwrap();
    let before = board.cell_states();
    board.mark_contour(&afloat);
    assert_eq!(board.cell_states(), before);

    let hidden = board.snapshot(Visibility::Concealed);
    for cell in Coordinate::new(5, 5).neighbours() {
        assert_eq!(hidden.cell(cell), Some(CellState::Empty));
    }
}

#[test]
fn test_repeat_shot_rejected() {
    let mut board = board_with_cruiser();
    board.fire_at(Coordinate::new(0, 0)).unwrap();
    board.fire_at(Coordinate::new(9, 9)).unwrap();
    let before = board.cell_states();
    assert_eq!(
        board.fire_at(Coordinate::new(0, 0)),
        Err(BoardError::AlreadyTargeted(Coordinate::new(0, 0)))
    );
    assert_eq!(
        board.fire_at(Coordinate::new(9, 9)),
        Err(BoardError::AlreadyTargeted(Coordinate::new(9, 9)))
    );
    assert_eq!(board.cell_states(), before);
    assert_eq!(board.vessels().next().unwrap().remaining(), 2);
}

#[test]
fn test_out_of_bounds_shot() {
    let mut board = board_with_cruiser();
    for target in [
        Coordinate::new(-1, 0),
        Coordinate::new(0, 10),
        Coordinate::new(10, 10),
    ] {
        assert!(board.is_out_of_bounds(target));
        assert_eq!(board.fire_at(target), Err(BoardError::OutOfBounds(target)));
    }
    assert_eq!(board.phase(), BoardPhase::Setup);
}

#[test]
fn test_blocked_cell_shootable_as_miss() {
    let mut board = Board::new();
    board
        .place_vessel(vessel(1, 0, 0, Orientation::Horizontal))
        .unwrap();
    board
        .place_vessel(vessel(1, 5, 5, Orientation::Horizontal))
        .unwrap();
    board.fire_at(Coordinate::new(0, 0)).unwrap();
    let blocked = Coordinate::new(1, 1);
    assert_eq!(board.cell_state(blocked), Some(CellState::Blocked));
    let report = board.fire_at(blocked).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(board.cell_state(blocked), Some(CellState::Miss));
}

#[test]
fn test_placement_closed_after_first_shot() {
    let mut board = board_with_cruiser();
    board.fire_at(Coordinate::new(9, 9)).unwrap();
    assert_eq!(board.phase(), BoardPhase::Battle);
    assert_eq!(
        board.place_vessel(vessel(1, 6, 6, Orientation::Horizontal)),
        Err(PlacementError::SetupClosed)
    );
}

#[test]
fn test_fleet_capacity() {
    let mut board = Board::new();
    // seven singles spaced two apart on the top rows
    for i in 0..7 {
        let x = (i % 5) * 2;
        let y = (i / 5) * 2;
        board
            .place_vessel(vessel(1, x, y, Orientation::Horizontal))
            .unwrap();
    }
    assert_eq!(
        board.place_vessel(vessel(1, 9, 9, Orientation::Horizontal)),
        Err(PlacementError::FleetFull)
    );
}

#[test]
fn test_concealed_snapshot_hides_vessels() {
    let mut board = board_with_cruiser();
    board.fire_at(Coordinate::new(1, 0)).unwrap();
    let hidden = board.snapshot(Visibility::Concealed);
    assert_eq!(hidden.cell(Coordinate::new(0, 0)), Some(CellState::Empty));
    assert_eq!(hidden.cell(Coordinate::new(1, 0)), Some(CellState::Hit));
    assert_eq!(hidden.vessels_alive(), 1);
    assert_eq!(hidden.untargeted().count(), 99);

    let shown = board.snapshot(Visibility::Revealed);
    assert_eq!(shown.cell(Coordinate::new(0, 0)), Some(CellState::Occupied));
    assert_eq!(shown.cell(Coordinate::new(10, 0)), None);
}
