use salvo::{Board, BoardError, Orientation, FLEET, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const PATROL: usize = 5;

#[test]
fn test_place_rejections() {
    let mut board = Board::new();
    board.place(1, 2, 2, Orientation::Vertical).unwrap();
    assert_eq!(
        board.place(1, 8, 8, Orientation::Vertical).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
    assert_eq!(
        board.place(2, 3, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board.place(0, 0, 14, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.place(NUM_SHIPS, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidIndex
    );
    // failed attempts leave only the first ship on the board
    assert_eq!(board.ship_map().count_ones(), 4);
}

#[test]
fn test_cell_view() {
    let mut board = Board::new();
    board.place(PATROL, 7, 3, Orientation::Horizontal).unwrap();
    let cell = board.cell(7, 4).unwrap();
    assert_eq!(cell.occupied_by, Some(FLEET[PATROL]));
    assert!(!cell.hit);
    assert_eq!(board.occupant(7, 3), Some(PATROL));
    assert_eq!(board.cell(0, 0).unwrap().occupied_by, None);
    assert!(board.cell(16, 0).is_none());
    assert!(board.occupant(0, 16).is_none());
}

#[test]
fn test_random_placement_fits() {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for i in 0..NUM_SHIPS {
        let p = board.random_placement(&mut rng, i).unwrap();
        assert_eq!(p.length, FLEET[i].length());
        assert_eq!(p.cells().count(), FLEET[i].length());
        assert!(p.cells().all(|(r, c)| r < 16 && c < 16));
    }
    assert_eq!(
        board.random_placement(&mut rng, NUM_SHIPS).unwrap_err(),
        BoardError::InvalidIndex
    );
}

#[test]
fn test_place_remaining_keeps_manual_ships() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.place(PATROL, 0, 0, Orientation::Horizontal).unwrap();
    board.place_remaining(&mut rng).unwrap();

    assert!(board.all_placed());
    assert_eq!(board.occupant(0, 0), Some(PATROL));
    assert_eq!(board.occupant(0, 1), Some(PATROL));
    assert_eq!(board.ship_map().count_ones(), 20);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(3);
    board.place_remaining(&mut rng).unwrap();
    assert!(board.all_placed());
    board.clear();
    assert_eq!(board, Board::new());
    assert!(!board.all_placed());
}
