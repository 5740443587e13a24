use std::collections::HashSet;

use broadside::{
    Board, CellState, FleetPlacer, GameError, Orientation, Placement, NUM_SHIPS, SHIPS,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn placed_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    FleetPlacer::default().place_fleet(&mut board, &mut rng).unwrap();
    board
}

/// Board where no two empty cells touch, so nothing longer than 1 fits.
fn checkerboard() -> Board {
    let mut board = Board::new();
    for r in 0..10 {
        for c in 0..10 {
            if (r + c) % 2 == 1 {
                board.set(r, c, CellState::Miss);
            }
        }
    }
    board
}

#[test]
fn canonical_fleet_covers_seventeen_cells() {
    let board = placed_board(42);
    assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), TOTAL_SHIP_CELLS);
    assert_eq!(board.count_cells_with_state(CellState::Miss), 0);
    assert_eq!(board.count_cells_with_state(CellState::Hit), 0);
}

#[test]
fn manual_placement_tags_cells() {
    let mut board = Board::new();
    let placer = FleetPlacer::default();
    placer
        .place(&mut board, 1, Placement::new(2, 2, Orientation::Vertical))
        .unwrap();
    for r in 2..6 {
        assert_eq!(board.get(r, 2), CellState::ShipUnhit);
        assert_eq!(board.ship_at(r, 2), Some(1));
    }
    assert_eq!(board.get(6, 2), CellState::Empty);
    assert_eq!(board.placement(1), Some(Placement::new(2, 2, Orientation::Vertical)));
    assert!(!board.is_sunk(1));
}

#[test]
fn manual_placement_errors() {
    let mut board = Board::new();
    let placer = FleetPlacer::default();
    let origin = Placement::new(0, 0, Orientation::Horizontal);

    assert_eq!(placer.place(&mut board, NUM_SHIPS, origin), Err(GameError::InvalidIndex));
    assert_eq!(
        placer.place(&mut board, 0, Placement::new(0, 6, Orientation::Horizontal)),
        Err(GameError::ShipOutOfBounds)
    );
    placer.place(&mut board, 0, origin).unwrap();
    assert_eq!(placer.place(&mut board, 0, origin), Err(GameError::ShipAlreadyPlaced));
    assert_eq!(
        placer.place(&mut board, 2, Placement::new(0, 4, Orientation::Vertical)),
        Err(GameError::ShipOverlaps)
    );
    // Failed attempts leave the board untouched.
    assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), SHIPS[0].length());
}

#[test]
fn propose_gives_up_after_cap() {
    let board = checkerboard();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = FleetPlacer::new(50)
        .propose(&board, SHIPS[0], &mut rng)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::PlacementFailed {
            ship: "Carrier",
            attempts: 50
        }
    );
}

#[test]
fn place_fleet_fails_on_crowded_board() {
    let mut board = checkerboard();
    let before = board.clone();
    let mut rng = SmallRng::seed_from_u64(3);
    let err = FleetPlacer::new(200).place_fleet(&mut board, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::PlacementFailed { ship: "Carrier", .. }));
    assert_eq!(board, before);
}

/// Room for exactly the Carrier (A1-A5) and the Battleship (C1-C4), nothing else.
fn room_for_two_ships() -> Board {
    let mut board = Board::new();
    for r in 0..10 {
        for c in 0..10 {
            let open = (r == 0 && c < 5) || (r == 2 && c < 4);
            if !open {
                board.set(r, c, CellState::Miss);
            }
        }
    }
    board
}

#[test]
fn failed_fleet_leaves_board_untouched() {
    let mut board = room_for_two_ships();
    let before = board.clone();
    let placer = FleetPlacer::default();
    let mut rng = SmallRng::seed_from_u64(1);

    let err = placer.place_fleet(&mut board, &mut rng).unwrap_err();

    assert_eq!(
        err,
        GameError::PlacementFailed {
            ship: "Cruiser",
            attempts: placer.max_attempts()
        }
    );
    assert_eq!(board, before);
    assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), 0);
    assert_eq!(board.placement(0), None);
}

#[test]
fn same_seed_same_fleet() {
    assert_eq!(placed_board(12345), placed_board(12345));
    for i in 0..NUM_SHIPS {
        assert_eq!(placed_board(7).placement(i), placed_board(7).placement(i));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_fit_and_never_overlap(seed in any::<u64>()) {
        let board = placed_board(seed);
        let mut seen = HashSet::new();
        for (i, ship) in SHIPS.iter().enumerate() {
            let placement = board.placement(i).expect("every ship is placed");
            prop_assert!(placement.fits(ship.length()));
            for cell in placement.cells(ship.length()) {
                prop_assert!(seen.insert(cell), "cell {:?} covered twice", cell);
                prop_assert_eq!(board.ship_at(cell.0, cell.1), Some(i));
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), TOTAL_SHIP_CELLS);
    }
}
