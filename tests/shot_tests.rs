use broadside::{
    resolve, resolve_report, Board, CellState, FleetPlacer, Orientation, Placement, ShotOutcome,
    BOARD_SIZE,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const DESTROYER: usize = 4;

#[test]
fn sinking_a_lone_destroyer() {
    let mut board = Board::new();
    FleetPlacer::default()
        .place(&mut board, DESTROYER, Placement::new(0, 0, Orientation::Horizontal))
        .unwrap();

    assert_eq!(resolve(&mut board, 0, 0), ShotOutcome::Hit);
    assert!(!board.is_fleet_destroyed());
    let last = resolve_report(&mut board, 0, 1);
    assert_eq!(last.outcome, ShotOutcome::Hit);
    assert_eq!(last.sunk, Some(DESTROYER));
    assert!(board.is_fleet_destroyed());
    assert!(board.is_sunk(DESTROYER));
    assert_eq!(board.sunk_ships().collect::<Vec<_>>(), vec!["Destroyer"]);

    let again = resolve_report(&mut board, 0, 0);
    assert_eq!(again.outcome, ShotOutcome::AlreadyShot);
    assert_eq!(again.sunk, None);
}

#[test]
fn miss_on_open_water() {
    let mut board = Board::new();
    board.set(0, 0, CellState::ShipUnhit);
    let unhit = board.count_cells_with_state(CellState::ShipUnhit);
    let misses = board.count_cells_with_state(CellState::Miss);

    assert_eq!(resolve(&mut board, 5, 5), ShotOutcome::Miss);
    assert_eq!(board.get(5, 5), CellState::Miss);
    assert_eq!(board.count_cells_with_state(CellState::Miss), misses + 1);
    assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), unhit);
}

#[test]
fn repeat_shots_change_nothing() {
    let mut board = Board::new();
    board.set(3, 3, CellState::ShipUnhit);
    assert_eq!(resolve(&mut board, 3, 3), ShotOutcome::Hit);
    assert_eq!(resolve(&mut board, 4, 4), ShotOutcome::Miss);
    let snapshot = board.clone();
    for _ in 0..3 {
        assert_eq!(resolve(&mut board, 3, 3), ShotOutcome::AlreadyShot);
        assert_eq!(resolve(&mut board, 4, 4), ShotOutcome::AlreadyShot);
    }
    assert_eq!(board, snapshot);
}

#[test]
fn untagged_ship_cells_never_report_a_sink() {
    let mut board = Board::new();
    board.set(9, 9, CellState::ShipUnhit);
    let report = resolve_report(&mut board, 9, 9);
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(report.sunk, None);
    assert!(board.is_fleet_destroyed());
}

#[test]
fn each_ship_reports_its_own_sink() {
    let mut board = Board::new();
    let placer = FleetPlacer::default();
    // Cruiser and Submarine share a length; hits must still be attributed.
    placer.place(&mut board, 2, Placement::new(0, 0, Orientation::Horizontal)).unwrap();
    placer.place(&mut board, 3, Placement::new(1, 0, Orientation::Horizontal)).unwrap();

    for c in 0..3 {
        assert_eq!(resolve_report(&mut board, 1, c).sunk, (c == 2).then_some(3));
    }
    assert!(board.is_sunk(3));
    assert!(!board.is_sunk(2));
    assert!(!board.is_fleet_destroyed());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unhit_count_drops_by_one_per_hit(seed in any::<u64>(), shots in 1..150usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        FleetPlacer::default().place_fleet(&mut board, &mut rng).unwrap();

        for _ in 0..shots {
            let r = rng.random_range(0..BOARD_SIZE);
            let c = rng.random_range(0..BOARD_SIZE);
            let before = board.clone();
            let unhit = board.count_cells_with_state(CellState::ShipUnhit);
            match resolve(&mut board, r, c) {
                ShotOutcome::Hit => {
                    prop_assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), unhit - 1);
                }
                ShotOutcome::Miss => {
                    prop_assert_eq!(board.count_cells_with_state(CellState::ShipUnhit), unhit);
                }
                ShotOutcome::AlreadyShot => {
                    prop_assert_eq!(&board, &before);
                }
            }
            prop_assert!(board.get(r, c).is_shot());
            prop_assert_eq!(resolve(&mut board, r, c), ShotOutcome::AlreadyShot);
        }
    }

    #[test]
    fn destroyed_iff_every_ship_cell_hit(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        FleetPlacer::default().place_fleet(&mut board, &mut rng).unwrap();

        let mut cells: Vec<_> = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| board.get(r, c) == CellState::ShipUnhit)
            .collect();
        let last = cells.pop().unwrap();
        for (r, c) in cells {
            resolve(&mut board, r, c);
            prop_assert!(!board.is_fleet_destroyed());
        }
        resolve(&mut board, last.0, last.1);
        prop_assert!(board.is_fleet_destroyed());
        prop_assert_eq!(board.sunk_ships().count(), 5);
    }
}
