//! Fleet placement: manual and rejection-sampled.

use crate::board::{Board, CellState};
use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Placement, ShipType};
use rand::Rng;

/// Populates boards with non-overlapping ships.
///
/// Random placement draws a uniform row, column and orientation and rejects
/// the candidate unless the whole ship is on the grid and every covered cell
/// is `Empty`. Each ship gets at most `max_attempts` draws; there is no
/// backtracking over ships that are already placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer {
    max_attempts: usize,
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new(MAX_PLACEMENT_ATTEMPTS)
    }
}

impl FleetPlacer {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Whether `ship` can sit at `placement` on `board` as it is now.
    pub fn is_legal(board: &Board, ship: ShipType, placement: Placement) -> bool {
        placement.fits(ship.length())
            && placement
                .cells(ship.length())
                .all(|(r, c)| board.get(r, c) == CellState::Empty)
    }

    /// Draw a legal placement for `ship` without touching the board.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        board: &Board,
        ship: ShipType,
        rng: &mut R,
    ) -> Result<Placement, GameError> {
        for attempt in 1..=self.max_attempts {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let candidate = Placement::new(row, col, orientation);
            if Self::is_legal(board, ship, candidate) {
                log::debug!(
                    "placed {} at ({}, {}) {:?} after {} attempt(s)",
                    ship.name(),
                    row,
                    col,
                    orientation,
                    attempt
                );
                return Ok(candidate);
            }
        }
        log::warn!(
            "no room for {} after {} attempts",
            ship.name(),
            self.max_attempts
        );
        Err(GameError::PlacementFailed {
            ship: ship.name(),
            attempts: self.max_attempts,
        })
    }

    /// Put fleet ship `ship_index` at `placement`.
    pub fn place(
        &self,
        board: &mut Board,
        ship_index: usize,
        placement: Placement,
    ) -> Result<(), GameError> {
        if ship_index >= NUM_SHIPS {
            return Err(GameError::InvalidIndex);
        }
        if board.placement(ship_index).is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let ship = SHIPS[ship_index];
        if !placement.fits(ship.length()) {
            return Err(GameError::ShipOutOfBounds);
        }
        if !Self::is_legal(board, ship, placement) {
            return Err(GameError::ShipOverlaps);
        }
        for (r, c) in placement.cells(ship.length()) {
            board.try_set(r, c, CellState::ShipUnhit)?;
        }
        board.record_placement(ship_index, placement);
        Ok(())
    }

    /// Randomly place the whole canonical fleet, in roster order.
    ///
    /// Ships are placed on a scratch copy; `board` is only written once every
    /// ship has found a spot, so an error leaves it as it was.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let mut scratch = board.clone();
        for (i, ship) in SHIPS.iter().enumerate() {
            let placement = self.propose(&scratch, *ship, rng)?;
            self.place(&mut scratch, i, placement)?;
        }
        *board = scratch;
        Ok(())
    }
}
