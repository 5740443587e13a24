//! Target selection for the automated side.

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_TARGET_ATTEMPTS};
use rand::Rng;

/// Picks uniformly random cells that have not been shot yet.
///
/// Draws random coordinates and rejects shot ones, up to `max_attempts`
/// draws. If the board is so full that every draw was rejected, the untried
/// cells are enumerated and one of them is drawn uniformly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSelector {
    max_attempts: usize,
}

impl Default for TargetSelector {
    fn default() -> Self {
        Self::new(MAX_TARGET_ATTEMPTS)
    }
}

impl TargetSelector {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Choose a coordinate whose cell is `Empty` or `ShipUnhit`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        for _ in 0..self.max_attempts {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if !board.get(row, col).is_shot() {
                return Ok((row, col));
            }
            log::trace!("target ({}, {}) already shot, redrawing", row, col);
        }

        let untried: Vec<(usize, usize)> = board.untried_cells().collect();
        if untried.is_empty() {
            return Err(GameError::NoUntriedCells);
        }
        log::warn!(
            "sampling cap of {} reached, choosing among {} untried cells",
            self.max_attempts,
            untried.len()
        );
        Ok(untried[rng.random_range(0..untried.len())])
    }
}
