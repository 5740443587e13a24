//! Shot outcomes and the library error type.

use crate::bitboard::BitBoardError;
use core::fmt;
use serde::Serialize;

/// Classification of a single resolved coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShotOutcome {
    /// The cell had already been shot; nothing changed.
    AlreadyShot,
    /// Open water.
    Miss,
    /// A ship segment.
    Hit,
}

impl ShotOutcome {
    /// Whether this outcome used up the shooter's turn.
    pub fn ends_turn(self) -> bool {
        !matches!(self, ShotOutcome::AlreadyShot)
    }
}

/// Errors returned by board setup and targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Ship index is not part of the fleet.
    InvalidIndex,
    /// Ship would extend past the grid.
    ShipOutOfBounds,
    /// Ship would cover a cell that is not empty.
    ShipOverlaps,
    /// Ship has already been placed on this board.
    ShipAlreadyPlaced,
    /// Random placement found no legal spot within the attempt cap.
    PlacementFailed { ship: &'static str, attempts: usize },
    /// Every cell on the target board has already been shot.
    NoUntriedCells,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::InvalidIndex => write!(f, "Ship index is out of range"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps another ship"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            GameError::PlacementFailed { ship, attempts } => {
                write!(f, "Unable to place {} after {} attempts", ship, attempts)
            }
            GameError::NoUntriedCells => write!(f, "No untried cells remain"),
        }
    }
}

impl std::error::Error for GameError {}
