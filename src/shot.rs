//! Shot resolution: the only place a shot changes cell state.

use crate::board::{Board, CellState};
use crate::common::ShotOutcome;

/// Result of resolving a shot, including any ship it finished off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// Fleet index of the ship this shot sank, if any.
    pub sunk: Option<usize>,
}

/// Resolve a shot at (`row`, `col`) against `board`.
///
/// Cells already holding `Miss` or `Hit` yield `AlreadyShot` and are left
/// alone. `ShipUnhit` becomes `Hit`, `Empty` becomes `Miss`.
pub fn resolve(board: &mut Board, row: usize, col: usize) -> ShotOutcome {
    resolve_report(board, row, col).outcome
}

/// Like [`resolve`], also reporting whether a placed ship was sunk.
pub fn resolve_report(board: &mut Board, row: usize, col: usize) -> ShotReport {
    match board.get(row, col) {
        CellState::Miss | CellState::Hit => ShotReport {
            outcome: ShotOutcome::AlreadyShot,
            sunk: None,
        },
        CellState::ShipUnhit => {
            board.set(row, col, CellState::Hit);
            ShotReport {
                outcome: ShotOutcome::Hit,
                sunk: board.sunk_by(row, col),
            }
        }
        CellState::Empty => {
            board.set(row, col, CellState::Miss);
            ShotReport {
                outcome: ShotOutcome::Miss,
                sunk: None,
            }
        }
    }
}
