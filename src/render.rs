//! Text views of a board.
//!
//! Rows are labelled `A`..`J`, columns `1`..`10`. The opponent view goes
//! through [`Board::visible`], so it cannot show an unhit ship.

use crate::board::{Board, CellState, VisibleCell};
use crate::config::BOARD_SIZE;
use std::fmt::Write;

/// Whose eyes a board is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The board's owner: ships are shown.
    Owner,
    /// The other side: only shots are shown.
    Opponent,
}

pub fn owner_glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '~',
        CellState::ShipUnhit => '#',
        CellState::Miss => 'o',
        CellState::Hit => 'X',
    }
}

pub fn opponent_glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Unknown => '~',
        VisibleCell::Miss => 'o',
        VisibleCell::Hit => 'X',
    }
}

/// Render `board` as a labelled grid, one line per row.
pub fn render_board(board: &Board, view: View) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {:2}", c + 1);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", (b'A' + r as u8) as char);
        for c in 0..BOARD_SIZE {
            let glyph = match view {
                View::Owner => owner_glyph(board.get(r, c)),
                View::Opponent => opponent_glyph(board.visible(r, c)),
            };
            let _ = write!(out, "  {}", glyph);
        }
        out.push('\n');
    }
    out
}
