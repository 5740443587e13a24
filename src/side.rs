use crate::board::Board;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::ShipType;
use serde::Serialize;

/// The two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

/// One participant's board, roster and shot counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub(crate) board: Board,
    fleet: [ShipType; NUM_SHIPS],
    pub(crate) shots_fired: usize,
}

impl Side {
    /// A side defending `board` with the canonical roster.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            fleet: SHIPS,
            shots_fired: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Shots this side has resolved against its opponent. Repeats don't count.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Fleet ships that are still afloat on this side's board.
    pub fn ships_afloat(&self) -> impl Iterator<Item = ShipType> + '_ {
        self.fleet
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.board.is_sunk(*i))
            .map(|(_, ship)| *ship)
    }
}
