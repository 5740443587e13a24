//! Per-side grid of cell states, stored as bitboard layers.

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::Placement;
use serde::Serialize;

type BB = BitBoard<u128, { BOARD_SIZE }>;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// State of a single cell. Every cell holds exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellState {
    Empty,
    ShipUnhit,
    Miss,
    Hit,
}

impl CellState {
    /// Whether the cell has already been resolved by a shot.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit)
    }
}

/// What the opposing side is allowed to see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibleCell {
    /// Not shot yet: water and unhit ship look the same.
    Unknown,
    Miss,
    Hit,
}

/// A `BOARD_SIZE`×`BOARD_SIZE` grid owned by one side.
///
/// Cell state is derived from three layers: `ships` (every ship cell, hit or
/// not), `hits` and `misses`. A `Hit` cell is set in both `ships` and `hits`,
/// so the four states stay mutually exclusive by construction.
///
/// Ship cells placed through the fleet placer also carry the fleet index of
/// their ship, which is what lets the board answer which ships are sunk. Sink
/// state is read off the cells of each placement, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ships: BB,
    hits: BB,
    misses: BB,
    owners: [Option<u8>; CELLS],
    placements: [Option<Placement>; NUM_SHIPS],
}

#[inline]
fn index(row: usize, col: usize) -> usize {
    assert!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "cell ({}, {}) is outside the {}x{} board",
        row,
        col,
        BOARD_SIZE,
        BOARD_SIZE
    );
    row * BOARD_SIZE + col
}

impl Board {
    /// An all-`Empty` board with no ships.
    pub fn new() -> Self {
        Board {
            ships: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            owners: [None; CELLS],
            placements: [None; NUM_SHIPS],
        }
    }

    /// State of (`row`, `col`), or an error if the coordinate is off the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        let state = if self.hits.get(row, col)? {
            CellState::Hit
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else if self.ships.get(row, col)? {
            CellState::ShipUnhit
        } else {
            CellState::Empty
        };
        Ok(state)
    }

    /// State of (`row`, `col`).
    ///
    /// # Panics
    /// If the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        match self.try_get(row, col) {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }

    /// Overwrite (`row`, `col`) with `state`, or fail if the coordinate is off
    /// the grid. The board is unchanged on error.
    ///
    /// Per-ship bookkeeping is only touched to drop a cell's ship tag when the
    /// cell stops being part of a ship.
    pub fn try_set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        self.ships.clear(row, col)?;
        self.hits.clear(row, col)?;
        self.misses.clear(row, col)?;
        match state {
            CellState::Empty => {}
            CellState::ShipUnhit => self.ships.set(row, col)?,
            CellState::Miss => self.misses.set(row, col)?,
            CellState::Hit => {
                self.ships.set(row, col)?;
                self.hits.set(row, col)?;
            }
        }
        if matches!(state, CellState::Empty | CellState::Miss) {
            self.owners[index(row, col)] = None;
        }
        Ok(())
    }

    /// Overwrite (`row`, `col`) with `state`.
    ///
    /// # Panics
    /// If the coordinate is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Err(e) = self.try_set(row, col, state) {
            panic!("{}", e);
        }
    }

    /// Number of cells currently holding `state`.
    pub fn count_cells_with_state(&self, state: CellState) -> usize {
        match state {
            CellState::Hit => self.hits.count_ones(),
            CellState::Miss => self.misses.count_ones(),
            CellState::ShipUnhit => (self.ships & !self.hits).count_ones(),
            CellState::Empty => (!(self.ships | self.misses)).count_ones(),
        }
    }

    /// True iff no cell holds `ShipUnhit`. Computed from cell state every time.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.count_cells_with_state(CellState::ShipUnhit) == 0
    }

    /// The opponent's view of (`row`, `col`). Never reveals unhit ships.
    pub fn visible(&self, row: usize, col: usize) -> VisibleCell {
        match self.get(row, col) {
            CellState::Hit => VisibleCell::Hit,
            CellState::Miss => VisibleCell::Miss,
            CellState::Empty | CellState::ShipUnhit => VisibleCell::Unknown,
        }
    }

    /// Cells that have not been shot yet, in row-major order.
    pub fn untried_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (!(self.hits | self.misses)).iter_set_bits()
    }

    /// Fleet index of the ship covering (`row`, `col`), if it was placed as one.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<usize> {
        self.owners[index(row, col)].map(usize::from)
    }

    /// Where fleet ship `ship_index` was placed, if it has been.
    pub fn placement(&self, ship_index: usize) -> Option<Placement> {
        self.placements.get(ship_index).copied().flatten()
    }

    /// Whether fleet ship `ship_index` is placed and every cell it covers is `Hit`.
    pub fn is_sunk(&self, ship_index: usize) -> bool {
        match self.placement(ship_index) {
            Some(placement) => placement
                .cells(SHIPS[ship_index].length())
                .all(|(r, c)| self.get(r, c) == CellState::Hit),
            None => false,
        }
    }

    /// Names of the placed ships that have been sunk, in fleet order.
    pub fn sunk_ships(&self) -> impl Iterator<Item = &'static str> + '_ {
        (0..NUM_SHIPS)
            .filter(|&i| self.is_sunk(i))
            .map(|i| SHIPS[i].name())
    }

    /// Tag the cells of a freshly placed ship with its fleet index.
    pub(crate) fn record_placement(&mut self, ship_index: usize, placement: Placement) {
        for (r, c) in placement.cells(SHIPS[ship_index].length()) {
            self.owners[index(r, c)] = Some(ship_index as u8);
        }
        self.placements[ship_index] = Some(placement);
    }

    /// The ship covering a cell that just turned `Hit`, if that hit sank it.
    pub(crate) fn sunk_by(&self, row: usize, col: usize) -> Option<usize> {
        self.ship_at(row, col).filter(|&ship| self.is_sunk(ship))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
