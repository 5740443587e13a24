//! Ship definitions and placements.

use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where a ship sits: its first cell and the direction it extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Whether a ship of `length` starting here lies fully inside the grid.
    pub fn fits(&self, length: usize) -> bool {
        if length == 0 || self.row >= BOARD_SIZE || self.col >= BOARD_SIZE {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.col + length <= BOARD_SIZE,
            Orientation::Vertical => self.row + length <= BOARD_SIZE,
        }
    }

    /// The `length` cells covered by a ship starting here. Cells past the
    /// grid edge are yielded as-is; check [`Placement::fits`] first.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}
