use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// The canonical fleet, largest first. Placement walks it in this order.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement candidates drawn per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Random targets drawn before the selector enumerates untried cells instead.
pub const MAX_TARGET_ATTEMPTS: usize = 1_000;

