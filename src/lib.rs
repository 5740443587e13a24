mod auto;
mod bitboard;
mod board;
pub mod cli;
mod common;
mod config;
mod fleet;
mod game;
mod logging;
pub mod render;
mod ship;
mod shot;
mod side;
mod target;

pub use auto::AutoInput;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::FleetPlacer;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
pub use shot::{resolve, resolve_report, ShotReport};
pub use side::{Player, Side};
pub use target::TargetSelector;
