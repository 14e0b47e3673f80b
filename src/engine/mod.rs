//! Core game engine (no_std compatible)
//!
//! Boards, vessels, fleet placement and the turn policy. Depends only on
//! num-traits, rand (without the thread RNG) and the log facade.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod game;
pub mod vessel;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardPhase, BoardSnapshot, CellState, Visibility};
pub use common::{BoardError, PlacementError, ShotOutcome, ShotReport, TurnError};
pub use config::*;
pub use coord::Coordinate;
pub use fleet::FleetGenerator;
pub use game::{Match, MatchStatus, Side, TurnOutcome};
pub use vessel::{Orientation, Vessel};
