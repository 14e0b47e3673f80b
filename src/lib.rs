#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod referee;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::engine::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{Player, RandomPlayer};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use referee::{MatchSummary, Referee};
#[cfg(feature = "std")]
pub use ui::render_side_by_side;
