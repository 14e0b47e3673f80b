//! Player trait and implementations
//!
//! A player chooses where to shoot. Everything else is optional feedback:
//! - RandomPlayer: uniform-random targeting
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::engine::{
    board::{Board, BoardSnapshot},
    common::{BoardError, PlacementError},
    coord::Coordinate,
    fleet::FleetGenerator,
    game::TurnOutcome,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target on the opponent's board, as this player is
    /// allowed to see it. `None` means the player stopped playing.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &BoardSnapshot)
        -> Option<Coordinate>;

    /// Place this player's fleet. Random placement unless overridden.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        generator: &FleetGenerator,
        board: &mut Board,
    ) -> Result<(), PlacementError> {
        generator.populate(rng, board)
    }

    /// Called before each shot this player is asked to make.
    fn handle_turn_start(&mut self, _own: &BoardSnapshot, _opponent: &BoardSnapshot) {}

    /// The last target was rejected; another will be requested.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Result of this player's accepted shot.
    fn handle_shot_result(&mut self, _outcome: &TurnOutcome) {}

    /// Result of an opponent shot against this player's board.
    fn handle_opponent_shot(&mut self, _outcome: &TurnOutcome) {}

    /// The match is over.
    fn handle_match_end(&mut self, _won: bool) {}
}

pub mod ai;
pub use ai::RandomPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
