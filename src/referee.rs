//! Drives a match between two players.
//!
//! The referee owns the [`Match`] and both players. It asks the side to
//! move for targets until one is accepted, forwards results to both
//! players and stops when one fleet is gone.

use alloc::boxed::Box;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::engine::{
    board::Board,
    common::TurnError,
    fleet::FleetGenerator,
    game::{Match, MatchStatus, Side, TurnOutcome},
};
use crate::player::Player;

/// Final result of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    /// Accepted shots per side, indexed by [`Side::index`].
    pub shots: [usize; 2],
    /// Number of times the turn changed hands, counting the final turn.
    pub turns: usize,
}

pub struct Referee {
    game: Match,
    players: [Box<dyn Player>; 2],
    turns: usize,
}

impl Referee {
    pub fn new(game: Match, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            game,
            players: [first, second],
            turns: 0,
        }
    }

    /// Let each player place its fleet on a fresh board, then start the
    /// match.
    pub fn setup(
        rng: &mut SmallRng,
        generator: &FleetGenerator,
        mut first: Box<dyn Player>,
        mut second: Box<dyn Player>,
    ) -> Result<Self, TurnError> {
        let mut first_board = Board::new();
        first
            .place_fleet(rng, generator, &mut first_board)
            .map_err(|e| TurnError::Placement(Side::First, e))?;
        let mut second_board = Board::new();
        second
            .place_fleet(rng, generator, &mut second_board)
            .map_err(|e| TurnError::Placement(Side::Second, e))?;
        let game = Match::new(first_board, second_board)?;
        Ok(Self::new(game, first, second))
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Fire one accepted shot for the side to move.
    ///
    /// Rejected targets are reported back to the shooter, who is asked
    /// again; the turn is not consumed.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnOutcome, TurnError> {
        let side = self.game.to_move();
        let opponent = side.opponent();
        loop {
            let view = self.game.view(side, opponent);
            let target = self.players[side.index()]
                .select_target(rng, &view)
                .ok_or(TurnError::NoTarget(side))?;
            match self.game.fire(target) {
                Ok(outcome) => {
                    self.players[side.index()].handle_shot_result(&outcome);
                    self.players[opponent.index()].handle_opponent_shot(&outcome);
                    if outcome.next != side || outcome.status != MatchStatus::InProgress {
                        self.turns += 1;
                    }
                    return Ok(outcome);
                }
                Err(e) if e.is_recoverable() => {
                    debug!("{} target {} rejected: {}", side, target, e);
                    if let TurnError::Shot(err) = e {
                        self.players[side.index()].handle_rejected_shot(target, &err);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Play until one side has no vessels left.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<MatchSummary, TurnError> {
        loop {
            if let MatchStatus::Won(winner) = self.game.status() {
                self.players[winner.index()].handle_match_end(true);
                self.players[winner.opponent().index()].handle_match_end(false);
                let summary = MatchSummary {
                    winner,
                    shots: [self.game.shots(Side::First), self.game.shots(Side::Second)],
                    turns: self.turns,
                };
                info!("match over: {:?}", summary);
                return Ok(summary);
            }

            let side = self.game.to_move();
            let own = self.game.view(side, side);
            let opponent = self.game.view(side, side.opponent());
            self.players[side.index()].handle_turn_start(&own, &opponent);
            self.play_turn(rng)?;
        }
    }
}
