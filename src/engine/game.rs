//! Turn policy for a match between two boards.

use core::fmt;
use log::{debug, info};

use crate::engine::{
    board::{Board, BoardSnapshot, Visibility},
    common::{ShotReport, TurnError},
    coord::Coordinate,
};

/// One of the two sides of a match. `First` shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "player1"),
            Side::Second => write!(f, "player2"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// What happened on one accepted shot and who shoots next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub shooter: Side,
    pub target: Coordinate,
    pub report: ShotReport,
    /// Side to move after this shot: the shooter again after a hit.
    pub next: Side,
    pub status: MatchStatus,
}

/// Both boards plus the turn policy.
///
/// A hit (sunk or not) keeps the turn, a miss passes it, a rejected shot
/// leaves it where it was. The match ends as soon as one board has no
/// vessels afloat.
#[derive(Debug, Clone)]
pub struct Match {
    boards: [Board; 2],
    to_move: Side,
    status: MatchStatus,
    shots: [usize; 2],
}

impl Match {
    /// `first` is owned by [`Side::First`], `second` by [`Side::Second`].
    /// Both boards need at least one vessel afloat.
    pub fn new(first: Board, second: Board) -> Result<Self, TurnError> {
        if first.vessels_alive() == 0 {
            return Err(TurnError::EmptyFleet(Side::First));
        }
        if second.vessels_alive() == 0 {
            return Err(TurnError::EmptyFleet(Side::Second));
        }
        Ok(Self {
            boards: [first, second],
            to_move: Side::First,
            status: MatchStatus::InProgress,
            shots: [0; 2],
        })
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// What `viewer` may see of the board owned by `owner`.
    pub fn view(&self, viewer: Side, owner: Side) -> BoardSnapshot {
        let visibility = if viewer == owner {
            Visibility::Revealed
        } else {
            Visibility::Concealed
        };
        self.board(owner).snapshot(visibility)
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            MatchStatus::Won(side) => Some(side),
            MatchStatus::InProgress => None,
        }
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The side to move fires at the opponent's board.
    ///
    /// A rejected shot (off the board, or already resolved) returns
    /// [`TurnError::Shot`] and does not consume the turn.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnOutcome, TurnError> {
        if self.status != MatchStatus::InProgress {
            return Err(TurnError::MatchOver);
        }
        let shooter = self.to_move;
        let defender = shooter.opponent();
        let report = self.boards[defender.index()].fire_at(target)?;
        self.shots[shooter.index()] += 1;

        if report.vessels_alive == 0 {
            self.status = MatchStatus::Won(shooter);
            info!(
                "{} wins after {} shots",
                shooter,
                self.shots[shooter.index()]
            );
        } else if !report.outcome.is_hit() {
            self.to_move = defender;
        }
        debug!("{} fired at {}: {:?}", shooter, target, report.outcome);

        Ok(TurnOutcome {
            shooter,
            target,
            report,
            next: self.to_move,
            status: self.status,
        })
    }
}
