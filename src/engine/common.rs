//! Shared outcome and error types: placement errors, shot errors, shot
//! outcomes and turn errors.
//!
//! Every error here is recoverable: the acting player is told and asked
//! again. Only [`BoardError::Inconsistent`] signals a defect.

use core::fmt;

use crate::engine::bitboard::BitBoardError;
use crate::engine::coord::Coordinate;
use crate::engine::game::Side;
use crate::engine::vessel::Vessel;

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact segment of a vessel, carrying the vessel.
    Sunk(Vessel),
    /// No vessel at the target.
    Miss,
}

impl ShotOutcome {
    /// `Hit` and `Sunk` both let the shooter fire again.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

/// Outcome of a shot together with the number of vessels still afloat on
/// the target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    pub vessels_alive: usize,
}

/// Reasons a vessel placement is rejected. The board is left unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Vessel length outside `1..=MAX_VESSEL_LENGTH`.
    InvalidLength(usize),
    /// A vessel cell lies outside the board.
    OutOfBounds(Coordinate),
    /// A vessel cell is already occupied.
    Overlap(Coordinate),
    /// A vessel cell touches another vessel, diagonals included.
    Adjacent(Coordinate),
    /// Every vessel slot on the board is taken.
    FleetFull,
    /// A shot has been fired at this board; the fleet is fixed.
    SetupClosed,
    /// Fleet generation needs an empty board.
    BoardNotEmpty,
    /// Fleet generation ran out of attempts and restarts.
    Exhausted { length: usize },
}

impl PlacementError {
    /// Rejections the fleet generator resolves by sampling again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlacementError::OutOfBounds(_) | PlacementError::Overlap(_) | PlacementError::Adjacent(_)
        )
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength(len) => write!(f, "Invalid vessel length {}", len),
            PlacementError::OutOfBounds(c) => write!(f, "Vessel cell {} is off the board", c),
            PlacementError::Overlap(c) => write!(f, "Vessel cell {} is already occupied", c),
            PlacementError::Adjacent(c) => write!(f, "Vessel cell {} touches another vessel", c),
            PlacementError::FleetFull => write!(f, "All vessels are already placed"),
            PlacementError::SetupClosed => write!(f, "Vessels cannot be placed once firing has started"),
            PlacementError::BoardNotEmpty => write!(f, "Fleet generation requires an empty board"),
            PlacementError::Exhausted { length } => {
                write!(f, "Unable to place a vessel of length {}", length)
            }
        }
    }
}

/// Errors returned by board shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the board.
    OutOfBounds(Coordinate),
    /// Target was already resolved to a hit or a miss.
    AlreadyTargeted(Coordinate),
    /// Ship map and vessel list disagree. Never expected in a correct build.
    Inconsistent(Coordinate),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Shot at {} is outside the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "A shot was already fired at {}", c),
            BoardError::Inconsistent(c) => write!(f, "Board state is inconsistent at {}", c),
        }
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        let BitBoardError::IndexOutOfBounds { row, col } = err;
        BoardError::OutOfBounds(Coordinate::new(col as i32, row as i32))
    }
}

/// Errors returned while running a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The shot was rejected; the same side shoots again.
    Shot(BoardError),
    /// Setup failed for one side.
    Placement(Side, PlacementError),
    /// A side entered the match without vessels afloat.
    EmptyFleet(Side),
    /// The match already has a winner.
    MatchOver,
    /// A player stopped supplying targets.
    NoTarget(Side),
}

impl TurnError {
    /// Whether the side to move keeps its turn and may simply try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TurnError::Shot(BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))
        )
    }
}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Shot(err)
    }
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Shot(e) => write!(f, "{}", e),
            TurnError::Placement(side, e) => write!(f, "{} could not place its fleet: {}", side, e),
            TurnError::EmptyFleet(side) => write!(f, "{} has no vessels afloat", side),
            TurnError::MatchOver => write!(f, "The match is already over"),
            TurnError::NoTarget(side) => write!(f, "{} stopped selecting targets", side),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
