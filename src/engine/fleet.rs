//! Random fleet placement.
//!
//! Anchors are sampled uniformly among positions that keep the vessel on
//! the board, then handed to [`Board::place_vessel`] which enforces the
//! overlap and no-touching rules. Each vessel gets a bounded number of
//! attempts; when they run out the whole fleet starts over on a fresh
//! board, up to a bounded number of restarts.

use log::{debug, warn};
use rand::Rng;

use crate::engine::board::{Board, BoardPhase};
use crate::engine::common::PlacementError;
use crate::engine::config::{MatchConfig, BOARD_SIZE, FLEET};
use crate::engine::coord::Coordinate;
use crate::engine::vessel::{Orientation, Vessel};

/// Places the fixed fleet at random.
#[derive(Debug, Clone, Copy)]
pub struct FleetGenerator {
    max_attempts: usize,
    max_restarts: usize,
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl FleetGenerator {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            max_attempts: config.max_placement_attempts.max(1),
            max_restarts: config.max_fleet_restarts,
        }
    }

    /// Random vessel of `length` that fits inside the board. It may still
    /// overlap or touch vessels already placed.
    pub fn random_vessel<R: Rng + ?Sized>(
        rng: &mut R,
        length: usize,
    ) -> Result<Vessel, PlacementError> {
        let size = BOARD_SIZE as usize;
        if length == 0 || length > size {
            return Err(PlacementError::InvalidLength(length));
        }
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (size - length, size - 1),
            Orientation::Vertical => (size - 1, size - length),
        };
        let x = rng.random_range(0..=max_x) as i32;
        let y = rng.random_range(0..=max_y) as i32;
        Vessel::new(length, Coordinate::new(x, y), orientation)
    }

    /// Place every vessel of the fleet on `board`.
    ///
    /// `board` must be empty and in setup. It is only written once the whole
    /// fleet has been placed.
    pub fn populate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), PlacementError> {
        self.populate_with(rng, board, &FLEET)
    }

    /// Place vessels of the given lengths, in order.
    fn populate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), PlacementError> {
        if board.vessel_count() > 0 {
            return Err(PlacementError::BoardNotEmpty);
        }
        if board.phase() != BoardPhase::Setup {
            return Err(PlacementError::SetupClosed);
        }

        let mut failed_length = lengths.first().copied().unwrap_or(0);
        for restart in 0..=self.max_restarts {
            let mut candidate = Board::new();
            match self.try_fleet(rng, &mut candidate, lengths) {
                Ok(()) => {
                    debug!(
                        "fleet of {} vessels placed after {} restart(s)",
                        lengths.len(),
                        restart
                    );
                    *board = candidate;
                    return Ok(());
                }
                Err(PlacementError::Exhausted { length }) => {
                    warn!(
                        "no room for a vessel of length {}, restarting fleet ({}/{})",
                        length, restart, self.max_restarts
                    );
                    failed_length = length;
                }
                Err(e) => return Err(e),
            }
        }
        Err(PlacementError::Exhausted {
            length: failed_length,
        })
    }

    fn try_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), PlacementError> {
        for &length in lengths {
            self.place_one(rng, board, length)?;
        }
        Ok(())
    }

    fn place_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        length: usize,
    ) -> Result<(), PlacementError> {
        for _ in 0..self.max_attempts {
            let vessel = Self::random_vessel(rng, length)?;
            match board.place_vessel(vessel) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_retryable() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PlacementError::Exhausted { length })
    }
}
