//! Vessel definitions: a straight line of cells hanging off an anchor.

use crate::engine::common::PlacementError;
use crate::engine::config::MAX_VESSEL_LENGTH;
use crate::engine::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing `x`.
    Horizontal,
    /// Extends along increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` along this orientation.
    pub fn unit(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel with its position and remaining undamaged segments.
///
/// The vessel knows nothing about boards; bounds and overlap are checked by
/// [`Board::place_vessel`](crate::engine::board::Board::place_vessel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
    remaining: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Fails for lengths outside
    /// `1..=MAX_VESSEL_LENGTH`.
    pub fn new(
        length: usize,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if length == 0 || length > MAX_VESSEL_LENGTH {
            return Err(PlacementError::InvalidLength(length));
        }
        Ok(Vessel {
            length,
            anchor,
            orientation,
            remaining: length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The `length` cells of the vessel, starting at the anchor.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let anchor = self.anchor;
        let (dx, dy) = self.orientation.unit();
        (0..self.length as i32).map(move |i| anchor.offset(dx * i, dy * i))
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Record one hit. Returns `false` without changing anything when the
    /// vessel is already destroyed.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }
}
