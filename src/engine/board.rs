//! Board state: vessel placements, hits, misses and blocked contours.

use core::fmt;
use log::debug;

use crate::engine::bitboard::BitBoard;
use crate::engine::common::{BoardError, PlacementError, ShotOutcome, ShotReport};
use crate::engine::config::{BOARD_SIZE, FLEET_SIZE};
use crate::engine::coord::Coordinate;
use crate::engine::vessel::Vessel;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const DIM: usize = BOARD_SIZE as usize;

/// What a single cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Next to a sunk vessel, so known to be empty. Still shootable.
    Blocked,
}

/// Placement is only allowed before the first accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Setup,
    Battle,
}

/// Whether a snapshot shows where the vessels are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Opponent's view: intact vessel cells read as `Empty`.
    Concealed,
    /// Owner's view.
    Revealed,
}

/// Immutable copy of a board's cells for presentation and targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    cells: [[CellState; DIM]; DIM],
    vessels_alive: usize,
    visibility: Visibility,
}

impl BoardSnapshot {
    pub fn dimension(&self) -> usize {
        DIM
    }

    /// Rows of cells, indexed `[y][x]`.
    pub fn rows(&self) -> &[[CellState; DIM]; DIM] {
        &self.cells
    }

    /// State at `coord`, `None` when off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        let (row, col) = locate(coord)?;
        Some(self.cells[row][col])
    }

    pub fn vessels_alive(&self) -> usize {
        self.vessels_alive
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Cells that have not been resolved to a hit or a miss, row-major.
    pub fn untargeted(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| match cell {
                CellState::Hit | CellState::Miss => None,
                _ => Some(Coordinate::new(x as i32, y as i32)),
            })
        })
    }
}

/// `(row, col)` of an in-bounds coordinate.
fn locate(coord: Coordinate) -> Option<(usize, usize)> {
    let dim = DIM as i32;
    if coord.x < 0 || coord.x >= dim || coord.y < 0 || coord.y >= dim {
        None
    } else {
        Some((coord.y as usize, coord.x as usize))
    }
}

/// One player's grid and fleet.
#[derive(Clone)]
pub struct Board {
    vessels: [Option<Vessel>; FLEET_SIZE],
    placed: usize,
    vessels_alive: usize,
    ship_map: BB,
    hits: BB,
    misses: BB,
    blocked: BB,
    phase: BoardPhase,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board in the setup phase.
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            vessels: [None; FLEET_SIZE],
            placed: 0,
            vessels_alive: 0,
            ship_map: empty,
            hits: empty,
            misses: empty,
            blocked: empty,
            phase: BoardPhase::Setup,
        }
    }

    pub fn dimension(&self) -> usize {
        DIM
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        locate(coord).is_none()
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.iter().flatten()
    }

    /// Number of vessels placed so far.
    pub fn vessel_count(&self) -> usize {
        self.placed
    }

    pub fn vessels_alive(&self) -> usize {
        self.vessels_alive
    }

    /// Returns `true` when every placed vessel is destroyed.
    pub fn all_sunk(&self) -> bool {
        self.vessels_alive == 0
    }

    /// Number of cells occupied by vessels, hit or not.
    pub fn occupied_cell_count(&self) -> usize {
        self.ship_map.count_ones()
    }

    /// Place a vessel. The vessel must fit on the board, must not overlap
    /// and must not touch any placed vessel, diagonals included. On error
    /// the board is unchanged.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if self.phase != BoardPhase::Setup {
            return Err(PlacementError::SetupClosed);
        }
        if self.placed >= FLEET_SIZE {
            return Err(PlacementError::FleetFull);
        }
        // placed vessels always start undamaged
        let vessel = Vessel::new(vessel.length(), vessel.anchor(), vessel.orientation())?;

        let mut mask = BB::new();
        for cell in vessel.occupied_cells() {
            let (row, col) = locate(cell).ok_or(PlacementError::OutOfBounds(cell))?;
            mask.set(row, col)
                .map_err(|_| PlacementError::OutOfBounds(cell))?;
        }
        if mask.intersects(&self.ship_map) {
            let cell = self.first_in(&vessel, &self.ship_map);
            return Err(PlacementError::Overlap(cell));
        }
        let exclusion = self.ship_map.dilate();
        if mask.intersects(&exclusion) {
            let cell = self.first_in(&vessel, &exclusion);
            return Err(PlacementError::Adjacent(cell));
        }

        self.ship_map |= mask;
        self.vessels[self.placed] = Some(vessel);
        self.placed += 1;
        self.vessels_alive += 1;
        debug!(
            "placed vessel of length {} at {} ({:?})",
            vessel.length(),
            vessel.anchor(),
            vessel.orientation()
        );
        Ok(())
    }

    /// First cell of `vessel` set in `mask`. Only called after an
    /// intersection was found.
    fn first_in(&self, vessel: &Vessel, mask: &BB) -> Coordinate {
        vessel
            .occupied_cells()
            .find(|c| {
                locate(*c)
                    .map(|(r, col)| mask.get(r, col).unwrap_or(false))
                    .unwrap_or(false)
            })
            .unwrap_or_else(|| vessel.anchor())
    }

    /// Mark every empty cell around a destroyed `vessel` as blocked.
    /// Occupied, hit and missed cells are left alone; cells off the board
    /// are skipped. Does nothing while the vessel is still afloat.
    pub fn mark_contour(&mut self, vessel: &Vessel) {
        if !vessel.is_destroyed() {
            return;
        }
        let Ok(body) = BB::from_cells(vessel.occupied_cells().filter_map(locate)) else {
            return;
        };
        let resolved = self.ship_map | self.hits | self.misses;
        self.blocked |= body.dilate() & !resolved;
    }

    /// Fire at `target`.
    ///
    /// Out-of-bounds targets and cells already hit or missed are rejected
    /// without touching the board. Blocked cells resolve to a miss.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotReport, BoardError> {
        let (row, col) = locate(target).ok_or(BoardError::OutOfBounds(target))?;
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyTargeted(target));
        }

        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            self.phase = BoardPhase::Battle;
            debug!("miss at {}", target);
            return Ok(self.report(ShotOutcome::Miss));
        }

        let Some(vessel) = self.vessels.iter_mut().flatten().find(|v| v.contains(target)) else {
            debug_assert!(false, "ship map set at {} without a vessel", target);
            return Err(BoardError::Inconsistent(target));
        };
        if !vessel.register_hit() {
            debug_assert!(false, "intact cell {} on a destroyed vessel", target);
            return Err(BoardError::Inconsistent(target));
        }
        let vessel = *vessel;
        self.hits.set(row, col)?;
        self.phase = BoardPhase::Battle;

        if vessel.is_destroyed() {
            self.vessels_alive = self.vessels_alive.saturating_sub(1);
            self.mark_contour(&vessel);
            debug!(
                "vessel of length {} sunk at {}, {} left",
                vessel.length(),
                target,
                self.vessels_alive
            );
            Ok(self.report(ShotOutcome::Sunk(vessel)))
        } else {
            debug!("hit at {}", target);
            Ok(self.report(ShotOutcome::Hit))
        }
    }

    fn report(&self, outcome: ShotOutcome) -> ShotReport {
        ShotReport {
            outcome,
            vessels_alive: self.vessels_alive,
        }
    }

    /// Whether `coord` already resolved to a hit or a miss.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        matches!(self.cell_state(coord), Some(CellState::Hit | CellState::Miss))
    }

    /// State of the cell at `coord`, `None` when off the board.
    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        let (row, col) = locate(coord)?;
        Some(self.state_at(row, col))
    }

    fn state_at(&self, row: usize, col: usize) -> CellState {
        let is = |mask: &BB| mask.get(row, col).unwrap_or(false);
        if is(&self.hits) {
            CellState::Hit
        } else if is(&self.misses) {
            CellState::Miss
        } else if is(&self.ship_map) {
            CellState::Occupied
        } else if is(&self.blocked) {
            CellState::Blocked
        } else {
            CellState::Empty
        }
    }

    /// All cells, indexed `[y][x]`.
    pub fn cell_states(&self) -> [[CellState; DIM]; DIM] {
        core::array::from_fn(|row| core::array::from_fn(|col| self.state_at(row, col)))
    }

    /// Copy of the cells as seen with `visibility`.
    pub fn snapshot(&self, visibility: Visibility) -> BoardSnapshot {
        let mut cells = self.cell_states();
        if visibility == Visibility::Concealed {
            for cell in cells.iter_mut().flatten() {
                if *cell == CellState::Occupied {
                    *cell = CellState::Empty;
                }
            }
        }
        BoardSnapshot {
            cells,
            vessels_alive: self.vessels_alive,
            visibility,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  phase: {:?},\n  vessels_alive: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  blocked: {:?},\n  vessels: {:?}\n}}",
            self.phase,
            self.vessels_alive,
            self.ship_map,
            self.hits,
            self.misses,
            self.blocked,
            self.vessels
        )
    }
}
