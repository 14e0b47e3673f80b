#![cfg(feature = "std")]

//! Text rendering of board snapshots. Reads snapshots only; nothing in the
//! engine depends on it.

use std::fmt;
use std::string::String;

use crate::engine::board::{BoardSnapshot, CellState};

/// Column label for index `col`: `A`, `B`, ...
pub fn column_label(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// Symbol used for a cell in the text grid.
pub fn cell_symbol(cell: CellState) -> char {
    match cell {
        CellState::Empty => '.',
        CellState::Occupied => 'O',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Blocked => '*',
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.dimension() {
            write!(f, " {}", column_label(c))?;
        }
        for (y, row) in self.rows().iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:2} ", y + 1)?;
            for cell in row {
                write!(f, " {}", cell_symbol(*cell))?;
            }
        }
        Ok(())
    }
}

/// The player's own board (left) next to what they know of the opponent's
/// board (right), with a legend underneath.
pub fn render_side_by_side(own: &BoardSnapshot, opponent: &BoardSnapshot) -> String {
    let left = own.to_string();
    let right = opponent.to_string();
    let width = left.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$}    {}\n",
        format!("Your fleet ({} afloat)", own.vessels_alive()),
        format!("Enemy waters ({} afloat)", opponent.vessels_alive()),
        width = width
    ));
    for (l, r) in left.lines().zip(right.lines()) {
        out.push_str(&format!("{:<width$}    {}\n", l, r, width = width));
    }
    out.push_str("Legend: O=vessel  X=hit  T=miss  *=known empty  .=water/unknown");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Coordinate, Orientation, Vessel, Visibility};

    fn board_with_vessel() -> Board {
        let mut board = Board::new();
        board
            .place_vessel(Vessel::new(2, Coordinate::new(0, 0), Orientation::Horizontal).unwrap())
            .unwrap();
        board
    }

    #[test]
    fn renders_revealed_board() {
        let text = board_with_vessel().snapshot(Visibility::Revealed).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "    A B C D E F G H I J");
        assert_eq!(lines[1], " 1  O O . . . . . . . .");
    }

    #[test]
    fn concealed_board_hides_vessels() {
        let mut board = board_with_vessel();
        board.fire_at(Coordinate::new(0, 0)).unwrap();
        let text = board.snapshot(Visibility::Concealed).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], " 1  X . . . . . . . . .");
        assert!(!text.contains('O'));
    }

    #[test]
    fn side_by_side_has_both_boards() {
        let board = board_with_vessel();
        let text = render_side_by_side(
            &board.snapshot(Visibility::Revealed),
            &board.snapshot(Visibility::Concealed),
        );
        assert!(text.starts_with("Your fleet (1 afloat)"));
        assert!(text.contains("Enemy waters (1 afloat)"));
        assert_eq!(text.lines().count(), 13);
    }
}
