#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::engine::{
    board::BoardSnapshot,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
    game::TurnOutcome,
};
use crate::ui::{column_label, render_side_by_side};

use super::Player;

/// Human player reading targets from `input` and writing prompts and
/// results to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    // Output is best effort: a closed terminal shows up as EOF on input.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Human readable name of a cell, e.g. `A5` for `(0, 4)`.
pub fn coord_to_string(coord: Coordinate) -> String {
    match u8::try_from(coord.x) {
        Ok(x) if x < 26 => format!("{}{}", column_label(x as usize), coord.y + 1),
        _ => format!("{}", coord),
    }
}

/// Parse a target such as `A5` or `j10` (a column letter followed by a
/// 1-based row number), or two 0-based integers `x y`. Only the syntax is
/// checked; the board reports targets that fall outside it.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return parse_xy(input);
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let row_str = chars.as_str().trim();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: i32 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    let x = (col_ch as u8 - b'A') as i32;
    Ok(Coordinate::new(x, row.saturating_sub(1)))
}

fn parse_xy(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [x, y] = parts.as_slice() else {
        return Err(format!("Expected two numbers 'x y', got '{}'", input));
    };
    let x: i32 = x
        .parse()
        .map_err(|_| format!("Invalid x '{}' - must be a number", x))?;
    let y: i32 = y
        .parse()
        .map_err(|_| format!("Invalid y '{}' - must be a number", y))?;
    Ok(Coordinate::new(x, y))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &BoardSnapshot,
    ) -> Option<Coordinate> {
        loop {
            self.say(format_args!("\nEnter target (e.g. A5 or 0 4, 'help', 'quit'): "));
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return None;
            }
            if line.eq_ignore_ascii_case("help") {
                self.say(format_args!("{}", TARGETING_HELP));
                continue;
            }
            match parse_coord(&line) {
                Ok(coord) => return Some(coord),
                Err(e) => {
                    self.say(format_args!("✗ Invalid coordinate: {}\n", e));
                    self.say(format_args!("   Example: A5, B10, J1 or 0 4\n"));
                }
            }
        }
    }

    fn handle_turn_start(&mut self, own: &BoardSnapshot, opponent: &BoardSnapshot) {
        self.say(format_args!("\n{}\n", render_side_by_side(own, opponent)));
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: &BoardError) {
        match error {
            BoardError::AlreadyTargeted(_) => self.say(format_args!(
                "✗ You already fired at {}! Choose another target.\n",
                coord_to_string(target)
            )),
            BoardError::OutOfBounds(_) => self.say(format_args!(
                "✗ {} is outside the board (A-J, 1-10).\n",
                coord_to_string(target)
            )),
            other => self.say(format_args!("✗ {}\n", other)),
        }
    }

    fn handle_shot_result(&mut self, outcome: &TurnOutcome) {
        let at = coord_to_string(outcome.target);
        match outcome.report.outcome {
            ShotOutcome::Hit => {
                self.say(format_args!("\n🎯 HIT at {}! Fire again.\n", at));
            }
            ShotOutcome::Sunk(vessel) => {
                self.say(format_args!(
                    "\n💥 SUNK! You destroyed a {}-deck vessel at {}. {} left. Fire again.\n",
                    vessel.length(),
                    at,
                    outcome.report.vessels_alive
                ));
            }
            ShotOutcome::Miss => {
                self.say(format_args!("\n💧 Miss at {}.\n", at));
            }
        }
    }

    fn handle_opponent_shot(&mut self, outcome: &TurnOutcome) {
        let at = coord_to_string(outcome.target);
        match outcome.report.outcome {
            ShotOutcome::Hit => {
                self.say(format_args!("⚠️  Enemy hit your vessel at {}\n", at));
            }
            ShotOutcome::Sunk(vessel) => {
                self.say(format_args!(
                    "💀 Enemy sank your {}-deck vessel at {}\n",
                    vessel.length(),
                    at
                ));
            }
            ShotOutcome::Miss => {
                self.say(format_args!("✓ Enemy missed at {}\n", at));
            }
        }
    }

    fn handle_match_end(&mut self, won: bool) {
        if won {
            self.say(format_args!("\nCongratulations, you won!\n"));
        } else {
            self.say(format_args!("\nYou lost. Better luck next time.\n"));
        }
    }
}

const TARGETING_HELP: &str = "
Targeting help
  Format: <COLUMN><ROW>, e.g. A5, B10, J1
      or: <X> <Y> counted from 0, e.g. 0 4 for A5
  Columns: A-J (A is leftmost), rows: 1-10 (1 is topmost)
  Symbols: X = hit, T = miss, * = known empty, . = unknown
  A hit lets you fire again; a miss passes the turn.
  Type 'quit' to leave the game.
";
