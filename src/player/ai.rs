use rand::{rngs::SmallRng, Rng};

use crate::engine::{board::BoardSnapshot, coord::Coordinate};

use super::Player;

/// Automated opponent that fires at a uniformly random cell it has not
/// already hit or missed. Blocked cells stay in the pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &BoardSnapshot,
    ) -> Option<Coordinate> {
        let open = opponent.untargeted().count();
        if open == 0 {
            return None;
        }
        let pick = rng.random_range(0..open);
        opponent.untargeted().nth(pick)
    }
}
