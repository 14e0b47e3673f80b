//! Fixed game dimensions and per-match settings.

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

pub const BOARD_SIZE: u8 = 10;
pub const MAX_VESSEL_LENGTH: usize = 3;
pub const FLEET_SIZE: usize = 7;

/// Vessel lengths placed on every board, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel segments in the fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Runtime settings for setting up and playing one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Fix the RNG seed for reproducible matches.
    pub seed: Option<u64>,
    /// Random anchors tried per vessel before the fleet is restarted.
    pub max_placement_attempts: usize,
    /// Fresh boards tried before fleet generation gives up.
    pub max_fleet_restarts: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_placement_attempts: 200,
            max_fleet_restarts: 50,
        }
    }
}

impl MatchConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// RNG for this match: seeded when a seed is configured, otherwise
    /// drawn from the thread RNG.
    #[cfg(feature = "std")]
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}
