/// Round configuration - compiled-in defaults, overridable through the constructor
use anyhow::{ensure, Result};
use std::time::Duration;

pub const DEFAULT_HOLE_COUNT: usize = 9;
pub const DEFAULT_ROUND_DURATION: u32 = 15;
pub const DEFAULT_ACTIVATION_INTERVAL: Duration = Duration::from_millis(2000);
pub const DEFAULT_COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of holes in the grid
    pub hole_count: usize,
    /// Length of a round in countdown ticks (seconds)
    pub round_duration: u32,
    /// Delay between two mole activations
    pub activation_interval: Duration,
    /// Delay between two countdown ticks
    pub countdown_interval: Duration,
    /// Fixed seed for the hole picker; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hole_count: DEFAULT_HOLE_COUNT,
            round_duration: DEFAULT_ROUND_DURATION,
            activation_interval: DEFAULT_ACTIVATION_INTERVAL,
            countdown_interval: DEFAULT_COUNTDOWN_INTERVAL,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_hole_count(mut self, hole_count: usize) -> Self {
        self.hole_count = hole_count;
        self
    }

    pub fn with_round_duration(mut self, seconds: u32) -> Self {
        self.round_duration = seconds;
        self
    }

    pub fn with_activation_interval(mut self, interval: Duration) -> Self {
        self.activation_interval = interval;
        self
    }

    pub fn with_countdown_interval(mut self, interval: Duration) -> Self {
        self.countdown_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.hole_count >= 1, "hole_count must be at least 1");
        ensure!(self.round_duration >= 1, "round_duration must be at least 1 second");
        ensure!(!self.activation_interval.is_zero(), "activation_interval must be non-zero");
        ensure!(!self.countdown_interval.is_zero(), "countdown_interval must be non-zero");
        Ok(())
    }
}
