//! Game configuration.
//!
//! The rules themselves are fixed (four players, one board, one deck).
//! What a host can tune is how the deck is seeded and how patient the
//! engine is with invalid answers from a decision provider.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deck RNG seed.
    /// `None` picks a random seed; the chosen seed is logged and exposed
    /// through `GameState::seed()`.
    pub seed: Option<u64>,

    /// How many times a single decision point is asked before an invalid
    /// answer is reported as a no-op (values below 1 behave as 1).
    pub decision_attempts: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            decision_attempts: 3,
        }
    }
}

impl GameConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom decision attempts.
    #[must_use]
    pub fn with_decision_attempts(mut self, attempts: u8) -> Self {
        self.decision_attempts = attempts;
        self
    }

    /// Effective number of attempts per decision point (at least 1).
    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.decision_attempts.max(1)
    }
}
