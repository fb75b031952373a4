use crate::core::Randomizer;
use crate::types::{HARD_DROP_LOCK_MS, POLL_MS};

/// Runtime knobs for a [`crate::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the piece generator.
    pub seed: u32,
    pub randomizer: Randomizer,
    /// How often the front-end samples wall time and advances the session.
    pub poll_ms: u32,
    /// Delay between a hard drop and the step that locks the piece.
    pub hard_drop_lock_ms: u32,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn with_poll_ms(mut self, poll_ms: u32) -> Self {
        self.poll_ms = poll_ms.max(1);
        self
    }

    pub fn with_hard_drop_lock_ms(mut self, ms: u32) -> Self {
        self.hard_drop_lock_ms = ms;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            randomizer: Randomizer::Uniform,
            poll_ms: POLL_MS,
            hard_drop_lock_ms: HARD_DROP_LOCK_MS,
        }
    }
}
