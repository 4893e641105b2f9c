//! Configuration for a story session.

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// RNG seed for reproducible scenario draws.
    pub seed: u64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl StoryConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
