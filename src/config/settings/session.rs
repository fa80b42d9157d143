//! Session runtime settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session timing and randomness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Suspense delay before a giveaway result is revealed, in milliseconds
    #[serde(default = "default_drumroll_ms")]
    pub drumroll_ms: u64,

    /// Fixed RNG seed for reproducible draws (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_drumroll_ms() -> u64 {
    2_000
}

impl SessionSettings {
    pub fn drumroll(&self) -> Duration {
        Duration::from_millis(self.drumroll_ms)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            drumroll_ms: default_drumroll_ms(),
            seed: None,
        }
    }
}
