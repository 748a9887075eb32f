use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::matching::{MatchPolicy, DEFAULT_MAX_DISTANCE_PER_WORD};

/// Game and collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edits tolerated per word when matching
    pub max_distance_per_word: usize,

    /// Guesses per round
    pub guess_budget: u32,

    /// Category used when none is requested
    pub default_category: String,

    /// Extra attempts after a failed candidate load
    pub source_retries: u32,

    /// Delay before the first retry, doubled after each failure
    pub source_retry_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_distance_per_word: DEFAULT_MAX_DISTANCE_PER_WORD,
            guess_budget: 4,
            default_category: "movies".to_string(),
            source_retries: 2,
            source_retry_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.guess_budget == 0 {
            return Err(EngineError::Config("guess_budget must be at least 1".to_string()));
        }
        if self.default_category.trim().is_empty() {
            return Err(EngineError::Config("default_category must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.max_distance_per_word)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.source_retry_delay_ms)
    }
}
