use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One entry of a ranked top-100 list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateItem {
    /// Position in the list (1 = top)
    pub rank: u32,

    /// Canonical display name
    pub title: String,

    /// Alternate acceptable names
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CandidateItem {
    /// Create a candidate without aliases
    pub fn new(rank: u32, title: impl Into<String>) -> Self {
        Self {
            rank,
            title: title.into(),
            aliases: Vec::new(),
        }
    }

    /// Builder-style alias addition
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Check the fields every resolution relies on
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::MissingTitle { rank: self.rank });
        }
        if self.rank == 0 {
            return Err(EngineError::InvalidRank {
                title: self.title.clone(),
            });
        }
        Ok(())
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("#{} {}", self.rank, self.title)
    }
}
