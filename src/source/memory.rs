use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::CandidateItem;
use crate::error::{EngineError, Result};
use crate::source::CandidateSource;

/// Candidate lists held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    lists: HashMap<String, Vec<CandidateItem>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style category registration
    pub fn with_category(mut self, category: impl Into<String>, mut items: Vec<CandidateItem>) -> Self {
        items.sort_by_key(|c| c.rank);
        self.lists.insert(category.into(), items);
        self
    }
}

#[async_trait]
impl CandidateSource for InMemorySource {
    async fn load(&self, category: &str) -> Result<Vec<CandidateItem>> {
        self.lists
            .get(category)
            .cloned()
            .ok_or_else(|| EngineError::UnknownCategory(category.to_string()))
    }

    async fn categories(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.lists.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
