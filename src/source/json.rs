use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::CandidateItem;
use crate::error::{EngineError, Result};
use crate::source::CandidateSource;

/// Candidate lists stored in one JSON file.
///
/// Layout: `{ "<category>": [ { "rank": 1, "title": "...", "aliases": [...] } ] }`.
/// The file is re-read on every load so edits show up without a restart.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, Vec<CandidateItem>>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| EngineError::Source {
            source_name: self.name().to_string(),
            message: format!("{}: {}", self.path.display(), e),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl CandidateSource for JsonFileSource {
    async fn load(&self, category: &str) -> Result<Vec<CandidateItem>> {
        let mut lists = self.read_all().await?;
        let mut items = lists
            .remove(category)
            .ok_or_else(|| EngineError::UnknownCategory(category.to_string()))?;

        items.sort_by_key(|c| c.rank);
        tracing::debug!("{} candidates in '{}'", items.len(), category);
        Ok(items)
    }

    async fn categories(&self) -> Result<Vec<String>> {
        Ok(self.read_all().await?.into_keys().collect())
    }

    fn name(&self) -> &str {
        "json"
    }
}
