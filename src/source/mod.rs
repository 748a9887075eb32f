pub mod json;
pub mod memory;

use async_trait::async_trait;
use std::time::Duration;

use crate::core::CandidateItem;
use crate::error::Result;

pub use json::JsonFileSource;
pub use memory::InMemorySource;

/// Trait for ranked-list providers (files, databases, remote stores)
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Load the ranked list for a category, ascending by rank
    async fn load(&self, category: &str) -> Result<Vec<CandidateItem>>;

    /// Categories this source can serve
    async fn categories(&self) -> Result<Vec<String>>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Load a category, retrying transient failures with exponential backoff.
///
/// `retries` counts attempts after the first; the delay doubles each time.
pub async fn load_with_retry(
    source: &dyn CandidateSource,
    category: &str,
    retries: u32,
    initial_delay: Duration,
) -> Result<Vec<CandidateItem>> {
    let mut delay = initial_delay;
    let mut attempt = 0;

    loop {
        match source.load(category).await {
            Ok(items) => {
                tracing::info!(
                    "Loaded {} candidates for '{}' from {}",
                    items.len(),
                    category,
                    source.name()
                );
                return Ok(items);
            }
            Err(e) if e.is_transient() && attempt < retries => {
                attempt += 1;
                tracing::warn!(
                    "Source {} failed ({}), retry {}/{} in {:?}",
                    source.name(),
                    e,
                    attempt,
                    retries,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay = next_delay(delay);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Doubled backoff delay, pinned at `Duration::MAX` instead of overflowing
fn next_delay(delay: Duration) -> Duration {
    delay.saturating_mul(2)
}
