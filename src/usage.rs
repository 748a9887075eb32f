use std::collections::HashMap;

/// How often each canonical title has been guessed, per category.
///
/// Fed by callers after a match; the resolution engine never reads it.
pub trait UsageCounter {
    fn increment(&mut self, category: &str, title: &str);

    fn count(&self, category: &str, title: &str) -> u64;
}

/// HashMap-backed counter keyed by lower-cased title
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsageCounter {
    counts: HashMap<(String, String), u64>,
}

impl InMemoryUsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(category: &str, title: &str) -> (String, String) {
        (category.to_string(), title.to_lowercase())
    }

    /// Most guessed titles in a category, highest count first
    pub fn top(&self, category: &str, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .filter(|((c, _), _)| c == category)
            .map(|((_, t), &n)| (t.clone(), n))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}

impl UsageCounter for InMemoryUsageCounter {
    fn increment(&mut self, category: &str, title: &str) {
        *self.counts.entry(Self::key(category, title)).or_insert(0) += 1;
    }

    fn count(&self, category: &str, title: &str) -> u64 {
        self.counts.get(&Self::key(category, title)).copied().unwrap_or(0)
    }
}
