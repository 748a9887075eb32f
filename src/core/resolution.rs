use serde::{Deserialize, Serialize};

use crate::core::CandidateItem;

/// How a resolution was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchVia {
    /// Guess matched a canonical title
    Title,
    /// Guess matched an alias (no title hit existed)
    Alias,
    /// Every matching item was already claimed this session
    AlreadyGuessed,
    /// Nothing in the list matched
    NoMatch,
    /// Guess normalized to nothing
    EmptyGuess,
}

/// Outcome of resolving one guess against a candidate list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub matched: bool,

    /// Rank of the resolved item, absent when unmatched
    pub rank: Option<u32>,

    /// Resolved title, or the original guess when unmatched
    pub canonical_title: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    pub via: MatchVia,
}

impl ResolutionResult {
    /// Unmatched result carrying the raw guess
    pub fn unmatched(guess: &str, via: MatchVia) -> Self {
        Self {
            matched: false,
            rank: None,
            canonical_title: guess.to_string(),
            aliases: Vec::new(),
            via,
        }
    }

    /// Matched result for a candidate
    pub fn matched(item: &CandidateItem, via: MatchVia) -> Self {
        Self {
            matched: true,
            rank: Some(item.rank),
            canonical_title: item.title.clone(),
            aliases: item.aliases.clone(),
            via,
        }
    }

    /// True when the guess only hit items claimed earlier in the session
    pub fn is_already_guessed(&self) -> bool {
        self.via == MatchVia::AlreadyGuessed
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.rank {
            Some(rank) => format!("{} (#{}) {:?}", self.canonical_title, rank, self.via),
            None => format!("{} {:?}", self.canonical_title, self.via),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_keeps_raw_guess() {
        let res = ResolutionResult::unmatched("Snp Dgg!", MatchVia::NoMatch);
        assert!(!res.matched);
        assert_eq!(res.rank, None);
        assert_eq!(res.canonical_title, "Snp Dgg!");
        assert!(res.aliases.is_empty());
    }

    #[test]
    fn test_matched_copies_candidate() {
        let item = CandidateItem::new(12, "Apple Inc").with_alias("Apple");
        let res = ResolutionResult::matched(&item, MatchVia::Alias);
        assert!(res.matched);
        assert_eq!(res.rank, Some(12));
        assert_eq!(res.canonical_title, "Apple Inc");
        assert_eq!(res.aliases, vec!["Apple".to_string()]);
        assert_eq!(res.display(), "Apple Inc (#12) Alias");
    }

    #[test]
    fn test_serialization_shape() {
        let res = ResolutionResult::unmatched("x", MatchVia::AlreadyGuessed);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["via"], "already_guessed");
        assert_eq!(json["rank"], serde_json::Value::Null);
    }
}
