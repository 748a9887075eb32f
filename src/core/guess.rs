use serde::{Deserialize, Serialize};

use crate::core::ResolutionResult;

/// A recorded round of a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// Text as the player typed it
    pub item: String,

    /// Canonical title, or the raw text when the guess missed
    pub original_title: String,

    #[serde(default)]
    pub rank: Option<u32>,

    pub is_in_top100: bool,
}

impl Guess {
    /// Build the round record from an engine resolution
    pub fn from_resolution(raw: impl Into<String>, resolution: &ResolutionResult) -> Self {
        Self {
            item: raw.into(),
            original_title: resolution.canonical_title.clone(),
            rank: resolution.rank,
            is_in_top100: resolution.matched,
        }
    }

    /// Points this guess is worth (its rank when it hit the list)
    pub fn points(&self) -> u32 {
        if self.is_in_top100 {
            self.rank.unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CandidateItem, MatchVia};

    #[test]
    fn test_from_matched_resolution() {
        let item = CandidateItem::new(97, "Apple");
        let res = ResolutionResult::matched(&item, MatchVia::Title);
        let guess = Guess::from_resolution("apple", &res);

        assert_eq!(guess.item, "apple");
        assert_eq!(guess.original_title, "Apple");
        assert_eq!(guess.rank, Some(97));
        assert!(guess.is_in_top100);
        assert_eq!(guess.points(), 97);
    }

    #[test]
    fn test_missed_guess_scores_nothing() {
        let res = ResolutionResult::unmatched("Zzz", MatchVia::NoMatch);
        let guess = Guess::from_resolution("Zzz", &res);
        assert_eq!(guess.original_title, "Zzz");
        assert_eq!(guess.points(), 0);
    }
}
