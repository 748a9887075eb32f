use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::core::{CandidateItem, Guess, MatchVia};
use crate::engine::resolve_with;
use crate::error::Result;
use crate::matching::{normalize, MatchPolicy};

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Recorded, one attempt consumed
    Accepted(Guess),
    /// Same item as an earlier guess; nothing consumed
    Repeat,
    /// Normalized to nothing; nothing consumed
    Rejected,
    /// No attempts left
    GameOver,
}

/// State of one round, owned and threaded by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub category: String,
    pub guesses: Vec<Guess>,
    pub remaining_guesses: u32,
    pub is_game_over: bool,
    #[serde(default)]
    policy: MatchPolicy,
}

impl GameSession {
    pub fn new(category: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            category: category.into(),
            guesses: Vec::new(),
            remaining_guesses: config.guess_budget,
            is_game_over: config.guess_budget == 0,
            policy: config.match_policy(),
        }
    }

    /// Canonical titles of all earlier guesses, oldest first
    pub fn previous_titles(&self) -> Vec<&str> {
        self.guesses.iter().map(|g| g.original_title.as_str()).collect()
    }

    /// Resolve and record a guess
    pub fn submit_guess(&mut self, raw: &str, candidates: &[CandidateItem]) -> Result<GuessOutcome> {
        if self.is_game_over || self.remaining_guesses == 0 {
            return Ok(GuessOutcome::GameOver);
        }

        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Ok(GuessOutcome::Rejected);
        }

        let repeated = self
            .guesses
            .iter()
            .any(|g| self.policy.matches_normalized(&normalized, &g.original_title));
        if repeated {
            tracing::info!("Repeat guess {:?} in {}", raw, self.category);
            return Ok(GuessOutcome::Repeat);
        }

        let resolution = resolve_with(self.policy, raw, candidates, &self.previous_titles())?;
        if resolution.via == MatchVia::AlreadyGuessed {
            tracing::info!("Guess {:?} only hits claimed items", raw);
            return Ok(GuessOutcome::Repeat);
        }

        let guess = Guess::from_resolution(raw, &resolution);
        self.guesses.push(guess.clone());
        self.remaining_guesses -= 1;
        self.is_game_over = self.remaining_guesses == 0;

        tracing::info!(
            "{} -> {} ({} left)",
            raw,
            resolution.display(),
            self.remaining_guesses
        );

        Ok(GuessOutcome::Accepted(guess))
    }

    /// Sum of ranks of guesses that hit the list
    pub fn score(&self) -> u32 {
        self.guesses.iter().map(Guess::points).sum()
    }

    pub fn hits(&self) -> usize {
        self.guesses.iter().filter(|g| g.is_in_top100).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<CandidateItem> {
        vec![
            CandidateItem::new(1, "The Godfather"),
            CandidateItem::new(12, "Apple Inc").with_alias("Apple"),
            CandidateItem::new(45, "Jaws"),
            CandidateItem::new(97, "Alien").with_alias("Aliens"),
        ]
    }

    fn session() -> GameSession {
        GameSession::new("movies", &GameConfig::default())
    }

    fn accepted(outcome: GuessOutcome) -> Guess {
        match outcome {
            GuessOutcome::Accepted(guess) => guess,
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.category, "movies");
        assert_eq!(s.remaining_guesses, 4);
        assert!(!s.is_game_over);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_hit_and_miss_consume_attempts() {
        let mut s = session();
        let candidates = movies();

        let hit = accepted(s.submit_guess("Jaw", &candidates).unwrap());
        assert_eq!(hit.rank, Some(45));
        assert_eq!(hit.original_title, "Jaws");

        let miss = accepted(s.submit_guess("Titanic", &candidates).unwrap());
        assert!(!miss.is_in_top100);
        assert_eq!(miss.original_title, "Titanic");

        assert_eq!(s.remaining_guesses, 2);
        assert_eq!(s.score(), 45);
        assert_eq!(s.hits(), 1);
        assert_eq!(s.previous_titles(), vec!["Jaws", "Titanic"]);
    }

    #[test]
    fn test_repeat_spelling_is_free() {
        let mut s = session();
        let candidates = movies();

        accepted(s.submit_guess("Jaws", &candidates).unwrap());
        assert_eq!(s.submit_guess("JAWS!", &candidates).unwrap(), GuessOutcome::Repeat);
        assert_eq!(s.submit_guess("Jaw", &candidates).unwrap(), GuessOutcome::Repeat);
        assert_eq!(s.remaining_guesses, 3);
    }

    #[test]
    fn test_alias_of_claimed_item_is_repeat() {
        let mut s = session();
        let candidates = movies();

        accepted(s.submit_guess("Apple Inc", &candidates).unwrap());
        // word count differs from "apple inc", so only the engine's claim check catches it
        assert_eq!(s.submit_guess("apple", &candidates).unwrap(), GuessOutcome::Repeat);
        assert_eq!(s.remaining_guesses, 3);
    }

    #[test]
    fn test_repeated_miss_is_free() {
        let mut s = session();
        let candidates = movies();

        accepted(s.submit_guess("Titanic", &candidates).unwrap());
        assert_eq!(s.submit_guess("titanic", &candidates).unwrap(), GuessOutcome::Repeat);
        assert_eq!(s.remaining_guesses, 3);
    }

    #[test]
    fn test_empty_guess_rejected() {
        let mut s = session();
        assert_eq!(s.submit_guess("  ?? ", &movies()).unwrap(), GuessOutcome::Rejected);
        assert_eq!(s.remaining_guesses, 4);
    }

    #[test]
    fn test_game_over_after_budget() {
        let mut s = session();
        let candidates = movies();

        for guess in ["The Godfather", "Jaws", "Alien", "Apple Inc"] {
            accepted(s.submit_guess(guess, &candidates).unwrap());
        }
        assert!(s.is_game_over);
        assert_eq!(s.remaining_guesses, 0);
        assert_eq!(s.score(), 1 + 45 + 97 + 12);
        assert_eq!(s.submit_guess("Heat", &candidates).unwrap(), GuessOutcome::GameOver);
        assert_eq!(s.guesses.len(), 4);
    }

    #[test]
    fn test_bad_candidates_propagate() {
        let mut s = session();
        let broken = vec![CandidateItem::new(1, "")];
        assert!(s.submit_guess("Jaws", &broken).is_err());
        assert_eq!(s.remaining_guesses, 4);
    }

    #[test]
    fn test_saved_session_without_policy_loads() {
        let json = r#"{
            "category": "movies",
            "guesses": [{"item": "jaw", "original_title": "Jaws", "rank": 45, "is_in_top100": true}],
            "remaining_guesses": 3,
            "is_game_over": false
        }"#;
        let mut s: GameSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.policy, MatchPolicy::default());
        assert_eq!(s.score(), 45);
        assert_eq!(s.submit_guess("Jaws", &movies()).unwrap(), GuessOutcome::Repeat);
    }

    #[test]
    fn test_session_survives_serialization() {
        let mut s = session();
        accepted(s.submit_guess("Alien", &movies()).unwrap());
        let restored: GameSession = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!(restored, s);
    }

    #[test]
    fn test_zero_budget_session_is_over() {
        let config = GameConfig {
            guess_budget: 0,
            ..GameConfig::default()
        };
        let mut s = GameSession::new("movies", &config);
        assert!(s.is_game_over);
        assert_eq!(s.submit_guess("Jaws", &movies()).unwrap(), GuessOutcome::GameOver);
    }
}
