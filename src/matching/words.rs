use serde::{Deserialize, Serialize};

use crate::matching::{distance, normalize};

/// Edits tolerated per word unless configured otherwise
pub const DEFAULT_MAX_DISTANCE_PER_WORD: usize = 1;

/// Word-aligned fuzzy match of a guess against a title.
///
/// Both sides are normalized. Word counts must be equal and every
/// positional word pair must be within `max_distance_per_word` edits.
/// A guess or title that normalizes to nothing never matches.
pub fn words_match(guess: &str, title: &str, max_distance_per_word: usize) -> bool {
    let guess = normalize(guess);
    let title = normalize(title);
    normalized_words_match(&guess, &title, max_distance_per_word)
}

/// Same as [`words_match`] for inputs that are already normalized
pub(crate) fn normalized_words_match(guess: &str, title: &str, max_distance_per_word: usize) -> bool {
    // "" == "" must not count as a hit
    if guess.is_empty() || title.is_empty() {
        return false;
    }

    if guess == title {
        return true;
    }

    let guess_words: Vec<&str> = guess.split_whitespace().collect();
    let title_words: Vec<&str> = title.split_whitespace().collect();

    if guess_words.len() != title_words.len() {
        return false;
    }

    guess_words
        .iter()
        .zip(&title_words)
        .all(|(g, t)| distance(g, t) <= max_distance_per_word)
}

/// Matching tolerance used by the resolution engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    pub max_distance_per_word: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            max_distance_per_word: DEFAULT_MAX_DISTANCE_PER_WORD,
        }
    }
}

impl MatchPolicy {
    pub fn new(max_distance_per_word: usize) -> Self {
        Self { max_distance_per_word }
    }

    /// Match raw (unnormalized) text
    pub fn matches(&self, guess: &str, title: &str) -> bool {
        words_match(guess, title, self.max_distance_per_word)
    }

    /// Match a pre-normalized guess against raw title text
    pub(crate) fn matches_normalized(&self, normalized_guess: &str, title: &str) -> bool {
        normalized_words_match(normalized_guess, &normalize(title), self.max_distance_per_word)
    }
}
