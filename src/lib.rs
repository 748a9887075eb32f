//! # On the Dot guess engine
//!
//! Resolves free-text guesses against a category's top-100 list:
//! - Normalization that ignores case, punctuation and spacing
//! - Word-aligned Levenshtein matching (one typo per word by default)
//! - Title-over-alias precedence and lowest-rank tie-breaking
//! - Per-session de-duplication of items guessed under another spelling
//!
//! Around the pure engine sit the caller-side pieces of a round: an
//! explicit [`GameSession`] value, score and streak math, and async
//! candidate sources with retry.
//!
//! ## Example Usage
//!
//! ```rust
//! use onthedot_engine::{resolve, CandidateItem};
//!
//! let candidates = vec![
//!     CandidateItem::new(8, "Snoop Dogg"),
//!     CandidateItem::new(3, "Taylor Swift"),
//! ];
//!
//! let result = resolve("snop dog", &candidates, &["Taylor Swift"]).unwrap();
//! assert!(result.matched);
//! assert_eq!(result.rank, Some(8));
//! assert_eq!(result.canonical_title, "Snoop Dogg");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod matching;
pub mod session;
pub mod source;
pub mod stats;
pub mod usage;

// Re-export primary types
pub use config::GameConfig;
pub use crate::core::{CandidateItem, Guess, MatchVia, ResolutionResult};
pub use engine::{resolve, resolve_with, validate_candidates};
pub use error::{EngineError, Result};
pub use matching::{distance, normalize, words_match, MatchPolicy};
pub use session::{GameSession, GuessOutcome};
pub use source::{load_with_retry, CandidateSource, InMemorySource, JsonFileSource};
pub use usage::{InMemoryUsageCounter, UsageCounter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
