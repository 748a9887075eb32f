//! Text matching primitives: normalization, edit distance and the
//! word-aligned matcher built on both.

pub mod distance;
pub mod normalize;
pub mod words;

pub use distance::distance;
pub use normalize::normalize;
pub use words::{words_match, MatchPolicy, DEFAULT_MAX_DISTANCE_PER_WORD};
