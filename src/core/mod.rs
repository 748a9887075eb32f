pub mod candidate;
pub mod guess;
pub mod resolution;

pub use candidate::CandidateItem;
pub use guess::Guess;
pub use resolution::{MatchVia, ResolutionResult};
