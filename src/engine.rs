use std::collections::HashSet;

use crate::core::{CandidateItem, MatchVia, ResolutionResult};
use crate::error::{EngineError, Result};
use crate::matching::{normalize, MatchPolicy};

/// Resolve a guess with the default policy (one edit per word).
///
/// Stateless: the caller passes the session's previously resolved
/// canonical titles on every call.
pub fn resolve<S: AsRef<str>>(
    guess: &str,
    candidates: &[CandidateItem],
    previous_guesses: &[S],
) -> Result<ResolutionResult> {
    resolve_with(MatchPolicy::default(), guess, candidates, previous_guesses)
}

/// Resolve a guess against a ranked list.
///
/// Titles are searched first; aliases only when no title matched. Items
/// whose title matches a previous guess are dropped, then the lowest rank
/// wins. Candidates may arrive in any order.
pub fn resolve_with<S: AsRef<str>>(
    policy: MatchPolicy,
    guess: &str,
    candidates: &[CandidateItem],
    previous_guesses: &[S],
) -> Result<ResolutionResult> {
    let normalized = normalize(guess);
    if normalized.is_empty() {
        tracing::debug!("Empty guess {:?}", guess);
        return Ok(ResolutionResult::unmatched(guess, MatchVia::EmptyGuess));
    }

    validate_candidates(candidates)?;

    let title_matches: Vec<&CandidateItem> = candidates
        .iter()
        .filter(|c| policy.matches_normalized(&normalized, &c.title))
        .collect();

    let (match_set, via) = if !title_matches.is_empty() {
        (title_matches, MatchVia::Title)
    } else {
        let alias_matches: Vec<&CandidateItem> = candidates
            .iter()
            .filter(|c| c.aliases.iter().any(|a| policy.matches_normalized(&normalized, a)))
            .collect();
        (alias_matches, MatchVia::Alias)
    };

    tracing::debug!(
        "Guess {:?}: {} candidate(s) via {:?}",
        normalized,
        match_set.len(),
        via
    );

    if match_set.is_empty() {
        return Ok(ResolutionResult::unmatched(guess, MatchVia::NoMatch));
    }

    let previous: Vec<String> = previous_guesses
        .iter()
        .map(|p| normalize(p.as_ref()))
        .filter(|p| !p.is_empty())
        .collect();

    let best = match_set
        .into_iter()
        .filter(|c| {
            let claimed = previous.iter().any(|p| policy.matches_normalized(p, &c.title));
            if claimed {
                tracing::debug!("Skipping {} (already guessed)", c.display_name());
            }
            !claimed
        })
        .min_by_key(|c| c.rank);

    match best {
        Some(item) => {
            tracing::debug!("Resolved {:?} to {}", guess, item.display_name());
            Ok(ResolutionResult::matched(item, via))
        }
        None => Ok(ResolutionResult::unmatched(guess, MatchVia::AlreadyGuessed)),
    }
}

/// Fail on candidate lists the source should never have produced
pub fn validate_candidates(candidates: &[CandidateItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for item in candidates {
        item.validate()?;
        if !seen.insert(item.rank) {
            return Err(EngineError::DuplicateRank { rank: item.rank });
        }
    }
    Ok(())
}
