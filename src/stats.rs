//! Score math around finished rounds: maximum score, percentile against
//! past plays, and daily streaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CandidateItem;

/// Best achievable score: the `budget` largest ranks in the list
pub fn max_score(candidates: &[CandidateItem], budget: u32) -> u32 {
    let mut ranks: Vec<u32> = candidates.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.into_iter().take(budget as usize).sum()
}

/// Percentage (0-100) of past scores strictly below `score`.
///
/// With no history every score is a top score.
pub fn percentile(score: u32, distribution: &[u32]) -> f64 {
    if distribution.is_empty() {
        return 100.0;
    }
    let below = distribution.iter().filter(|&&s| s < score).count();
    below as f64 / distribution.len() as f64 * 100.0
}

pub fn average(distribution: &[u32]) -> Option<f64> {
    if distribution.is_empty() {
        return None;
    }
    let total: u64 = distribution.iter().map(|&s| u64::from(s)).sum();
    Some(total as f64 / distribution.len() as f64)
}

/// Per-player totals and daily streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_plays: u32,
    pub total_score: u64,
    pub last_played_at: Option<DateTime<Utc>>,
}

impl PlayerStats {
    /// Fold a finished round into the totals.
    ///
    /// Playing again the same day keeps the streak, the next day extends
    /// it, and any longer gap restarts it at 1.
    pub fn record_play(&mut self, score: u32, now: DateTime<Utc>) {
        let streak = match self.last_played_at {
            Some(last) => match (now.date_naive() - last.date_naive()).num_days() {
                0 => self.current_streak.max(1),
                1 => self.current_streak + 1,
                _ => 1,
            },
            None => 1,
        };

        self.current_streak = streak;
        self.max_streak = self.max_streak.max(streak);
        self.total_plays += 1;
        self.total_score += u64::from(score);
        self.last_played_at = Some(now);
    }

    pub fn average_score(&self) -> Option<f64> {
        if self.total_plays == 0 {
            None
        } else {
            Some(self.total_score as f64 / f64::from(self.total_plays))
        }
    }
}
