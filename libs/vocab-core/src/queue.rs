//! Due-set selection for a practice session.

use crate::scheduler::estimate_difficulty;
use crate::types::ReviewState;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A vocabulary item offered to the selector, with its prior review
/// state if one exists.
#[derive(Debug, Clone)]
pub struct QueueCandidate {
    pub id: Uuid,
    pub state: Option<ReviewState>,
}

impl QueueCandidate {
    fn is_due(&self, now: DateTime<Utc>) -> bool {
        match &self.state {
            // Never reviewed: always due.
            None => true,
            Some(state) => state.next_review_due <= now,
        }
    }

    fn effective_difficulty(&self) -> f64 {
        self.state
            .as_ref()
            .map_or(0.5, |s| estimate_difficulty(s.success_count, s.failure_count))
    }
}

/// Ids of the items due at `now`, hardest first.
///
/// Ties keep the input order (the sort is stable). An empty result is a
/// valid terminal state meaning nothing is currently due.
pub fn select_due(candidates: &[QueueCandidate], now: DateTime<Utc>) -> Vec<Uuid> {
    let mut due: Vec<&QueueCandidate> =
        candidates.iter().filter(|c| c.is_due(now)).collect();
    due.sort_by(|a, b| {
        b.effective_difficulty()
            .partial_cmp(&a.effective_difficulty())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    due.into_iter().map(|c| c.id).collect()
}
