//! SM-2-family review scheduling.
//!
//! Decides when an item is next due from its prior review state and the
//! quality of the most recent recall, and derives item difficulty from
//! the lifetime success/failure counters.

use crate::types::{Quality, ReviewState};
use chrono::{DateTime, Duration, Utc};

/// Difficulty in [0, 1] from lifetime counters: the inverted success
/// rate, 0.5 (neutral) for an item with no history.
pub fn estimate_difficulty(success_count: u32, failure_count: u32) -> f64 {
    let total = success_count + failure_count;
    if total == 0 {
        return 0.5;
    }
    1.0 - success_count as f64 / total as f64
}

/// Result of scheduling an item after a review.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingResult {
    pub next_review_due: DateTime<Utc>,
    pub easiness_factor: f64,
    pub interval_days: i64,
}

/// SM-2 scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub first_interval_days: i64,
    pub second_interval_days: i64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval_days: 1,
            second_interval_days: 6,
        }
    }
}

impl Sm2 {
    /// Compute the next due date and ease factor for an item.
    ///
    /// `prior` is absent for an item answered for the first time.
    /// Repetitions are not tracked across calls; they are re-derived
    /// from the success ratio of the prior counters.
    pub fn schedule(
        &self,
        prior: Option<&ReviewState>,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> SchedulingResult {
        let q = quality.to_value() as f64;
        let repetitions = prior.map_or(0, derive_repetitions);

        let mut easiness = prior.map_or(self.initial_ease, |s| s.easiness_factor);
        easiness += 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
        easiness = easiness.max(self.minimum_ease);

        // Callers do not persist the previous absolute interval, so
        // every call reseeds it at one day before scaling by ease.
        // See DESIGN.md on interval continuity.
        let interval_days = if quality.is_recall() {
            match repetitions {
                0 => self.first_interval_days,
                1 => self.second_interval_days,
                _ => easiness.round() as i64,
            }
        } else {
            // Lapse: the item must be seen again tomorrow.
            self.first_interval_days
        };

        SchedulingResult {
            next_review_due: now + Duration::days(interval_days),
            easiness_factor: easiness,
            interval_days,
        }
    }

    /// Single update path for `ReviewState`: schedules the next review
    /// and bumps the lifetime counters, so the derived difficulty can
    /// never drift from them.
    pub fn apply_review(
        &self,
        prior: Option<&ReviewState>,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> ReviewState {
        let result = self.schedule(prior, quality, now);
        let (mut success_count, mut failure_count) =
            prior.map_or((0, 0), |s| (s.success_count, s.failure_count));
        if quality.is_recall() {
            success_count += 1;
        } else {
            failure_count += 1;
        }

        ReviewState {
            success_count,
            failure_count,
            easiness_factor: result.easiness_factor,
            next_review_due: result.next_review_due,
            last_reviewed_at: Some(now),
        }
    }
}

/// Repetition count derived from the prior success ratio:
/// `floor(s / (s + f + 1) * 5)`.
fn derive_repetitions(state: &ReviewState) -> u32 {
    let total = state.success_count + state.failure_count + 1;
    (state.success_count as f64 / total as f64 * 5.0).floor() as u32
}
