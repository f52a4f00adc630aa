//! Answer-recording orchestration.
//!
//! Ties the scheduler, progress accumulator and achievement evaluator
//! together into the fixed per-answer pipeline the training UI drives:
//! schedule the item, award points against the pre-update streak, roll
//! the streak forward, then check achievements against the updated
//! state. The caller persists both returned snapshots.

use crate::achievements::{check_achievements, AchievementId};
use crate::progress::apply_outcome;
use crate::scheduler::Sm2;
use crate::types::{ProgressState, Quality, ReviewState};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Everything produced by one recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    /// Replacement review state for the answered item.
    pub review: ReviewState,
    /// Replacement progress state, newly earned achievements already
    /// merged in.
    pub progress: ProgressState,
    /// Points this answer added to the total.
    pub points_earned: u64,
    /// Achievements unlocked by this answer, for the caller to surface.
    pub new_achievements: BTreeSet<AchievementId>,
}

/// Record one answer for one item.
///
/// `prior` and `progress` are absent on a learner's very first answer;
/// `vocabulary_count` is the current corpus size, used only by the
/// achievement ladders.
pub fn record_answer(
    scheduler: &Sm2,
    prior: Option<&ReviewState>,
    progress: Option<&ProgressState>,
    correct: bool,
    vocabulary_count: usize,
    now: DateTime<Utc>,
) -> AnswerOutcome {
    let quality = Quality::from_correct(correct);
    let review = scheduler.apply_review(prior, quality, now);

    let base = progress.cloned().unwrap_or_default();
    let mut updated = apply_outcome(&base, correct, now.date_naive());
    let points_earned = updated.total_points - base.total_points;

    let new_achievements = check_achievements(&updated, vocabulary_count);
    updated.achievements.extend(new_achievements.iter().copied());

    debug!(
        correct,
        points_earned,
        streak = updated.current_streak,
        level = updated.level,
        unlocked = new_achievements.len(),
        "recorded answer"
    );

    AnswerOutcome {
        review,
        progress: updated,
        points_earned,
        new_achievements,
    }
}
