//! Core types for the vocabulary review engine.

use crate::achievements::AchievementId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How well the learner recalled an item at review time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    VeryWrong,
    Wrong,
    Hard,
    Correct,
    Perfect,
}

impl Quality {
    /// Convert to the SM-2 quality weight (0-5).
    pub fn to_value(self) -> u8 {
        match self {
            Self::VeryWrong => 0,
            Self::Wrong => 1,
            Self::Hard => 3,
            Self::Correct => 4,
            Self::Perfect => 5,
        }
    }

    /// Create from an SM-2 quality weight.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::VeryWrong),
            1 => Some(Self::Wrong),
            3 => Some(Self::Hard),
            4 => Some(Self::Correct),
            5 => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Map a boolean correctness signal to the quality scale.
    /// Correct -> Correct, wrong -> Wrong; the only mapping the
    /// current presentation modes produce.
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }

    /// A successful recall (quality weight >= 3).
    pub fn is_recall(self) -> bool {
        self.to_value() >= 3
    }
}

/// Per-item review state (one row per learner x item).
///
/// Created on the first answer to an item; every subsequent answer
/// replaces it with the state returned by the scheduler. An item with
/// no `ReviewState` yet is immediately due with neutral difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Lifetime correct answers.
    pub success_count: u32,
    /// Lifetime incorrect answers.
    pub failure_count: u32,
    /// SM-2 ease factor, never below the scheduler's minimum (1.3).
    pub easiness_factor: f64,
    /// Earliest instant the item is eligible for re-presentation.
    pub next_review_due: DateTime<Utc>,
    /// Absent for an item never reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// Difficulty in [0, 1], recomputed from the counters on every read.
    /// 0 = easy, 1 = hard, 0.5 = no history.
    pub fn difficulty_score(&self) -> f64 {
        crate::scheduler::estimate_difficulty(self.success_count, self.failure_count)
    }
}

/// Learner-wide progress state (one row per learner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub total_points: u64,
    /// Consecutive calendar days with at least one practiced item.
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Derived from `total_points`; see [`crate::progress::level_for_points`].
    pub level: u32,
    /// Append-only; an identifier, once present, is never removed.
    pub achievements: BTreeSet<AchievementId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_practiced_date: Option<NaiveDate>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            total_points: 0,
            current_streak: 0,
            longest_streak: 0,
            level: 1,
            achievements: BTreeSet::new(),
            last_practiced_date: None,
        }
    }
}
