//! Achievement ladders and their identifiers.
//!
//! Achievements are one-time monotonic unlocks. The evaluator only
//! emits identifiers the learner does not already hold; the caller
//! merges them into `ProgressState::achievements` so a repeat call at
//! the same state yields nothing.

use crate::error::EngineError;
use crate::types::ProgressState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Streak-length milestones, in days.
pub const STREAK_MILESTONES: [u32; 6] = [3, 7, 14, 30, 60, 100];
/// Vocabulary-corpus-size milestones.
pub const VOCABULARY_MILESTONES: [u32; 6] = [10, 50, 100, 250, 500, 1000];
/// Level milestones.
pub const LEVEL_MILESTONES: [u32; 5] = [5, 10, 20, 30, 50];

/// Stable achievement identifier, stored as `streak-<n>`, `vocab-<n>`
/// or `level-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementId {
    Streak(u32),
    Vocab(u32),
    Level(u32),
}

impl AchievementId {
    /// Human-readable caption for the unlock toast.
    pub fn display_name(&self) -> String {
        match self {
            Self::Streak(days) => format!("{days} day streak!"),
            Self::Vocab(count) => format!("{count} words learned!"),
            Self::Level(level) => format!("Level {level} reached!"),
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Streak(n) => write!(f, "streak-{n}"),
            Self::Vocab(n) => write!(f, "vocab-{n}"),
            Self::Level(n) => write!(f, "level-{n}"),
        }
    }
}

impl FromStr for AchievementId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, threshold) = s
            .split_once('-')
            .ok_or_else(|| EngineError::MalformedAchievementId { id: s.to_string() })?;
        let value: u32 = threshold
            .parse()
            .map_err(|_| EngineError::InvalidAchievementThreshold { id: s.to_string() })?;
        match kind {
            "streak" => Ok(Self::Streak(value)),
            "vocab" => Ok(Self::Vocab(value)),
            "level" => Ok(Self::Level(value)),
            _ => Err(EngineError::UnknownAchievementKind { kind: kind.to_string() }),
        }
    }
}

// Stored as plain strings, matching the storage collaborator's text[]
// column.
impl Serialize for AchievementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AchievementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifiers newly earned at this progress state, across all three
/// ladders. Already-held identifiers are never re-issued.
pub fn check_achievements(
    progress: &ProgressState,
    vocabulary_count: usize,
) -> BTreeSet<AchievementId> {
    let mut earned = BTreeSet::new();

    for milestone in STREAK_MILESTONES {
        if progress.current_streak >= milestone {
            earned.insert(AchievementId::Streak(milestone));
        }
    }
    for milestone in VOCABULARY_MILESTONES {
        if vocabulary_count >= milestone as usize {
            earned.insert(AchievementId::Vocab(milestone));
        }
    }
    for milestone in LEVEL_MILESTONES {
        if progress.level >= milestone {
            earned.insert(AchievementId::Level(milestone));
        }
    }

    earned.difference(&progress.achievements).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn progress(streak: u32, level: u32) -> ProgressState {
        ProgressState {
            current_streak: streak,
            longest_streak: streak,
            level,
            ..ProgressState::default()
        }
    }

    #[test]
    fn streak_milestones_unlock_cumulatively() {
        let earned = check_achievements(&progress(7, 1), 0);
        assert_eq!(
            earned.into_iter().collect::<Vec<_>>(),
            vec![AchievementId::Streak(3), AchievementId::Streak(7)]
        );
    }

    #[test]
    fn vocabulary_milestones_respect_corpus_size() {
        let earned = check_achievements(&progress(0, 1), 50);
        assert!(earned.contains(&AchievementId::Vocab(10)));
        assert!(earned.contains(&AchievementId::Vocab(50)));
        assert!(!earned.contains(&AchievementId::Vocab(100)));
    }

    #[test]
    fn level_milestones_unlock_at_threshold() {
        let earned = check_achievements(&progress(0, 10), 0);
        assert!(earned.contains(&AchievementId::Level(5)));
        assert!(earned.contains(&AchievementId::Level(10)));
        assert!(!earned.contains(&AchievementId::Level(20)));
    }

    #[test]
    fn nothing_below_all_thresholds() {
        let earned = check_achievements(&progress(2, 4), 9);
        assert!(earned.is_empty());
    }

    #[test]
    fn already_held_identifiers_are_not_reissued() {
        let mut state = progress(7, 1);
        let first = check_achievements(&state, 0);
        assert!(!first.is_empty());

        state.achievements.extend(first);
        let second = check_achievements(&state, 0);
        assert!(second.is_empty());
    }

    #[test]
    fn identifier_string_round_trip() {
        for id in [
            AchievementId::Streak(3),
            AchievementId::Vocab(1000),
            AchievementId::Level(50),
        ] {
            assert_eq!(id.to_string().parse::<AchievementId>(), Ok(id));
        }
    }

    #[test]
    fn malformed_identifiers_fail_to_parse() {
        assert_eq!(
            "streak".parse::<AchievementId>(),
            Err(EngineError::MalformedAchievementId { id: "streak".into() })
        );
        assert_eq!(
            "streak-many".parse::<AchievementId>(),
            Err(EngineError::InvalidAchievementThreshold { id: "streak-many".into() })
        );
        assert_eq!(
            "badges-3".parse::<AchievementId>(),
            Err(EngineError::UnknownAchievementKind { kind: "badges".into() })
        );
    }

    #[test]
    fn display_names_describe_the_milestone() {
        assert_eq!(AchievementId::Streak(3).display_name(), "3 day streak!");
        assert_eq!(AchievementId::Vocab(50).display_name(), "50 words learned!");
        assert_eq!(AchievementId::Level(10).display_name(), "Level 10 reached!");
    }
}
