//! Points, streak and level accumulation.
//!
//! Streaks use calendar-day granularity, not elapsed wall-clock time:
//! one answer per day is enough to keep a streak alive.

use crate::types::ProgressState;
use chrono::NaiveDate;

/// Base award for a correct answer.
pub const POINTS_PER_CORRECT: u64 = 10;
/// Bonus unit awarded at every fifth streak day.
pub const POINTS_PER_STREAK_BONUS: u64 = 5;

/// Points earned by a single answer, given the streak *before* this
/// answer is applied. Incorrect answers earn nothing.
pub fn points_for_answer(correct: bool, current_streak: u32) -> u64 {
    if !correct {
        return 0;
    }
    let mut points = POINTS_PER_CORRECT;
    if current_streak > 0 && current_streak % 5 == 0 {
        points += POINTS_PER_STREAK_BONUS * (current_streak / 5) as u64;
    }
    points
}

/// Level reached at a point total: `floor(sqrt(points / 100)) + 1`.
pub fn level_for_points(total_points: u64) -> u32 {
    (total_points as f64 / 100.0).sqrt().floor() as u32 + 1
}

/// Points required to enter a level; inverse of [`level_for_points`].
/// Level 1 at 0 points, level 2 at 100, level 3 at 400, and so on.
pub fn points_for_level(level: u32) -> u64 {
    let base = level.saturating_sub(1) as u64;
    base * base * 100
}

/// Fold one answer into the learner's progress.
///
/// Returns the next snapshot; the input is untouched. Achievements are
/// carried over as-is, newly unlocked ones are the business of
/// [`crate::achievements::check_achievements`].
pub fn apply_outcome(progress: &ProgressState, correct: bool, today: NaiveDate) -> ProgressState {
    let total_points = progress.total_points + points_for_answer(correct, progress.current_streak);

    let current_streak = if progress.last_practiced_date == Some(today) {
        // Already practiced today; the streak is unchanged.
        progress.current_streak
    } else if progress.last_practiced_date.is_some()
        && progress.last_practiced_date == today.pred_opt()
    {
        progress.current_streak + 1
    } else {
        // Gap of two or more days, or first practice ever.
        1
    };

    ProgressState {
        total_points,
        current_streak,
        longest_streak: progress.longest_streak.max(current_streak),
        level: level_for_points(total_points),
        achievements: progress.achievements.clone(),
        last_practiced_date: Some(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn progress(streak: u32, last: Option<NaiveDate>) -> ProgressState {
        ProgressState {
            current_streak: streak,
            longest_streak: streak,
            last_practiced_date: last,
            ..ProgressState::default()
        }
    }

    #[test]
    fn correct_answer_awards_base_points() {
        assert_eq!(points_for_answer(true, 0), 10);
        assert_eq!(points_for_answer(false, 0), 0);
    }

    #[test]
    fn streak_bonus_on_multiples_of_five() {
        assert_eq!(points_for_answer(true, 5), 15);
        assert_eq!(points_for_answer(true, 10), 20);
        assert_eq!(points_for_answer(true, 4), 10);
        // No bonus on an incorrect answer, whatever the streak.
        assert_eq!(points_for_answer(false, 5), 0);
    }

    #[test]
    fn first_practice_starts_streak_at_one() {
        let next = apply_outcome(&ProgressState::default(), true, date(2024, 3, 15));
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 1);
        assert_eq!(next.total_points, 10);
        assert_eq!(next.level, 1);
        assert_eq!(next.last_practiced_date, Some(date(2024, 3, 15)));
    }

    #[test]
    fn same_day_practice_keeps_streak() {
        let today = date(2024, 3, 15);
        let before = progress(3, Some(today));
        let next = apply_outcome(&before, true, today);
        assert_eq!(next.current_streak, 3);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let before = progress(3, Some(date(2024, 3, 14)));
        let next = apply_outcome(&before, true, date(2024, 3, 15));
        assert_eq!(next.current_streak, 4);
        assert_eq!(next.longest_streak, 4);
    }

    #[test]
    fn two_day_gap_resets_streak() {
        let before = progress(7, Some(date(2024, 3, 12)));
        let next = apply_outcome(&before, true, date(2024, 3, 15));
        assert_eq!(next.current_streak, 1);
        // The longest streak is retained across the reset.
        assert_eq!(next.longest_streak, 7);
    }

    #[test]
    fn incorrect_answer_still_counts_as_practice() {
        let before = progress(3, Some(date(2024, 3, 14)));
        let next = apply_outcome(&before, false, date(2024, 3, 15));
        assert_eq!(next.total_points, 0);
        assert_eq!(next.current_streak, 4);
        assert_eq!(next.last_practiced_date, Some(date(2024, 3, 15)));
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let before = progress(1, Some(date(2024, 2, 29)));
        let next = apply_outcome(&before, true, date(2024, 3, 1));
        assert_eq!(next.current_streak, 2);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(399), 2);
        assert_eq!(level_for_points(400), 3);
    }

    #[test]
    fn level_round_trips_through_points() {
        for level in 1..=60 {
            assert_eq!(level_for_points(points_for_level(level)), level);
        }
    }

    #[test]
    fn level_is_consistent_with_its_bounds() {
        for points in [0, 50, 100, 250, 400, 899, 900, 10_000] {
            let level = level_for_points(points);
            assert!(points_for_level(level) <= points);
            assert!(points < points_for_level(level + 1));
        }
    }
}
