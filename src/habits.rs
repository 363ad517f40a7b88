use serde::Serialize;

use crate::metrics::completion_rate;
use crate::types::Habit;

/// Streak value after a completion toggle.
///
/// A streak grows by one exactly on the not-done -> done transition and is
/// otherwise left alone. Un-completing a habit does not take the day back.
pub fn streak_on_toggle(current_streak: u32, was_completed: bool, now_completed: bool) -> u32 {
    if !was_completed && now_completed {
        current_streak + 1
    } else {
        current_streak
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub completed: usize,
    pub total: usize,
    pub completion_rate: u8,
    pub longest_streak: u32,
}

/// Today's habit header stats: done count, completion percent, longest streak.
pub fn habit_stats(habits: &[Habit]) -> HabitStats {
    HabitStats {
        completed: habits.iter().filter(|h| h.completed).count(),
        total: habits.len(),
        completion_rate: completion_rate(habits, |h| h.completed),
        longest_streak: habits.iter().map(|h| h.streak).max().unwrap_or(0),
    }
}
