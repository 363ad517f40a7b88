// Dashboard overview assembly: the one place the per-feature rollups meet.
// The caller supplies the clock reading; nothing here touches wall time.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::EngineError;
use crate::goals::goal_stats;
use crate::habits::habit_stats;
use crate::mood::wellness_score;
use crate::quotes::quote_of_the_day;
use crate::store::DashboardState;
use crate::types::Quote;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub completed_habits: usize,
    pub total_habits: usize,
    pub habit_completion_rate: u8,
    pub current_streak: u32,
    pub goals_completed: usize,
    pub total_goals: usize,
    pub goal_completion_rate: u8,
    /// None until at least one mood check-in exists.
    pub wellness_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub greeting: String,
    pub date: String,
    pub summary: String,
    pub stats: DashboardStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

/// Build the overview header from a state snapshot and the caller's clock.
pub fn build_overview(
    state: &DashboardState,
    now: NaiveDateTime,
) -> Result<Overview, EngineError> {
    let habits = habit_stats(&state.habits);
    let goals = goal_stats(&state.goals)?;

    let hour = now.hour();
    let greeting = if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    };

    let summary = format!(
        "{} of {} habit{} done today; {} of {} goal{} complete",
        habits.completed,
        habits.total,
        if habits.total == 1 { "" } else { "s" },
        goals.completed,
        goals.total,
        if goals.total == 1 { "" } else { "s" },
    );

    Ok(Overview {
        greeting: greeting.to_string(),
        date: now.format("%A, %B %e").to_string(),
        summary,
        stats: DashboardStats {
            completed_habits: habits.completed,
            total_habits: habits.total,
            habit_completion_rate: habits.completion_rate,
            current_streak: habits.longest_streak,
            goals_completed: goals.completed,
            total_goals: goals.total,
            goal_completion_rate: goals.completion_rate,
            wellness_score: wellness_score(&state.mood_entries).ok(),
        },
        quote: quote_of_the_day(&state.quotes, now.date()).ok().cloned(),
    })
}
