use chrono::NaiveDate;
use serde::Serialize;

use crate::error::EngineError;
use crate::metrics::{completion_rate, days_until, progress_percentage, weighted_average};
use crate::types::Goal;

/// Percent bands for the monthly focus lists.
const QUICK_WIN_THRESHOLD: u8 = 70;
const NEEDS_ATTENTION_THRESHOLD: u8 = 30;

pub fn is_completed(goal: &Goal) -> bool {
    goal.progress >= goal.target
}

/// Amount still to go, floored at zero once the target is passed.
pub fn remaining(goal: &Goal) -> f64 {
    (goal.target - goal.progress).max(0.0)
}

/// Progress toward this goal's target as a clamped whole percent.
pub fn percent(goal: &Goal) -> Result<u8, EngineError> {
    progress_percentage(goal.progress, goal.target)
}

/// Human countdown for a goal card footer.
pub fn deadline_label(goal: &Goal, today: NaiveDate) -> String {
    let days = days_until(goal.deadline, today);
    if days > 0 {
        format!("{} day{} left", days, if days == 1 { "" } else { "s" })
    } else {
        "Overdue".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub completed: usize,
    pub total: usize,
    pub active: usize,
    pub completion_rate: u8,
    /// Mean of the per-goal percents; None when there are no goals.
    pub average_percent: Option<u8>,
}

pub fn goal_stats(goals: &[Goal]) -> Result<GoalStats, EngineError> {
    let completed = goals.iter().filter(|g| is_completed(g)).count();
    let percents = goals
        .iter()
        .map(|g| percent(g).map(f64::from))
        .collect::<Result<Vec<f64>, _>>()?;
    let average_percent = weighted_average(&percents).ok().map(|avg| avg as u8);
    Ok(GoalStats {
        completed,
        total: goals.len(),
        active: goals.len() - completed,
        completion_rate: completion_rate(goals, is_completed),
        average_percent,
    })
}

/// Goals over 70% but not yet complete, in input order.
pub fn quick_wins<'a>(goals: &'a [Goal]) -> Result<Vec<&'a Goal>, EngineError> {
    let mut wins = Vec::new();
    for goal in goals {
        if percent(goal)? > QUICK_WIN_THRESHOLD && !is_completed(goal) {
            wins.push(goal);
        }
    }
    Ok(wins)
}

/// Goals under 30%, in input order.
pub fn needs_attention<'a>(goals: &'a [Goal]) -> Result<Vec<&'a Goal>, EngineError> {
    let mut flagged = Vec::new();
    for goal in goals {
        if percent(goal)? < NEEDS_ATTENTION_THRESHOLD {
            flagged.push(goal);
        }
    }
    Ok(flagged)
}
