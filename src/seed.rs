//! Embedded sample data the dashboard boots with.
//!
//! Fixture JSON lives in `seeds/` and is compiled in with `include_str!`.
//! The presentation layer seeds its first render from [`seed_state`] and owns
//! every mutation afterwards; nothing is ever written back.

use serde::de::DeserializeOwned;

use crate::error::EngineError;
use crate::store::DashboardState;

const HABITS_SEED: &str = include_str!("../seeds/habits.json");
const GOALS_SEED: &str = include_str!("../seeds/goals.json");
const MOOD_ENTRIES_SEED: &str = include_str!("../seeds/mood_entries.json");
const RECIPES_SEED: &str = include_str!("../seeds/recipes.json");
const MEAL_PLAN_SEED: &str = include_str!("../seeds/meal_plan.json");
const SHOPPING_ITEMS_SEED: &str = include_str!("../seeds/shopping_items.json");
const QUOTES_SEED: &str = include_str!("../seeds/quotes.json");

fn parse<T: DeserializeOwned>(file: &'static str, json: &'static str) -> Result<T, EngineError> {
    serde_json::from_str(json).map_err(|source| EngineError::Seed { file, source })
}

/// Build the initial dashboard state from the embedded fixtures.
pub fn seed_state() -> Result<DashboardState, EngineError> {
    Ok(DashboardState {
        habits: parse("habits.json", HABITS_SEED)?,
        goals: parse("goals.json", GOALS_SEED)?,
        mood_entries: parse("mood_entries.json", MOOD_ENTRIES_SEED)?,
        recipes: parse("recipes.json", RECIPES_SEED)?,
        meal_plan: parse("meal_plan.json", MEAL_PLAN_SEED)?,
        shopping_items: parse("shopping_items.json", SHOPPING_ITEMS_SEED)?,
        quotes: parse("quotes.json", QUOTES_SEED)?,
    })
}
