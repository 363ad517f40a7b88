use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::recipes::find_recipe;
use crate::types::{MealPlanEntry, MealSlot, Recipe, Weekday};

pub fn meals_for_day<'a>(plan: &'a [MealPlanEntry], day: Weekday) -> Vec<&'a MealPlanEntry> {
    plan.iter().filter(|entry| entry.day == day).collect()
}

/// First entry planned for a (day, slot) cell.
///
/// Uniqueness per cell is expected but not enforced; duplicates are tolerated
/// and the earliest one wins.
pub fn meal_for_slot<'a>(
    plan: &'a [MealPlanEntry],
    day: Weekday,
    slot: MealSlot,
) -> Option<&'a MealPlanEntry> {
    plan.iter()
        .find(|entry| entry.day == day && entry.slot == slot)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub planned_meals: usize,
    pub total_cook_time_minutes: u32,
    pub total_servings: u32,
}

/// Weekly totals for the planner header. Entries whose recipe no longer
/// exists are skipped with a warning rather than failing the whole rollup.
pub fn plan_stats(plan: &[MealPlanEntry], recipes: &[Recipe]) -> PlanStats {
    let mut total_cook_time_minutes = 0;
    let mut total_servings = 0;
    for entry in plan {
        match find_recipe(recipes, &entry.recipe_id) {
            Some(recipe) => {
                total_cook_time_minutes += recipe.cook_time_minutes;
                total_servings += recipe.servings;
            }
            None => log::warn!(
                "meal plan entry {} references missing recipe {}",
                entry.id,
                entry.recipe_id
            ),
        }
    }
    PlanStats {
        planned_meals: plan.len(),
        total_cook_time_minutes,
        total_servings,
    }
}

/// Uniform random pick for the "surprise me" planner action.
///
/// The RNG comes from the caller, so a seeded generator makes the suggestion
/// reproducible. None when there is nothing to pick from.
pub fn suggest_recipe<'a, R: Rng + ?Sized>(recipes: &'a [Recipe], rng: &mut R) -> Option<&'a Recipe> {
    recipes.choose(rng)
}
