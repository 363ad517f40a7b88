//! Dashboard state and the pure action reducer.
//!
//! The presentation layer owns exactly one `DashboardState` value and applies
//! every user intent through [`DashboardState::apply`], which returns a fresh
//! state and never mutates its input. Draft validation and id assignment
//! happen before an `Action` is constructed, so the reducer is infallible:
//! an action naming an unknown id is a logged no-op, matching the way the
//! dashboard quietly ignores stale clicks.

use serde::{Deserialize, Serialize};

use crate::habits::streak_on_toggle;
use crate::recipes::find_recipe;
use crate::shopping::items_from_recipe;
use crate::types::{Goal, Habit, MealPlanEntry, MoodEntry, Quote, Recipe, ShoppingItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub habits: Vec<Habit>,
    pub goals: Vec<Goal>,
    /// Mood check-ins, most recent first.
    pub mood_entries: Vec<MoodEntry>,
    pub recipes: Vec<Recipe>,
    pub meal_plan: Vec<MealPlanEntry>,
    pub shopping_items: Vec<ShoppingItem>,
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone)]
pub enum Action {
    ToggleHabit { id: String },
    AddHabit { habit: Habit },
    UpdateGoalProgress { id: String, progress: f64 },
    AddGoal { goal: Goal },
    LogMood { entry: MoodEntry },
    ToggleFavorite { id: String },
    AddRecipe { recipe: Recipe },
    PlanMeal { entry: MealPlanEntry },
    RemoveMeal { id: String },
    AddShoppingItem { item: ShoppingItem },
    ToggleShoppingItem { id: String },
    RemoveShoppingItem { id: String },
    ClearCompletedShopping,
    AddRecipeToShoppingList { recipe_id: String },
}

impl DashboardState {
    pub fn apply(&self, action: Action) -> DashboardState {
        let mut next = self.clone();
        match action {
            Action::ToggleHabit { id } => {
                let mut found = false;
                next.habits = self
                    .habits
                    .iter()
                    .map(|habit| {
                        if habit.id != id {
                            return habit.clone();
                        }
                        found = true;
                        let mut updated = habit.clone();
                        updated.completed = !habit.completed;
                        updated.streak =
                            streak_on_toggle(habit.streak, habit.completed, updated.completed);
                        updated
                    })
                    .collect();
                if !found {
                    log::warn!("toggle for unknown habit id {}", id);
                }
            }
            Action::AddHabit { habit } => next.habits.push(habit),
            Action::UpdateGoalProgress { id, progress } => {
                let mut found = false;
                next.goals = self
                    .goals
                    .iter()
                    .map(|goal| {
                        if goal.id != id {
                            return goal.clone();
                        }
                        found = true;
                        let mut updated = goal.clone();
                        updated.progress = progress;
                        updated
                    })
                    .collect();
                if !found {
                    log::warn!("progress update for unknown goal id {}", id);
                }
            }
            Action::AddGoal { goal } => next.goals.push(goal),
            Action::LogMood { entry } => next.mood_entries.insert(0, entry),
            Action::ToggleFavorite { id } => {
                let mut found = false;
                next.recipes = self
                    .recipes
                    .iter()
                    .map(|recipe| {
                        if recipe.id != id {
                            return recipe.clone();
                        }
                        found = true;
                        let mut updated = recipe.clone();
                        updated.is_favorite = !recipe.is_favorite;
                        updated
                    })
                    .collect();
                if !found {
                    log::warn!("favorite toggle for unknown recipe id {}", id);
                }
            }
            Action::AddRecipe { recipe } => next.recipes.insert(0, recipe),
            Action::PlanMeal { entry } => next.meal_plan.push(entry),
            Action::RemoveMeal { id } => {
                next.meal_plan.retain(|entry| entry.id != id);
            }
            Action::AddShoppingItem { item } => next.shopping_items.push(item),
            Action::ToggleShoppingItem { id } => {
                let mut found = false;
                next.shopping_items = self
                    .shopping_items
                    .iter()
                    .map(|item| {
                        if item.id != id {
                            return item.clone();
                        }
                        found = true;
                        let mut updated = item.clone();
                        updated.completed = !item.completed;
                        updated
                    })
                    .collect();
                if !found {
                    log::warn!("toggle for unknown shopping item id {}", id);
                }
            }
            Action::RemoveShoppingItem { id } => {
                next.shopping_items.retain(|item| item.id != id);
            }
            Action::ClearCompletedShopping => {
                next.shopping_items.retain(|item| !item.completed);
            }
            Action::AddRecipeToShoppingList { recipe_id } => {
                match find_recipe(&self.recipes, &recipe_id) {
                    Some(recipe) => next.shopping_items.extend(items_from_recipe(recipe)),
                    None => log::warn!("shopping list add for unknown recipe id {}", recipe_id),
                }
            }
        }
        next
    }
}
