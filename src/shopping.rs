use serde::Serialize;
use uuid::Uuid;

use crate::metrics::{completion_rate, group_by};
use crate::types::{Recipe, ShoppingCategory, ShoppingItem};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_rate: u8,
}

pub fn shopping_stats(items: &[ShoppingItem]) -> ShoppingStats {
    let completed = items.iter().filter(|i| i.completed).count();
    ShoppingStats {
        total: items.len(),
        completed,
        pending: items.len() - completed,
        completion_rate: completion_rate(items, |i| i.completed),
    }
}

pub fn pending(items: &[ShoppingItem]) -> Vec<&ShoppingItem> {
    items.iter().filter(|i| !i.completed).collect()
}

pub fn completed(items: &[ShoppingItem]) -> Vec<&ShoppingItem> {
    items.iter().filter(|i| i.completed).collect()
}

/// Group items by aisle category for the list view.
///
/// Categories appear in order of first appearance and items keep their
/// relative order, so the rendered list is stable across re-renders.
pub fn by_category(
    items: &[ShoppingItem],
    include_completed: bool,
) -> Vec<(ShoppingCategory, Vec<&ShoppingItem>)> {
    group_by(
        items.iter().filter(|i| include_completed || !i.completed),
        |item| item.category,
    )
}

/// Expand a recipe's ingredient list into unchecked shopping items.
///
/// Ingredient lines are free text, so each becomes an item named by the line
/// itself, categorized as Other, and tagged with the source recipe.
pub fn items_from_recipe(recipe: &Recipe) -> Vec<ShoppingItem> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| ShoppingItem {
            id: Uuid::new_v4().to_string(),
            name: ingredient.trim().to_string(),
            quantity: String::new(),
            category: ShoppingCategory::Other,
            completed: false,
            source_recipe: Some(recipe.title.clone()),
        })
        .collect()
}
