use serde::Serialize;

use crate::metrics::{mean, weighted_average};
use crate::types::{Recipe, RecipeCategory};

/// Filter recipes by free-text search and optional category.
///
/// The search term matches case-insensitively against title or description;
/// an empty term matches everything. `None` for the category means "All".
/// Input order is preserved.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    category: Option<RecipeCategory>,
) -> Vec<&'a Recipe> {
    let needle = search_term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            let matches_search = recipe.title.to_lowercase().contains(&needle)
                || recipe.description.to_lowercase().contains(&needle);
            let matches_category = category.map_or(true, |c| recipe.category == c);
            matches_search && matches_category
        })
        .collect()
}

pub fn find_recipe<'a>(recipes: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|r| r.id == id)
}

pub fn favorites(recipes: &[Recipe]) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.is_favorite).collect()
}

/// Ratio to scale ingredient quantities by when cooking for `desired_servings`.
pub fn serving_ratio(recipe: &Recipe, desired_servings: u32) -> f64 {
    desired_servings as f64 / recipe.servings as f64
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStats {
    pub total: usize,
    /// Rounded mean cook time; None when the collection is empty.
    pub average_cook_time_minutes: Option<u32>,
    pub favorites: usize,
}

pub fn recipe_stats(recipes: &[Recipe]) -> RecipeStats {
    let cook_times: Vec<f64> = recipes.iter().map(|r| r.cook_time_minutes as f64).collect();
    RecipeStats {
        total: recipes.len(),
        average_cook_time_minutes: weighted_average(&cook_times).ok().map(|avg| avg as u32),
        favorites: favorites(recipes).len(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStats {
    pub count: usize,
    pub total_cook_time_minutes: u32,
    /// Mean rating rounded to one decimal; None when nothing is favorited.
    pub average_rating: Option<f64>,
}

pub fn favorite_stats(recipes: &[Recipe]) -> FavoriteStats {
    let favs = favorites(recipes);
    let ratings: Vec<f64> = favs.iter().map(|r| r.rating).collect();
    FavoriteStats {
        count: favs.len(),
        total_cook_time_minutes: favs.iter().map(|r| r.cook_time_minutes).sum(),
        average_rating: mean(&ratings).ok().map(|m| (m * 10.0).round() / 10.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn recipe(id: &str, title: &str, description: &str, category: RecipeCategory) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: "/placeholder.svg".to_string(),
            cook_time_minutes: 30,
            servings: 4,
            difficulty: Difficulty::Medium,
            rating: 4.5,
            category,
            is_favorite: false,
            ingredients: vec!["salt".to_string()],
            instructions: vec!["season".to_string()],
        }
    }

    #[test]
    fn empty_search_and_no_category_is_the_identity_filter() {
        let recipes = vec![
            recipe("1", "Thai Curry", "coconut", RecipeCategory::Asian),
            recipe("2", "Pizza", "cheesy", RecipeCategory::Italian),
        ];
        let all = filter_recipes(&recipes, "", None);
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let recipes = vec![
            recipe("1", "Thai Curry", "coconut", RecipeCategory::Asian),
            recipe("2", "Pizza", "cheesy", RecipeCategory::Italian),
        ];
        let hits = filter_recipes(&recipes, "thai", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let by_description = filter_recipes(&recipes, "CHEESY", None);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "2");
    }

    #[test]
    fn category_filter_composes_with_search() {
        let recipes = vec![
            recipe("1", "Thai Curry", "coconut", RecipeCategory::Asian),
            recipe("2", "Bulgogi Bowl", "korean beef", RecipeCategory::Asian),
            recipe("3", "Pizza", "cheesy", RecipeCategory::Italian),
        ];
        let asian = filter_recipes(&recipes, "", Some(RecipeCategory::Asian));
        assert_eq!(asian.len(), 2);

        let asian_curry = filter_recipes(&recipes, "curry", Some(RecipeCategory::Asian));
        assert_eq!(asian_curry.len(), 1);
        assert_eq!(asian_curry[0].id, "1");

        let no_match = filter_recipes(&recipes, "curry", Some(RecipeCategory::Italian));
        assert!(no_match.is_empty());
    }

    #[test]
    fn serving_ratio_scales_against_base_servings() {
        let r = recipe("1", "Thai Curry", "", RecipeCategory::Asian);
        assert_eq!(serving_ratio(&r, 8), 2.0);
        assert_eq!(serving_ratio(&r, 2), 0.5);
        assert_eq!(serving_ratio(&r, 4), 1.0);
    }

    #[test]
    fn stats_average_cook_time_and_count_favorites() {
        let mut recipes = vec![
            recipe("1", "A", "", RecipeCategory::Other),
            recipe("2", "B", "", RecipeCategory::Other),
        ];
        recipes[0].cook_time_minutes = 25;
        recipes[1].cook_time_minutes = 40;
        recipes[1].is_favorite = true;

        let stats = recipe_stats(&recipes);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_cook_time_minutes, Some(33));
        assert_eq!(stats.favorites, 1);

        assert_eq!(recipe_stats(&[]).average_cook_time_minutes, None);
    }

    #[test]
    fn favorite_stats_round_rating_to_one_decimal() {
        let mut recipes = vec![
            recipe("1", "A", "", RecipeCategory::Other),
            recipe("2", "B", "", RecipeCategory::Other),
            recipe("3", "C", "", RecipeCategory::Other),
        ];
        recipes[0].is_favorite = true;
        recipes[0].rating = 4.9;
        recipes[0].cook_time_minutes = 35;
        recipes[1].is_favorite = true;
        recipes[1].rating = 4.6;
        recipes[1].cook_time_minutes = 20;

        let stats = favorite_stats(&recipes);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_cook_time_minutes, 55);
        assert_eq!(stats.average_rating, Some(4.8));

        let none = favorite_stats(&recipes[2..]);
        assert_eq!(none.count, 0);
        assert_eq!(none.average_rating, None);
    }
}
