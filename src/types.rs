use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

// =============================================================================
// Category enums
// =============================================================================
//
// Every category the dashboard tracks is a closed enum. Unrecognized strings
// fail at deserialization instead of silently disappearing from grouped or
// filtered output.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Health,
    Mindfulness,
    Productivity,
    Learning,
}

impl HabitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Mindfulness => "mindfulness",
            Self::Productivity => "productivity",
            Self::Learning => "learning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Fitness,
    Career,
    Personal,
    Financial,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Career => "career",
            Self::Personal => "personal",
            Self::Financial => "financial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Healthy,
    Quick,
    Asian,
    Italian,
    Other,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
            Self::Healthy => "healthy",
            Self::Quick => "quick",
            Self::Asian => "asian",
            Self::Italian => "italian",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoppingCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Spices,
    Other,
}

impl ShoppingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Pantry => "pantry",
            Self::Spices => "spices",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCategory {
    Motivation,
    Wisdom,
    Success,
    Mindfulness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

// =============================================================================
// Mood scale
// =============================================================================

/// Seven-point mood scale. Serialized as its 0..=6 index so check-in data
/// stays a plain number on the wire while remaining a closed type here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    VeryLow,
    Low,
    Okay,
    Good,
    Great,
    Excellent,
    Amazing,
}

impl MoodLevel {
    pub const SCALE: [MoodLevel; 7] = [
        Self::VeryLow,
        Self::Low,
        Self::Okay,
        Self::Good,
        Self::Great,
        Self::Excellent,
        Self::Amazing,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::SCALE.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Excellent => "Excellent",
            Self::Amazing => "Amazing",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::VeryLow => "😢",
            Self::Low => "😟",
            Self::Okay => "😐",
            Self::Good => "🙂",
            Self::Great => "😊",
            Self::Excellent => "😄",
            Self::Amazing => "🤩",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or_else(|| format!("mood index out of range: {}", value))
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.index()
    }
}

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub streak: u32,
    pub category: HabitCategory,
}

impl Habit {
    /// Create a new, not-yet-completed habit with a fresh id.
    pub fn new(name: impl Into<String>, category: HabitCategory) -> Result<Self, EngineError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::validation("name", "must not be blank"));
        }
        Ok(Habit {
            id: Uuid::new_v4().to_string(),
            name,
            completed: false,
            streak: 0,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: f64,
    pub target: f64,
    pub category: GoalCategory,
    pub deadline: NaiveDate,
    pub unit: String,
}

/// Form input for a new goal. Promotion enforces a positive target so the
/// percentage math downstream never sees an undefined ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub target: f64,
    pub category: GoalCategory,
    pub deadline: NaiveDate,
    pub unit: String,
}

impl GoalDraft {
    pub fn into_goal(self) -> Result<Goal, EngineError> {
        if self.title.trim().is_empty() {
            return Err(EngineError::validation("title", "must not be blank"));
        }
        if self.target <= 0.0 {
            return Err(EngineError::validation(
                "target",
                format!("must be positive, got {}", self.target),
            ));
        }
        Ok(Goal {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            progress: 0.0,
            target: self.target,
            category: self.category,
            deadline: self.deadline,
            unit: self.unit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: MoodLevel,
    pub emotions: Vec<String>,
    pub note: String,
    pub energy: u8,
    pub stress: u8,
}

/// Check-in form input. Energy and stress are 1..=10 sliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodDraft {
    pub date: NaiveDate,
    pub mood: MoodLevel,
    pub emotions: Vec<String>,
    pub note: String,
    pub energy: u8,
    pub stress: u8,
}

impl MoodDraft {
    pub fn into_entry(self) -> Result<MoodEntry, EngineError> {
        if !(1..=10).contains(&self.energy) {
            return Err(EngineError::validation("energy", "must be between 1 and 10"));
        }
        if !(1..=10).contains(&self.stress) {
            return Err(EngineError::validation("stress", "must be between 1 and 10"));
        }
        Ok(MoodEntry {
            id: Uuid::new_v4().to_string(),
            date: self.date,
            mood: self.mood,
            emotions: self.emotions,
            note: self.note,
            energy: self.energy,
            stress: self.stress,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub category: RecipeCategory,
    pub is_favorite: bool,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Add-recipe form input. Ingredient and instruction text arrives one entry
/// per line; blank lines are dropped during promotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: RecipeCategory,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Rating assigned to user-submitted recipes until they are rated for real.
const DEFAULT_RECIPE_RATING: f64 = 4.0;

impl RecipeDraft {
    pub fn into_recipe(self) -> Result<Recipe, EngineError> {
        if self.title.trim().is_empty() {
            return Err(EngineError::validation("title", "must not be blank"));
        }
        if self.cook_time_minutes == 0 {
            return Err(EngineError::validation(
                "cookTimeMinutes",
                "must be at least 1",
            ));
        }
        if self.servings == 0 {
            return Err(EngineError::validation("servings", "must be at least 1"));
        }
        let ingredients: Vec<String> = self
            .ingredients
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(EngineError::validation(
                "ingredients",
                "at least one ingredient is required",
            ));
        }
        let instructions: Vec<String> = self
            .instructions
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if instructions.is_empty() {
            return Err(EngineError::validation(
                "instructions",
                "at least one step is required",
            ));
        }
        Ok(Recipe {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            image: PLACEHOLDER_IMAGE.to_string(),
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
            difficulty: self.difficulty,
            rating: DEFAULT_RECIPE_RATING,
            category: self.category,
            is_favorite: false,
            ingredients,
            instructions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: String,
    pub day: Weekday,
    pub slot: MealSlot,
    pub recipe_id: String,
}

impl MealPlanEntry {
    pub fn new(day: Weekday, slot: MealSlot, recipe_id: impl Into<String>) -> Self {
        MealPlanEntry {
            id: Uuid::new_v4().to_string(),
            day,
            slot,
            recipe_id: recipe_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: ShoppingCategory,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_recipe: Option<String>,
}

/// Add-item form input. Name is the only required field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItemDraft {
    pub name: String,
    pub quantity: String,
    pub category: ShoppingCategory,
}

impl ShoppingItemDraft {
    pub fn into_item(self) -> Result<ShoppingItem, EngineError> {
        if self.name.trim().is_empty() {
            return Err(EngineError::validation("name", "must not be blank"));
        }
        Ok(ShoppingItem {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            quantity: self.quantity,
            category: self.category,
            completed: false,
            source_recipe: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub category: QuoteCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_level_maps_one_to_one() {
        for (index, level) in MoodLevel::SCALE.iter().enumerate() {
            assert_eq!(MoodLevel::from_index(index as u8), Some(*level));
            assert_eq!(level.index() as usize, index);
        }
        assert_eq!(MoodLevel::from_index(7), None);
        assert_eq!(MoodLevel::Amazing.label(), "Amazing");
        assert_eq!(MoodLevel::VeryLow.emoji(), "😢");
    }

    #[test]
    fn mood_level_serializes_as_index() {
        let json = serde_json::to_string(&MoodLevel::Great).unwrap();
        assert_eq!(json, "4");
        let level: MoodLevel = serde_json::from_str("6").unwrap();
        assert_eq!(level, MoodLevel::Amazing);
        assert!(serde_json::from_str::<MoodLevel>("7").is_err());
    }

    #[test]
    fn unknown_category_is_rejected_at_the_boundary() {
        assert!(serde_json::from_str::<HabitCategory>("\"fitness\"").is_err());
        assert!(serde_json::from_str::<ShoppingCategory>("\"frozen\"").is_err());
        let cat: ShoppingCategory = serde_json::from_str("\"produce\"").unwrap();
        assert_eq!(cat, ShoppingCategory::Produce);
    }

    #[test]
    fn habit_record_roundtrips_camel_case() {
        let habit = Habit {
            id: "1".into(),
            name: "Morning meditation".into(),
            completed: true,
            streak: 15,
            category: HabitCategory::Mindfulness,
        };
        let json = serde_json::to_string(&habit).unwrap();
        assert!(json.contains("\"category\":\"mindfulness\""));
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, habit);
    }

    #[test]
    fn recipe_draft_rejects_blank_title_and_empty_lists() {
        let draft = RecipeDraft {
            title: "  ".into(),
            description: String::new(),
            cook_time_minutes: 30,
            servings: 4,
            difficulty: Difficulty::Easy,
            category: RecipeCategory::Other,
            ingredients: vec!["flour".into()],
            instructions: vec!["mix".into()],
        };
        assert!(draft.into_recipe().is_err());

        let draft = RecipeDraft {
            title: "Pancakes".into(),
            description: String::new(),
            cook_time_minutes: 30,
            servings: 4,
            difficulty: Difficulty::Easy,
            category: RecipeCategory::Breakfast,
            ingredients: vec!["  ".into(), "".into()],
            instructions: vec!["mix".into()],
        };
        assert!(draft.into_recipe().is_err());
    }

    #[test]
    fn recipe_draft_promotion_drops_blank_lines_and_sets_defaults() {
        let draft = RecipeDraft {
            title: "Pancakes".into(),
            description: "Fluffy".into(),
            cook_time_minutes: 20,
            servings: 2,
            difficulty: Difficulty::Easy,
            category: RecipeCategory::Breakfast,
            ingredients: vec!["2 cups flour".into(), "".into(), "3 eggs".into()],
            instructions: vec!["Mix".into(), "Fry".into()],
        };
        let recipe = draft.into_recipe().unwrap();
        assert_eq!(recipe.ingredients, vec!["2 cups flour", "3 eggs"]);
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.rating, 4.0);
        assert!(!recipe.id.is_empty());
    }

    #[test]
    fn goal_draft_rejects_non_positive_target() {
        let draft = GoalDraft {
            title: "Read 24 Books".into(),
            description: String::new(),
            target: 0.0,
            category: GoalCategory::Personal,
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            unit: "books".into(),
        };
        assert!(draft.into_goal().is_err());
    }

    #[test]
    fn mood_draft_rejects_out_of_range_sliders() {
        let draft = MoodDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 24).unwrap(),
            mood: MoodLevel::Good,
            emotions: vec![],
            note: String::new(),
            energy: 0,
            stress: 3,
        };
        assert!(draft.into_entry().is_err());

        let draft = MoodDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 24).unwrap(),
            mood: MoodLevel::Good,
            emotions: vec!["Calm".into()],
            note: "Peaceful evening".into(),
            energy: 6,
            stress: 11,
        };
        assert!(draft.into_entry().is_err());
    }

    #[test]
    fn shopping_draft_requires_a_name() {
        let draft = ShoppingItemDraft {
            name: " ".into(),
            quantity: "2 cups".into(),
            category: ShoppingCategory::Pantry,
        };
        assert!(draft.into_item().is_err());
    }
}
