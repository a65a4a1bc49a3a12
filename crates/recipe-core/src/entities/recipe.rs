//! Recipe entity and the read models built around it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ingredient::{validate_ingredients, RecipeIngredient};
use super::Author;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Recipe entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub short_text: String,
    pub full_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub tags: Vec<String>,
    pub categories: Vec<Category>,
    /// Ingredient lines in the order they were given
    pub ingredients: Vec<RecipeIngredient>,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub const MAX_TITLE_LENGTH: usize = 150;
    pub const MAX_SHORT_TEXT_LENGTH: usize = 200;
    pub const MIN_COOKING_TIME: i32 = 10;
    pub const MAX_COOKING_TIME: i32 = 60 * 24;

    /// Build a recipe from creation input, published now
    pub fn new(id: Snowflake, slug: String, input: NewRecipe, categories: Vec<Category>) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id: input.author_id,
            title: input.title,
            slug,
            short_text: input.short_text,
            full_text: input.full_text,
            preview_image: input.preview_image,
            cooking_time: input.cooking_time,
            tags: input.tags,
            categories,
            ingredients: input
                .ingredients
                .iter()
                .map(RecipeIngredient::normalized)
                .collect(),
            pub_date: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    pub fn validate_cooking_time(minutes: i32) -> Result<(), DomainError> {
        if (Self::MIN_COOKING_TIME..=Self::MAX_COOKING_TIME).contains(&minutes) {
            Ok(())
        } else {
            Err(DomainError::ValidationError(format!(
                "cooking_time must be between {} and {} minutes",
                Self::MIN_COOKING_TIME,
                Self::MAX_COOKING_TIME
            )))
        }
    }

    /// Apply a partial update, touching `updated_at`. Nothing changes when
    /// any field is invalid.
    pub fn apply(&mut self, update: RecipeUpdate) -> Result<(), DomainError> {
        if let Some(minutes) = update.cooking_time {
            Self::validate_cooking_time(minutes)?;
        }
        if let Some(ingredients) = &update.ingredients {
            validate_ingredients(ingredients)?;
        }

        if let Some(minutes) = update.cooking_time {
            self.cooking_time = minutes;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients.iter().map(RecipeIngredient::normalized).collect();
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(short_text) = update.short_text {
            self.short_text = short_text;
        }
        if let Some(full_text) = update.full_text {
            self.full_text = full_text;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Recipe category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Input for creating a recipe
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub author_id: Snowflake,
    pub title: String,
    pub short_text: String,
    pub full_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub tags: Vec<String>,
    pub category_slugs: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Partial update of the mutable recipe fields
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub short_text: Option<String>,
    pub full_text: Option<String>,
    pub cooking_time: Option<i32>,
    /// Replaces the whole ingredient list when present
    pub ingredients: Option<Vec<RecipeIngredient>>,
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.short_text.is_none()
            && self.full_text.is_none()
            && self.cooking_time.is_none()
            && self.ingredients.is_none()
    }
}

/// Single recipe with its author and all-time engagement totals
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub author: Author,
    pub reactions_count: i64,
    pub views_count: i64,
}

/// List entry used by the favorites listing and title search
#[derive(Debug, Clone)]
pub struct RecipeSummary {
    pub id: Snowflake,
    pub title: String,
    pub slug: String,
    pub author: Author,
    pub preview_image: Option<String>,
    pub short_text: String,
    pub tags: Vec<String>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub reactions_count: i64,
    pub views_count: i64,
    pub comments_count: i64,
}

/// Lowercase, ASCII-alphanumeric slug with single dashes between words
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Split a title search into terms on whitespace and commas. A recipe
/// matches when its title contains every term, ignoring case.
pub fn search_terms(search: &str) -> Vec<String> {
    search
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe::new(
            Snowflake::new(1),
            "borscht".to_string(),
            NewRecipe {
                author_id: Snowflake::new(10),
                title: "Borscht".to_string(),
                short_text: "Beet soup".to_string(),
                full_text: "Boil beets".to_string(),
                preview_image: None,
                cooking_time: 90,
                tags: vec!["soup".to_string()],
                category_slugs: vec![],
                ingredients: vec![RecipeIngredient::new(" Beet ", "pcs", 3)],
            },
            vec![],
        )
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Grandma's Apple  Pie"), "grandmas-apple-pie");
        assert_eq!(slugify("  --Quick_Soup-- "), "quick-soup");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_search_terms() {
        assert_eq!(search_terms("beet  soup"), vec!["beet", "soup"]);
        assert_eq!(search_terms("pie,apple"), vec!["pie", "apple"]);
        assert!(search_terms(" , ").is_empty());
    }

    #[test]
    fn test_cooking_time_bounds() {
        assert!(Recipe::validate_cooking_time(10).is_ok());
        assert!(Recipe::validate_cooking_time(1440).is_ok());
        assert!(Recipe::validate_cooking_time(9).is_err());
        assert!(Recipe::validate_cooking_time(1441).is_err());
    }

    #[test]
    fn test_apply_update() {
        let mut recipe = sample();
        recipe
            .apply(RecipeUpdate {
                title: Some("Green Borscht".to_string()),
                cooking_time: Some(60),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(recipe.title, "Green Borscht");
        assert_eq!(recipe.cooking_time, 60);
        assert_eq!(recipe.slug, "borscht");
    }

    #[test]
    fn test_apply_rejects_bad_cooking_time() {
        let mut recipe = sample();
        let err = recipe
            .apply(RecipeUpdate {
                cooking_time: Some(5),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(recipe.cooking_time, 90);
    }

    #[test]
    fn test_new_recipe_trims_ingredients() {
        let recipe = sample();
        assert_eq!(recipe.ingredients, vec![RecipeIngredient::new("Beet", "pcs", 3)]);
    }

    #[test]
    fn test_apply_replaces_ingredients() {
        let mut recipe = sample();
        recipe
            .apply(RecipeUpdate {
                ingredients: Some(vec![
                    RecipeIngredient::new("Beet", "pcs", 2),
                    RecipeIngredient::new("Cabbage", "g", 300),
                ]),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].name, "Cabbage");
    }

    #[test]
    fn test_apply_rejects_bad_ingredients_atomically() {
        let mut recipe = sample();
        let err = recipe
            .apply(RecipeUpdate {
                title: Some("Changed".to_string()),
                ingredients: Some(vec![RecipeIngredient::new("Beet", "pcs", 0)]),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(recipe.title, "Borscht");
        assert_eq!(recipe.ingredients[0].amount, 3);
        assert!(!RecipeUpdate {
            ingredients: Some(vec![]),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_ownership() {
        let recipe = sample();
        assert!(recipe.is_owned_by(Snowflake::new(10)));
        assert!(!recipe.is_owned_by(Snowflake::new(11)));
    }
}
