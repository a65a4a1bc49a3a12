//! Recipe database models

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for recipes table, with tags, categories and ingredient
/// lines folded in through array/json sub-selects
#[derive(Debug, Clone, FromRow)]
pub struct RecipeModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub short_text: String,
    pub full_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub categories: Json<Vec<CategoryModel>>,
    pub ingredients: Json<Vec<IngredientModel>>,
}

/// Category as produced by `json_build_object('name', .., 'slug', ..)`
#[derive(Debug, Clone, FromRow, Deserialize)]
pub struct CategoryModel {
    pub name: String,
    pub slug: String,
}

/// Ingredient line as produced by `json_build_object('name', .., 'unit', .., 'amount', ..)`
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientModel {
    pub name: String,
    pub unit: String,
    pub amount: i32,
}

/// Recipe joined with its author and all-time reaction/view totals
#[derive(Debug, Clone, FromRow)]
pub struct RecipeDetailModel {
    #[sqlx(flatten)]
    pub recipe: RecipeModel,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar: Option<String>,
    pub reactions_count: i64,
    pub views_count: i64,
}

/// Row of the favorites listing and title search
#[derive(Debug, Clone, FromRow)]
pub struct RecipeSummaryModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub short_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub author_id: i64,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar: Option<String>,
    pub reactions_count: i64,
    pub views_count: i64,
    pub comments_count: i64,
}
