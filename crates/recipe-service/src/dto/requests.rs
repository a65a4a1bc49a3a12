//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use recipe_core::Emoji;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Feed Requests
// ============================================================================

/// Feed query parameters after structural validation
///
/// `ordering` and `filter` stay raw: unknown values fall back to defaults
/// instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRequest {
    pub ordering: Option<String>,
    pub filter: Option<String>,
    pub username: Option<String>,
    pub page: u32,
}

impl FeedRequest {
    pub fn first_page() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }
}

// ============================================================================
// Recipe Requests
// ============================================================================

/// Create recipe request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Short text must be 1-200 characters"))]
    pub short_text: String,

    #[validate(length(min = 1, message = "Full text must not be empty"))]
    pub full_text: String,

    #[validate(range(min = 10, max = 1440, message = "Cooking time must be 10-1440 minutes"))]
    pub cooking_time: i32,

    /// Free-form tags
    #[serde(default, rename = "tag", alias = "tags")]
    pub tags: Vec<String>,

    /// Category slugs
    #[serde(default, rename = "category", alias = "categories")]
    #[validate(length(min = 1, message = "At least one category is required"))]
    pub categories: Vec<String>,

    pub preview_image: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<IngredientRequest>,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IngredientRequest {
    #[validate(length(min = 1, max = 100, message = "Ingredient must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 30, message = "Unit must be 1-30 characters"))]
    pub unit: String,

    #[validate(range(min = 1, max = 1000, message = "Amount must be 1-1000"))]
    pub amount: i32,
}

/// Partial recipe update request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Short text must be 1-200 characters"))]
    pub short_text: Option<String>,

    #[validate(length(min = 1, message = "Full text must not be empty"))]
    pub full_text: Option<String>,

    #[validate(range(min = 10, max = 1440, message = "Cooking time must be 10-1440 minutes"))]
    pub cooking_time: Option<i32>,

    /// Replaces every ingredient line when present
    #[validate(nested)]
    pub ingredients: Option<Vec<IngredientRequest>>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    pub emoji: Emoji,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub text: String,

    /// Parent comment ID (Snowflake as string) for replies
    pub parent: Option<String>,
}

/// Edit comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub text: String,
}

// ============================================================================
// Follow Requests
// ============================================================================

/// Subscribe to an author
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFollowRequest {
    /// Username of the author to follow
    #[validate(length(min = 1, max = 150, message = "Author must be 1-150 characters"))]
    pub author: String,
}
