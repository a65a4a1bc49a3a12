//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Create recipe request
#[derive(Debug, Serialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub short_text: String,
    pub full_text: String,
    pub cooking_time: i32,
    pub tag: Vec<String>,
    pub category: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient line, sent and read back in the same shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub unit: String,
    pub amount: i32,
}

impl Ingredient {
    pub fn new(name: &str, unit: &str, amount: i32) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            amount,
        }
    }
}

impl CreateRecipeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Soup {suffix}"),
            short_text: "A quick weeknight soup".to_string(),
            full_text: "Simmer everything for half an hour.".to_string(),
            cooking_time: 30,
            tag: vec!["quick".to_string()],
            category: vec!["soups".to_string()],
            ingredients: vec![Ingredient::new("beet", "pcs", 2)],
        }
    }
}

/// Partial recipe update
#[derive(Debug, Serialize)]
pub struct UpdateRecipeRequest {
    pub title: String,
}

/// Add reaction request
#[derive(Debug, Serialize)]
pub struct CreateReactionRequest {
    pub emoji: String,
}

impl CreateReactionRequest {
    pub fn new(emoji: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl CreateCommentRequest {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parent: None,
        }
    }
}

/// Follow request
#[derive(Debug, Serialize)]
pub struct CreateFollowRequest {
    pub author: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Paginated envelope
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Author summary
#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
}

/// Feed card
#[derive(Debug, Deserialize)]
pub struct FeedItemResponse {
    pub id: String,
    pub slug: String,
    pub author: AuthorResponse,
    pub reactions_count: i64,
    pub views_count: i64,
    pub comments_count: i64,
    pub activity_count: i64,
    pub is_favorite: bool,
}

/// Recipe detail
#[derive(Debug, Deserialize)]
pub struct RecipeDetailResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub author: AuthorResponse,
    pub cooking_time: i32,
    pub ingredients: Vec<Ingredient>,
    pub reactions_count: i64,
    pub views_count: i64,
}

/// Recipe update echo
#[derive(Debug, Deserialize)]
pub struct RecipeUpdateResponse {
    pub slug: String,
    pub title: String,
}

/// Favorites and search listing entry
#[derive(Debug, Deserialize)]
pub struct RecipeSummaryResponse {
    pub slug: String,
    pub title: String,
    pub comments_count: i64,
}

/// Created reaction
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: String,
    pub emoji: String,
    pub target_kind: String,
}

/// Per-emoji count
#[derive(Debug, Deserialize)]
pub struct ReactionCountResponse {
    pub emoji: String,
    pub count: i64,
}

/// Comment
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub text: String,
    pub parent: Option<String>,
}

/// Follow graph entry
#[derive(Debug, Deserialize)]
pub struct FollowUserResponse {
    pub id: String,
    pub username: String,
}

/// Following/followers entry
#[derive(Debug, Deserialize)]
pub struct FollowEntryResponse {
    pub user: FollowUserResponse,
    pub subscribers_count: i64,
}

/// `{"detail": ...}` body
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
