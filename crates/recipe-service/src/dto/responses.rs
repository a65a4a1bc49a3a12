//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use recipe_core::{Category, Emoji, Page, RecipeIngredient};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Page-number paginated response
///
/// `next` and `previous` are absolute links, or `null` at either end.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page, asking `link` for the URL of a neighbouring page number
    pub fn from_page<F>(page: Page<T>, link: F) -> Self
    where
        F: Fn(u32) -> String,
    {
        let next = page.has_next().then(|| link(page.page + 1));
        let previous = page.has_previous().then(|| link(page.page - 1));
        Self {
            count: page.count,
            next,
            previous,
            results: page.results,
        }
    }
}

/// Plain `{"detail": ...}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Author summary embedded in recipes
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// One recipe card of the feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedItemResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub author: AuthorResponse,
    pub preview_image: Option<String>,
    pub short_text: String,
    pub tag: Vec<String>,
    pub category: Vec<Category>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub reactions_count: i64,
    pub views_count: i64,
    pub comments_count: i64,
    pub activity_count: i64,
    pub is_favorite: bool,
}

// ============================================================================
// Recipe Responses
// ============================================================================

/// Single recipe, returned by read and create
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetailResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub title: String,
    pub slug: String,
    pub short_text: String,
    pub full_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub tag: Vec<String>,
    pub category: Vec<Category>,
    pub ingredients: Vec<RecipeIngredient>,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reactions_count: i64,
    pub views_count: i64,
}

/// Editable fields echoed back after an update
#[derive(Debug, Clone, Serialize)]
pub struct RecipeUpdateResponse {
    pub slug: String,
    pub title: String,
    pub short_text: String,
    pub full_text: String,
    pub cooking_time: i32,
    pub ingredients: Vec<RecipeIngredient>,
    pub updated_at: DateTime<Utc>,
}

/// List entry of the favorites and search listings
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub author: AuthorResponse,
    pub preview_image: Option<String>,
    pub short_text: String,
    pub tag: Vec<String>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub reactions_count: i64,
    pub views_count: i64,
    pub comments_count: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub emoji: Emoji,
    pub target_kind: &'static str,
    pub target_id: String,
    pub pub_date: DateTime<Utc>,
}

/// Number of active reactions with one emoji
#[derive(Debug, Clone, Serialize)]
pub struct ReactionCountResponse {
    pub emoji: Emoji,
    pub count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub recipe: String,
    pub text: String,
    pub parent: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Follow Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FollowUserResponse {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// Entry of a following/followers listing
#[derive(Debug, Clone, Serialize)]
pub struct FollowEntryResponse {
    pub id: String,
    pub user: FollowUserResponse,
    pub subscribers_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
