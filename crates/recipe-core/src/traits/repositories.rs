//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::entities::{
    Category, Comment, Favorite, Follow, FollowEntry, Reaction, ReactionCount, Recipe,
    RecipeDetail, RecipeSummary, User, View,
};
use crate::error::DomainError;
use crate::feed::{FeedItem, FeedQuery, Page, PageRequest};
use crate::value_objects::{Emoji, ReactionTarget, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username (case-sensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Insert a user record provisioned by the identity service
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Recipe Repository
// ============================================================================

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Find recipe by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Recipe>>;

    /// Find recipe by slug together with its author and all-time totals
    async fn find_detail(&self, slug: &str) -> RepoResult<Option<RecipeDetail>>;

    /// Check if a slug is taken
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;

    /// Resolve category slugs; unknown slugs are absent from the result
    async fn find_categories(&self, slugs: &[String]) -> RepoResult<Vec<Category>>;

    /// Insert a recipe with its tags and category links
    async fn create(&self, recipe: &Recipe) -> RepoResult<()>;

    /// Update the mutable recipe fields
    async fn update(&self, recipe: &Recipe) -> RepoResult<()>;

    /// Delete a recipe and everything attached to it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Recipes favorited by a user, newest first
    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<RecipeSummary>>;

    /// Recipes whose title contains every term (case-insensitive), newest
    /// first. No terms lists every recipe.
    async fn search(&self, terms: &[String], page: PageRequest) -> RepoResult<Page<RecipeSummary>>;
}

// ============================================================================
// Feed Repository
// ============================================================================

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Execute a feed query: filter, aggregate, sort and paginate in one pass.
    ///
    /// Returned items have `is_favorite = false`; favorites are annotated
    /// separately with [`FavoriteRepository::favorited_among`].
    async fn fetch_feed(&self, query: &FeedQuery) -> RepoResult<Page<FeedItem>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by ID, including soft-deleted ones
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Find the reaction row for `(author, target, emoji)`, deleted or not
    async fn find(
        &self,
        author_id: Snowflake,
        target: ReactionTarget,
        emoji: Emoji,
    ) -> RepoResult<Option<Reaction>>;

    /// Add a reaction
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Persist `is_deleted` and `pub_date` of an existing reaction
    async fn update(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Count active reactions by emoji on a target
    async fn count_by_emoji(&self, target: ReactionTarget) -> RepoResult<Vec<ReactionCount>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Comments on a recipe, oldest first
    async fn list_by_recipe(
        &self,
        recipe_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>>;

    /// Create a comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment text
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and its replies
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// View Repository
// ============================================================================

#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Record a view
    async fn record(&self, view: &View) -> RepoResult<()>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Check if a user favorited a recipe
    async fn exists(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool>;

    /// Add a favorite
    async fn create(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Remove a favorite; returns whether a row was removed
    async fn delete(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool>;

    /// Which of `recipe_ids` the user has favorited, in one lookup
    async fn favorited_among(
        &self,
        author_id: Snowflake,
        recipe_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check if `user_id` follows `author_id`
    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Create a follow
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow; returns whether a row was removed
    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Authors a user follows, newest subscription first
    async fn following(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>>;

    /// Users following an author, newest subscription first
    async fn followers(
        &self,
        author_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>>;
}
