//! # recipe-core
//!
//! Domain layer containing entities, value objects, feed query types and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod feed;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    search_terms, slugify, validate_ingredients, Author, Category, Comment, Favorite, Follow,
    FollowEntry, NewRecipe, Reaction, ReactionCount, Recipe, RecipeDetail, RecipeIngredient,
    RecipeSummary, RecipeUpdate, User, View,
};
pub use error::DomainError;
pub use feed::{
    ActivityCounts, FeedFilter, FeedItem, FeedOrdering, FeedQuery, FeedQueryBuilder, Page,
    PageRequest,
};
pub use traits::{
    CommentRepository, FavoriteRepository, FeedRepository, FollowRepository, ReactionRepository,
    RecipeRepository, RepoResult, UserRepository, ViewRepository,
};
pub use value_objects::{
    Emoji, EmojiParseError, ReactionTarget, Snowflake, SnowflakeGenerator, SnowflakeParseError,
    TargetKind,
};
