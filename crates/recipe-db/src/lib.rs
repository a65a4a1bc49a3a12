//! # recipe-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `recipe-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the aggregated feed query
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recipe_db::{create_pool, run_migrations, PgFeedRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/recipes")).await?;
//!     run_migrations(&pool).await?;
//!     let feed = PgFeedRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgCommentRepository, PgFavoriteRepository, PgFeedRepository, PgFollowRepository,
    PgReactionRepository, PgRecipeRepository, PgUserRepository, PgViewRepository,
};
