//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod favorite;
pub mod feed;
pub mod follow;
pub mod reaction;
pub mod recipe;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use feed::FeedService;
pub use follow::FollowService;
pub use reaction::ReactionService;
pub use recipe::RecipeService;
