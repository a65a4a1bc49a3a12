//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paths and pagination.

mod auth;
mod links;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use links::PageLinks;
pub use path::{CommentIdPath, CommentReactionPath, RecipeCommentPath, RecipeReactionPath};
pub use query::{FeedParams, FeedQueryParams, PageNumber, PageParams, SearchParams, SearchQuery};
pub use validated::ValidatedJson;
