//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in recipe-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod favorite;
mod feed;
mod follow;
mod reaction;
mod recipe;
mod user;
mod view;

pub use comment::PgCommentRepository;
pub use favorite::PgFavoriteRepository;
pub use feed::PgFeedRepository;
pub use follow::PgFollowRepository;
pub use reaction::PgReactionRepository;
pub use recipe::PgRecipeRepository;
pub use user::PgUserRepository;
pub use view::PgViewRepository;
