//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod feed;
mod follow;
mod reaction;
mod recipe;
mod user;

pub use comment::CommentModel;
pub use feed::FeedRowModel;
pub use follow::FollowEntryModel;
pub use reaction::{ReactionCountModel, ReactionModel};
pub use recipe::{
    CategoryModel, IngredientModel, RecipeDetailModel, RecipeModel, RecipeSummaryModel,
};
pub use user::UserModel;
