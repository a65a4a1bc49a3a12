//! Domain entities - core business objects

mod comment;
mod favorite;
mod follow;
mod ingredient;
mod reaction;
mod recipe;
mod user;
mod view;

pub use comment::Comment;
pub use favorite::Favorite;
pub use follow::{Follow, FollowEntry};
pub use ingredient::{validate_ingredients, RecipeIngredient};
pub use reaction::{Reaction, ReactionCount};
pub use recipe::{
    search_terms, slugify, Category, NewRecipe, Recipe, RecipeDetail, RecipeSummary, RecipeUpdate,
};
pub use user::{Author, User};
pub use view::View;
