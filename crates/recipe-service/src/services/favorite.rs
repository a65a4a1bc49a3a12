//! Favorite service
//!
//! Adds and removes recipes from the caller's favorites.

use recipe_core::{DomainError, Favorite, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::recipe::RecipeService;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add the recipe to the user's favorites
    #[instrument(skip(self))]
    pub async fn add(&self, slug: &str, user_id: Snowflake) -> ServiceResult<()> {
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;

        if self.ctx.favorite_repo().exists(user_id, recipe.id).await? {
            return Err(DomainError::AlreadyFavorited.into());
        }

        let favorite = Favorite::new(self.ctx.generate_id(), user_id, recipe.id);
        self.ctx.favorite_repo().create(&favorite).await?;

        info!(recipe_id = %recipe.id, user_id = %user_id, "Recipe added to favorites");
        Ok(())
    }

    /// Remove the recipe from the user's favorites
    #[instrument(skip(self))]
    pub async fn remove(&self, slug: &str, user_id: Snowflake) -> ServiceResult<()> {
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;

        if !self.ctx.favorite_repo().delete(user_id, recipe.id).await? {
            return Err(DomainError::NotFavorited.into());
        }

        info!(recipe_id = %recipe.id, user_id = %user_id, "Recipe removed from favorites");
        Ok(())
    }
}
