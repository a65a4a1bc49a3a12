//! Recipe service
//!
//! Handles recipe creation, reading (which records a view), owner-only
//! updates and deletes, the viewer's favorites listing and title search.
//! Every method renders through the `OperationKind` it serves.

use rand::Rng;
use recipe_core::{
    search_terms, slugify, validate_ingredients, DomainError, NewRecipe, PageRequest, Recipe,
    RecipeIngredient, RecipeUpdate, Snowflake, View,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CreateRecipeRequest, IngredientRequest, OperationKind, RecipeOutput, RecipePayload,
    UpdateRecipeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attempts at finding a free slug before giving up
const SLUG_ATTEMPTS: usize = 5;

/// Recipe service
pub struct RecipeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecipeService<'a> {
    /// Create a new RecipeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new recipe
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateRecipeRequest,
    ) -> ServiceResult<RecipeOutput> {
        request.validate()?;
        Recipe::validate_cooking_time(request.cooking_time)?;
        let ingredients = to_ingredients(request.ingredients);
        validate_ingredients(&ingredients)?;

        self.ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(author_id.to_string()))?;

        let mut slugs = request.categories.clone();
        slugs.sort();
        slugs.dedup();
        let categories = self.ctx.recipe_repo().find_categories(&slugs).await?;
        if let Some(unknown) = slugs
            .iter()
            .find(|slug| !categories.iter().any(|c| &c.slug == *slug))
        {
            return Err(ServiceError::validation(format!("Unknown category: {unknown}")));
        }

        let base = match slugify(&request.title) {
            slug if slug.is_empty() => "recipe".to_string(),
            slug => slug,
        };
        let input = NewRecipe {
            author_id,
            title: request.title,
            short_text: request.short_text,
            full_text: request.full_text,
            preview_image: request.preview_image,
            cooking_time: request.cooking_time,
            tags: request.tags,
            category_slugs: slugs,
            ingredients,
        };

        let mut candidate = base.clone();
        for _ in 0..SLUG_ATTEMPTS {
            if self.ctx.recipe_repo().slug_exists(&candidate).await? {
                candidate = with_suffix(&base);
                continue;
            }

            let recipe = Recipe::new(
                self.ctx.generate_id(),
                candidate.clone(),
                input.clone(),
                categories.clone(),
            );
            match self.ctx.recipe_repo().create(&recipe).await {
                Ok(()) => {
                    info!(recipe_id = %recipe.id, slug = %recipe.slug, "Recipe created");
                    let detail = self.load_detail(&recipe.slug).await?;
                    return RecipeOutput::render(OperationKind::Create, RecipePayload::One(detail));
                }
                Err(DomainError::SlugExists(slug)) => {
                    warn!(slug = %slug, "Slug taken concurrently, retrying");
                    candidate = with_suffix(&base);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::SlugExists(base).into())
    }

    /// Read a recipe, recording a view by `viewer` (anonymous when `None`)
    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str, viewer: Option<Snowflake>) -> ServiceResult<RecipeOutput> {
        let recipe = self.load_recipe(slug).await?;

        self.ctx
            .view_repo()
            .record(&View::new(self.ctx.generate_id(), viewer, recipe.id))
            .await?;

        let detail = self.load_detail(slug).await?;
        RecipeOutput::render(OperationKind::List, RecipePayload::One(detail))
    }

    /// Update the editable fields of a recipe owned by `user_id`
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        slug: &str,
        user_id: Snowflake,
        request: UpdateRecipeRequest,
    ) -> ServiceResult<RecipeOutput> {
        request.validate()?;

        let mut recipe = self.load_recipe(slug).await?;
        if !recipe.is_owned_by(user_id) {
            return Err(DomainError::NotRecipeAuthor.into());
        }

        let update = RecipeUpdate {
            title: request.title,
            short_text: request.short_text,
            full_text: request.full_text,
            cooking_time: request.cooking_time,
            ingredients: request.ingredients.map(to_ingredients),
        };
        if !update.is_empty() {
            recipe.apply(update)?;
            self.ctx.recipe_repo().update(&recipe).await?;
            info!(recipe_id = %recipe.id, "Recipe updated");
        }

        let detail = self.load_detail(slug).await?;
        RecipeOutput::render(OperationKind::Update, RecipePayload::One(detail))
    }

    /// Delete a recipe owned by `user_id`
    #[instrument(skip(self))]
    pub async fn delete(&self, slug: &str, user_id: Snowflake) -> ServiceResult<RecipeOutput> {
        let recipe = self.load_recipe(slug).await?;
        if !recipe.is_owned_by(user_id) {
            return Err(DomainError::NotRecipeAuthor.into());
        }

        self.ctx.recipe_repo().delete(recipe.id).await?;
        info!(recipe_id = %recipe.id, "Recipe deleted");

        RecipeOutput::render(OperationKind::Delete, RecipePayload::Nothing)
    }

    /// The viewer's favorite recipes, newest first
    #[instrument(skip(self))]
    pub async fn favorites(&self, user_id: Snowflake, page: u32) -> ServiceResult<RecipeOutput> {
        let request = PageRequest::new(page, self.ctx.feed_config().page_size)?;
        let page = self
            .ctx
            .recipe_repo()
            .list_favorites(user_id, request)
            .await?;

        if page.is_out_of_range() {
            return Err(DomainError::PageNotFound.into());
        }

        RecipeOutput::render(OperationKind::Favorites, RecipePayload::Many(page))
    }

    /// Recipes whose title contains every term of `search`, newest first.
    /// A blank or missing search lists every recipe.
    #[instrument(skip(self))]
    pub async fn search(&self, search: Option<&str>, page: u32) -> ServiceResult<RecipeOutput> {
        let terms = search.map(search_terms).unwrap_or_default();
        let request = PageRequest::new(page, self.ctx.feed_config().page_size)?;
        let page = self.ctx.recipe_repo().search(&terms, request).await?;

        if page.is_out_of_range() {
            return Err(DomainError::PageNotFound.into());
        }

        RecipeOutput::render(OperationKind::Search, RecipePayload::Many(page))
    }

    /// Find a recipe by slug or fail with `RecipeNotFound`
    pub async fn load_recipe(&self, slug: &str) -> ServiceResult<Recipe> {
        self.ctx
            .recipe_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::RecipeNotFound(slug.to_string()).into())
    }

    async fn load_detail(&self, slug: &str) -> ServiceResult<recipe_core::RecipeDetail> {
        self.ctx
            .recipe_repo()
            .find_detail(slug)
            .await?
            .ok_or_else(|| DomainError::RecipeNotFound(slug.to_string()).into())
    }
}

fn to_ingredients(requests: Vec<IngredientRequest>) -> Vec<RecipeIngredient> {
    requests
        .into_iter()
        .map(|i| RecipeIngredient::new(i.name, i.unit, i.amount))
        .collect()
}

/// `base` followed by a dash and six random lowercase alphanumerics
fn with_suffix(base: &str) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LENGTH: usize = 6;

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{base}-{suffix}")
}
