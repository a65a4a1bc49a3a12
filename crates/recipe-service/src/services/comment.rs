//! Comment service
//!
//! Handles threaded comments on recipes.

use chrono::Utc;
use recipe_core::{Comment, DomainError, Page, PageRequest, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::recipe::RecipeService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments of a recipe, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, slug: &str, page: u32) -> ServiceResult<Page<Comment>> {
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;
        let request = PageRequest::new(page, self.ctx.feed_config().comment_page_size)?;

        let page = self
            .ctx
            .comment_repo()
            .list_by_recipe(recipe.id, request)
            .await?;
        if page.is_out_of_range() {
            return Err(DomainError::PageNotFound.into());
        }
        Ok(page)
    }

    /// Comment on a recipe, optionally replying to another comment of it
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        slug: &str,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<Comment> {
        request.validate()?;
        Comment::validate_text(&request.text)?;
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;

        let parent_id = match request.parent.as_deref() {
            Some(raw) => {
                let id = Snowflake::parse(raw)
                    .map_err(|_| ServiceError::validation(format!("Invalid parent id: {raw}")))?;
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(id))?;
                if parent.recipe_id != recipe.id {
                    return Err(DomainError::InvalidParentComment.into());
                }
                Some(id)
            }
            None => None,
        };

        let comment = Comment::new(
            self.ctx.generate_id(),
            author_id,
            recipe.id,
            request.text,
            parent_id,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, recipe_id = %recipe.id, "Comment created");
        Ok(comment)
    }

    /// Edit a comment within its edit window
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        slug: &str,
        comment_id: Snowflake,
        author_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<Comment> {
        request.validate()?;
        let mut comment = self.load_owned(slug, comment_id, author_id).await?;

        comment.edit(request.text, Utc::now())?;
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment edited");
        Ok(comment)
    }

    /// Delete a comment and its replies
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        slug: &str,
        comment_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<()> {
        self.load_owned(slug, comment_id, author_id).await?;
        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    async fn load_owned(
        &self,
        slug: &str,
        comment_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<Comment> {
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.recipe_id == recipe.id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.author_id != author_id {
            return Err(DomainError::NotCommentAuthor.into());
        }
        Ok(comment)
    }
}
