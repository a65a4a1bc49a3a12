//! Reaction service
//!
//! Handles emoji reactions on recipes and comments (add, soft delete, counts).

use recipe_core::{DomainError, Emoji, Reaction, ReactionCount, ReactionTarget, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::recipe::RecipeService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the reaction target of a recipe slug
    pub async fn recipe_target(&self, slug: &str) -> ServiceResult<ReactionTarget> {
        let recipe = RecipeService::new(self.ctx).load_recipe(slug).await?;
        Ok(ReactionTarget::recipe(recipe.id))
    }

    /// Resolve the reaction target of a comment id
    pub async fn comment_target(&self, comment_id: Snowflake) -> ServiceResult<ReactionTarget> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        Ok(ReactionTarget::comment(comment_id))
    }

    /// Add a reaction, reactivating a soft-deleted one with the same emoji
    ///
    /// # Errors
    /// `ReactionAlreadySet` when the author already has this emoji active on the target.
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        author_id: Snowflake,
        target: ReactionTarget,
        emoji: Emoji,
    ) -> ServiceResult<Reaction> {
        let existing = self
            .ctx
            .reaction_repo()
            .find(author_id, target, emoji)
            .await?;

        let reaction = match existing {
            Some(reaction) if reaction.is_active() => {
                return Err(DomainError::ReactionAlreadySet.into());
            }
            Some(mut reaction) => {
                reaction.reactivate();
                self.ctx.reaction_repo().update(&reaction).await?;
                reaction
            }
            None => {
                let reaction = Reaction::new(self.ctx.generate_id(), author_id, target, emoji);
                self.ctx.reaction_repo().create(&reaction).await?;
                reaction
            }
        };

        info!(
            reaction_id = %reaction.id,
            target_kind = target.kind.as_str(),
            target_id = %target.id,
            emoji = emoji.as_str(),
            "Reaction added"
        );
        Ok(reaction)
    }

    /// Soft delete one of the author's reactions on `target`
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        author_id: Snowflake,
        target: ReactionTarget,
        reaction_id: Snowflake,
    ) -> ServiceResult<()> {
        let mut reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(reaction_id)
            .await?
            .filter(|r| r.target == target && r.is_active())
            .ok_or(DomainError::ReactionNotFound(reaction_id))?;

        if reaction.author_id != author_id {
            return Err(DomainError::NotReactionAuthor.into());
        }

        reaction.is_deleted = true;
        self.ctx.reaction_repo().update(&reaction).await?;

        info!(reaction_id = %reaction_id, "Reaction removed");
        Ok(())
    }

    /// Per-emoji counts of active reactions on `target`
    #[instrument(skip(self))]
    pub async fn counts(&self, target: ReactionTarget) -> ServiceResult<Vec<ReactionCount>> {
        Ok(self.ctx.reaction_repo().count_by_emoji(target).await?)
    }
}
