//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::{Reaction, ReactionCount};
use recipe_core::error::DomainError;
use recipe_core::traits::{ReactionRepository, RepoResult};
use recipe_core::value_objects::{Emoji, ReactionTarget, Snowflake};

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, author_id, target_kind, target_id, emoji, pub_date, is_deleted
            FROM reactions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        author_id: Snowflake,
        target: ReactionTarget,
        emoji: Emoji,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, author_id, target_kind, target_id, emoji, pub_date, is_deleted
            FROM reactions
            WHERE author_id = $1 AND target_kind = $2 AND target_id = $3 AND emoji = $4
            ",
        )
        .bind(author_id.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .bind(emoji.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, reaction), fields(reaction_id = %reaction.id, emoji = %reaction.emoji))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reactions (id, author_id, target_kind, target_id, emoji, pub_date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.author_id.into_inner())
        .bind(reaction.target.kind.as_str())
        .bind(reaction.target.id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.pub_date)
        .bind(reaction.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadySet))?;

        Ok(())
    }

    #[instrument(skip(self, reaction), fields(reaction_id = %reaction.id, is_deleted = reaction.is_deleted))]
    async fn update(&self, reaction: &Reaction) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reactions
            SET is_deleted = $2
            WHERE id = $1
            ",
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound(reaction.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_emoji(&self, target: ReactionTarget) -> RepoResult<Vec<ReactionCount>> {
        let rows = sqlx::query_as::<_, ReactionCountModel>(
            r"
            SELECT emoji, COUNT(*) AS count
            FROM reactions
            WHERE target_kind = $1 AND target_id = $2 AND NOT is_deleted
            GROUP BY emoji
            ORDER BY count DESC, emoji
            ",
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ReactionCount::try_from).collect()
    }
}
