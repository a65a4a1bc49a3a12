//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use recipe_core::entities::Comment;
use recipe_core::error::DomainError;
use recipe_core::feed::{Page, PageRequest};
use recipe_core::traits::{CommentRepository, RepoResult};
use recipe_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, author_id, recipe_id, text, parent_id, pub_date, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_recipe(
        &self,
        recipe_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE recipe_id = $1")
            .bind(recipe_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, author_id, recipe_id, text, parent_id, pub_date, updated_at
            FROM comments
            WHERE recipe_id = $1
            ORDER BY pub_date ASC, id ASC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(recipe_id.into_inner())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            page,
            count,
            rows.into_iter().map(Comment::from).collect(),
        ))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, recipe_id = %comment.recipe_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, author_id, recipe_id, text, parent_id, pub_date, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(comment.recipe_id.into_inner())
        .bind(&comment.text)
        .bind(comment.parent_id.map(|id| id.into_inner()))
        .bind(comment.pub_date)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query("UPDATE comments SET text = $2, updated_at = $3 WHERE id = $1")
            .bind(comment.id.into_inner())
            .bind(&comment.text)
            .bind(comment.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Replies go with the parent via ON DELETE CASCADE; their reactions do not
        sqlx::query(
            r"
            WITH RECURSIVE thread AS (
                SELECT id FROM comments WHERE id = $1
                UNION ALL
                SELECT c.id FROM comments c JOIN thread t ON c.parent_id = t.id
            )
            DELETE FROM reactions
            WHERE target_kind = 'comment' AND target_id IN (SELECT id FROM thread)
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}
