//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::{Follow, FollowEntry};
use recipe_core::error::DomainError;
use recipe_core::feed::{Page, PageRequest};
use recipe_core::traits::{FollowRepository, RepoResult};
use recipe_core::value_objects::Snowflake;

use crate::models::FollowEntryModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Shared listing query. `side` is the column naming the listed user,
    /// `owner` the column matched against `$1`.
    async fn list(
        &self,
        owner: &'static str,
        side: &'static str,
        id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>> {
        let count_sql = format!("SELECT COUNT(*) FROM follows WHERE {owner} = $1");
        let count = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            r"
            SELECT f.id, u.id AS user_id, u.username, u.display_name, u.avatar,
                   (SELECT COUNT(*) FROM follows s WHERE s.author_id = u.id) AS subscribers_count
            FROM follows f
            JOIN users u ON u.id = f.{side}
            WHERE f.{owner} = $1
            ORDER BY f.created_at DESC, f.id DESC
            LIMIT $2 OFFSET $3
            "
        );
        let rows = sqlx::query_as::<_, FollowEntryModel>(&sql)
            .bind(id.into_inner())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            page,
            count,
            rows.into_iter().map(FollowEntry::from).collect(),
        ))
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
        )
        .bind(user_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, follow), fields(user_id = %follow.user_id, author_id = %follow.author_id))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (id, user_id, author_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(follow.id.into_inner())
        .bind(follow.user_id.into_inner())
        .bind(follow.author_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_check_violation()) {
                return DomainError::CannotFollowSelf;
            }
            map_unique_violation(e, || {
                DomainError::AlreadyFollowing(follow.author_id.to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id.into_inner())
            .bind(author_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn following(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>> {
        self.list("user_id", "author_id", user_id, page).await
    }

    #[instrument(skip(self))]
    async fn followers(
        &self,
        author_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>> {
        self.list("author_id", "user_id", author_id, page).await
    }
}
