//! PostgreSQL implementation of FavoriteRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::Favorite;
use recipe_core::error::DomainError;
use recipe_core::traits::{FavoriteRepository, RepoResult};
use recipe_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn exists(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM favorites WHERE author_id = $1 AND recipe_id = $2)
            ",
        )
        .bind(author_id.into_inner())
        .bind(recipe_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, favorite), fields(recipe_id = %favorite.recipe_id))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO favorites (id, author_id, recipe_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(favorite.id.into_inner())
        .bind(favorite.author_id.into_inner())
        .bind(favorite.recipe_id.into_inner())
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFavorited))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE author_id = $1 AND recipe_id = $2")
            .bind(author_id.into_inner())
            .bind(recipe_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, recipe_ids), fields(candidates = recipe_ids.len()))]
    async fn favorited_among(
        &self,
        author_id: Snowflake,
        recipe_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        if recipe_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i64> = recipe_ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_scalar::<_, i64>(
            r"
            SELECT recipe_id
            FROM favorites
            WHERE author_id = $1 AND recipe_id = ANY($2)
            ",
        )
        .bind(author_id.into_inner())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Snowflake::new).collect())
    }
}
