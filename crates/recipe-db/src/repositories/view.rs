//! PostgreSQL implementation of ViewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::View;
use recipe_core::traits::{RepoResult, ViewRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of ViewRepository
#[derive(Clone)]
pub struct PgViewRepository {
    pool: PgPool,
}

impl PgViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewRepository for PgViewRepository {
    #[instrument(skip(self, view), fields(recipe_id = %view.recipe_id))]
    async fn record(&self, view: &View) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO views (id, user_id, recipe_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(view.id.into_inner())
        .bind(view.user_id.map(|id| id.into_inner()))
        .bind(view.recipe_id.into_inner())
        .bind(view.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
