//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use recipe_common::{AppConfig, AppError, JwtService};
use recipe_core::SnowflakeGenerator;
use recipe_db::{
    create_pool, run_migrations, PgCommentRepository, PgFavoriteRepository, PgFeedRepository,
    PgFollowRepository, PgReactionRepository, PgRecipeRepository, PgUserRepository,
    PgPool, PgViewRepository, PoolConfig,
};
use recipe_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Highest worker id a snowflake generator accepts
const MAX_WORKER_ID: u16 = 1023;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks sit outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    check_worker_id(&config)?;

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    build_state(config, pool)
}

/// Wire repositories and services around an existing pool
pub fn build_state(config: AppConfig, pool: PgPool) -> Result<AppState, AppError> {
    check_worker_id(&config)?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .recipe_repo(Arc::new(PgRecipeRepository::new(pool.clone())))
        .feed_repo(Arc::new(PgFeedRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .view_repo(Arc::new(PgViewRepository::new(pool.clone())))
        .favorite_repo(Arc::new(PgFavoriteRepository::new(pool.clone())))
        .follow_repo(Arc::new(PgFollowRepository::new(pool.clone())))
        .feed_config(config.feed.clone())
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

fn check_worker_id(config: &AppConfig) -> Result<(), AppError> {
    if config.snowflake.worker_id > MAX_WORKER_ID {
        return Err(AppError::Config(format!(
            "WORKER_ID must be at most {MAX_WORKER_ID}"
        )));
    }
    Ok(())
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lazy_pool, test_config};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use recipe_common::Environment;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_production_app_serves_liveness() {
        let config = test_config(Environment::Production, 1);
        let pool = lazy_pool(&config);
        let app = create_app(build_state(config, pool).unwrap());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_development_app_builds() {
        let config = test_config(Environment::Development, 0);
        let pool = lazy_pool(&config);
        let state = build_state(config, pool).unwrap();
        assert!(!state.config().app.env.is_production());
        let _app = create_app(state);
    }

    #[tokio::test]
    async fn test_worker_id_out_of_range_rejected() {
        let result = create_app_state(test_config(Environment::Development, 2048)).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
