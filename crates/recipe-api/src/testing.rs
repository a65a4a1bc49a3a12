//! Application state for unit tests, backed by a pool that never connects

use recipe_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, FeedConfig, JwtConfig,
    RateLimitConfig, ServerConfig, SnowflakeConfig,
};
use recipe_db::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::server::build_state;
use crate::state::AppState;

pub const TEST_SECRET: &str = "api-test-secret-key-that-is-long-enough";

pub fn test_config(env: Environment, worker_id: u16) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "recipe-server".to_string(),
            env,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/recipes".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 10,
            burst: 50,
        },
        cors: CorsConfig {
            allowed_origins: vec!["https://recipes.example.com".to_string()],
        },
        snowflake: SnowflakeConfig { worker_id },
        feed: FeedConfig::default(),
    }
}

pub fn lazy_pool(config: &AppConfig) -> PgPool {
    PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .unwrap()
}

pub fn test_state() -> AppState {
    let config = test_config(Environment::Development, 0);
    let pool = lazy_pool(&config);
    build_state(config, pool).unwrap()
}
