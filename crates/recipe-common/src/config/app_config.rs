//! Application configuration structs
//!
//! Loaded once from environment variables (and an optional `.env` file) at
//! process start, then passed down by value.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
    pub feed: FeedConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at start-up
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Feed ranking and listing settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Days of engagement that count towards `activity_count`
    #[serde(default = "default_activity_interval")]
    pub activity_interval_days: u32,
    /// Page size of the feed and the favorites listing
    #[serde(default = "default_feed_page_size")]
    pub page_size: u32,
    #[serde(default = "default_comment_page_size")]
    pub comment_page_size: u32,
    #[serde(default = "default_follow_page_size")]
    pub follow_page_size: u32,
    /// Prefix for absolute pagination links, e.g. `https://api.example.com`
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            activity_interval_days: default_activity_interval(),
            page_size: default_feed_page_size(),
            comment_page_size: default_comment_page_size(),
            follow_page_size: default_follow_page_size(),
            public_base_url: None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "recipe-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_refresh_token_expiry() -> i64 {
    604800 // 7 days
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_activity_interval() -> u32 {
    30
}

fn default_feed_page_size() -> u32 {
    6
}

fn default_comment_page_size() -> u32 {
    10
}

fn default_follow_page_size() -> u32 {
    10
}

/// Longest accepted `ACTIVITY_INTERVAL`, about a century
const MAX_ACTIVITY_INTERVAL_DAYS: u32 = 36_500;

/// Read an optional variable, failing on a present but unparsable value
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl FeedConfig {
    /// Load the feed section from `ACTIVITY_INTERVAL`, `FEED_PAGE_SIZE`,
    /// `COMMENT_PAGE_SIZE`, `FOLLOW_PAGE_SIZE` and `PUBLIC_BASE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            activity_interval_days: parse_var("ACTIVITY_INTERVAL")?
                .unwrap_or_else(default_activity_interval),
            page_size: parse_var("FEED_PAGE_SIZE")?.unwrap_or_else(default_feed_page_size),
            comment_page_size: parse_var("COMMENT_PAGE_SIZE")?
                .unwrap_or_else(default_comment_page_size),
            follow_page_size: parse_var("FOLLOW_PAGE_SIZE")?
                .unwrap_or_else(default_follow_page_size),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Page sizes must be positive and the activity interval must lie in
    /// `1..=MAX_ACTIVITY_INTERVAL_DAYS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ACTIVITY_INTERVAL_DAYS).contains(&self.activity_interval_days) {
            return Err(ConfigError::InvalidValue(
                "ACTIVITY_INTERVAL",
                self.activity_interval_days.to_string(),
            ));
        }
        for (name, value) in [
            ("FEED_PAGE_SIZE", self.page_size),
            ("COMMENT_PAGE_SIZE", self.comment_page_size),
            ("FOLLOW_PAGE_SIZE", self.follow_page_size),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue(name, value.to_string()));
            }
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or a
    /// numeric variable does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var("DATABASE_RUN_MIGRATIONS")?
                    .unwrap_or_else(default_run_migrations),
            },
            jwt: JwtConfig {
                secret: required_var("JWT_SECRET")?,
                access_token_expiry: parse_var("JWT_ACCESS_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_access_token_expiry),
                refresh_token_expiry: parse_var("JWT_REFRESH_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_refresh_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig {
                worker_id: parse_var("WORKER_ID")?.unwrap_or(0),
            },
            feed: FeedConfig::from_env()?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
