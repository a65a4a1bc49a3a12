//! Service context - dependency container for services
//!
//! Holds all repositories, the feed configuration and the id generator needed by services.

use std::sync::Arc;

use recipe_common::{FeedConfig, JwtService};
use recipe_core::traits::{
    CommentRepository, FavoriteRepository, FeedRepository, FollowRepository, ReactionRepository,
    RecipeRepository, UserRepository, ViewRepository,
};
use recipe_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (ports implemented by `recipe-db`)
/// - The immutable feed configuration loaded at start-up
/// - JWT service for bearer token verification
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    recipe_repo: Arc<dyn RecipeRepository>,
    feed_repo: Arc<dyn FeedRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    view_repo: Arc<dyn ViewRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    follow_repo: Arc<dyn FollowRepository>,

    // Configuration
    feed_config: Arc<FeedConfig>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn recipe_repo(&self) -> &dyn RecipeRepository {
        self.recipe_repo.as_ref()
    }

    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn view_repo(&self) -> &dyn ViewRepository {
        self.view_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    // === Configuration ===

    /// Get the feed configuration
    pub fn feed_config(&self) -> &FeedConfig {
        self.feed_config.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("feed_config", &self.feed_config)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    recipe_repo: Option<Arc<dyn RecipeRepository>>,
    feed_repo: Option<Arc<dyn FeedRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    view_repo: Option<Arc<dyn ViewRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    feed_config: Option<FeedConfig>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn recipe_repo(mut self, repo: Arc<dyn RecipeRepository>) -> Self {
        self.recipe_repo = Some(repo);
        self
    }

    pub fn feed_repo(mut self, repo: Arc<dyn FeedRepository>) -> Self {
        self.feed_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn view_repo(mut self, repo: Arc<dyn ViewRepository>) -> Self {
        self.view_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn feed_config(mut self, config: FeedConfig) -> Self {
        self.feed_config = Some(config);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            recipe_repo: required(self.recipe_repo, "recipe_repo")?,
            feed_repo: required(self.feed_repo, "feed_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            view_repo: required(self.view_repo, "view_repo")?,
            favorite_repo: required(self.favorite_repo, "favorite_repo")?,
            follow_repo: required(self.follow_repo, "follow_repo")?,
            feed_config: Arc::new(self.feed_config.unwrap_or_default()),
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
