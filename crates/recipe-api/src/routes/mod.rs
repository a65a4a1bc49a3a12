//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.
//! Paths keep their trailing slash.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{comments, favorites, feed, follows, health, reactions, recipes};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/feed/", get(feed::get_feed))
        .merge(recipe_routes())
        .merge(comment_routes())
        .merge(follow_routes())
}

/// Recipe, favorite and recipe reaction routes
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipe/",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/recipe/favorites/", get(recipes::list_favorites))
        .route(
            "/recipe/:slug/",
            get(recipes::get_recipe)
                .patch(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route(
            "/recipe/:slug/favorite/",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route(
            "/recipe/:slug/reactions/",
            get(reactions::get_recipe_reactions).post(reactions::add_recipe_reaction),
        )
        .route(
            "/recipe/:slug/reactions/:reaction_id/",
            delete(reactions::remove_recipe_reaction),
        )
}

/// Comment and comment reaction routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipe/:slug/comment/",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/recipe/:slug/comment/:comment_id/",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/comment/:comment_id/reactions/",
            get(reactions::get_comment_reactions).post(reactions::add_comment_reaction),
        )
        .route(
            "/comment/:comment_id/reactions/:reaction_id/",
            delete(reactions::remove_comment_reaction),
        )
}

/// Subscription routes
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/subscriptions/", post(follows::follow))
        .route("/subscriptions/:username/", delete(follows::unfollow))
        .route("/users/:username/following/", get(follows::list_following))
        .route("/users/:username/followers/", get(follows::list_followers))
}
