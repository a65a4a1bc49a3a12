//! Path parameter extractors
//!
//! Slugs and usernames pass through as strings; Snowflake ids are parsed
//! here so a malformed id is a 400 rather than a lookup miss.

use recipe_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// `/recipe/:slug/comment/:comment_id/`
#[derive(Debug, Deserialize)]
pub struct RecipeCommentPath {
    pub slug: String,
    pub comment_id: String,
}

impl RecipeCommentPath {
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }
}

/// `/recipe/:slug/reactions/:reaction_id/`
#[derive(Debug, Deserialize)]
pub struct RecipeReactionPath {
    pub slug: String,
    pub reaction_id: String,
}

impl RecipeReactionPath {
    pub fn reaction_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.reaction_id, "reaction_id")
    }
}

/// `/comment/:comment_id/reactions/`
#[derive(Debug, Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }
}

/// `/comment/:comment_id/reactions/:reaction_id/`
#[derive(Debug, Deserialize)]
pub struct CommentReactionPath {
    pub comment_id: String,
    pub reaction_id: String,
}

impl CommentReactionPath {
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }

    pub fn reaction_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.reaction_id, "reaction_id")
    }
}
