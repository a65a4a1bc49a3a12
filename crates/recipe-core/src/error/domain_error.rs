//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(Snowflake),

    #[error("Not following {0}")]
    FollowNotFound(String),

    #[error("Invalid page")]
    PageNotFound,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Missing authentication")]
    AuthenticationRequired,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Parent comment belongs to another recipe")]
    InvalidParentComment,

    #[error("You cannot follow yourself")]
    CannotFollowSelf,

    #[error("Recipe is already in favorites")]
    AlreadyFavorited,

    #[error("Recipe is not in favorites")]
    NotFavorited,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not recipe author")]
    NotRecipeAuthor,

    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("Not reaction author")]
    NotReactionAuthor,

    #[error("Comment can no longer be edited")]
    EditWindowExpired,

    #[error("Reaction is already set")]
    ReactionAlreadySet,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already following {0}")]
    AlreadyFollowing(String),

    #[error("Recipe slug already exists: {0}")]
    SlugExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RecipeNotFound(_) => "UNKNOWN_RECIPE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::FollowNotFound(_) => "UNKNOWN_SUBSCRIPTION",
            Self::PageNotFound => "NOT_FOUND",

            // Authentication
            Self::AuthenticationRequired => "MISSING_AUTH",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidParentComment => "INVALID_PARENT_COMMENT",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::AlreadyFavorited => "ALREADY_FAVORITED",
            Self::NotFavorited => "NOT_FAVORITED",

            // Authorization
            Self::NotRecipeAuthor => "NOT_RECIPE_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotReactionAuthor => "NOT_REACTION_AUTHOR",
            Self::EditWindowExpired => "EDIT_WINDOW_EXPIRED",
            Self::ReactionAlreadySet => "REACTION_ALREADY_SET",

            // Conflict
            Self::AlreadyFollowing(_) => "ALREADY_FOLLOWING",
            Self::SlugExists(_) => "SLUG_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RecipeNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReactionNotFound(_)
                | Self::FollowNotFound(_)
                | Self::PageNotFound
        )
    }

    /// Check if the caller must authenticate first
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::AuthenticationRequired)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidParentComment
                | Self::CannotFollowSelf
                | Self::AlreadyFavorited
                | Self::NotFavorited
        )
    }

    /// Check if this is an authorization (forbidden) error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotRecipeAuthor
                | Self::NotCommentAuthor
                | Self::NotReactionAuthor
                | Self::EditWindowExpired
                | Self::ReactionAlreadySet
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyFollowing(_) | Self::SlugExists(_))
    }

    /// HTTP status this error surfaces as
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authentication() {
            401
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
