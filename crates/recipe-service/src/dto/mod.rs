//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs
//! - The typed mapping from recipe operations to output shapes

pub mod mappers;
pub mod operation;
pub mod requests;
pub mod responses;

pub use operation::{OperationKind, RecipeOutput, RecipePayload, RecipeShape};

pub use requests::{
    CreateCommentRequest, CreateFollowRequest, CreateReactionRequest, CreateRecipeRequest,
    FeedRequest, IngredientRequest, UpdateCommentRequest, UpdateRecipeRequest,
};

pub use responses::{
    AuthorResponse, CommentResponse, DetailResponse, FeedItemResponse, FollowEntryResponse,
    FollowUserResponse, HealthChecks, HealthResponse, PaginatedResponse, ReactionCountResponse,
    ReactionResponse, ReadinessResponse, RecipeDetailResponse, RecipeSummaryResponse,
    RecipeUpdateResponse,
};
