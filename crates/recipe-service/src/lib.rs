//! # recipe-service
//!
//! Application layer containing the feed assembler, the write-path services and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    FeedItemResponse, FeedRequest, HealthResponse, OperationKind, PaginatedResponse,
    ReadinessResponse, RecipeOutput,
};
pub use services::{
    CommentService, FavoriteService, FeedService, FollowService, ReactionService, RecipeService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
