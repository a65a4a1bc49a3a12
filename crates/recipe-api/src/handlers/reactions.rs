//! Reaction handlers
//!
//! Emoji reactions on recipes and on comments. Both targets share the same
//! three operations; the path decides which `ReactionTarget` is resolved.

use axum::{
    extract::{Path, State},
    Json,
};
use recipe_core::ReactionTarget;
use recipe_service::dto::{CreateReactionRequest, ReactionCountResponse, ReactionResponse};
use recipe_service::ReactionService;

use crate::extractors::{
    AuthUser, CommentIdPath, CommentReactionPath, RecipeReactionPath, ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

async fn add(
    state: &AppState,
    auth: &AuthUser,
    target: ReactionTarget,
    request: CreateReactionRequest,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let reaction = ReactionService::new(state.service_context())
        .add(auth.user_id, target, request.emoji)
        .await?;
    Ok(Created(Json(ReactionResponse::from(&reaction))))
}

async fn counts(
    state: &AppState,
    target: ReactionTarget,
) -> ApiResult<Json<Vec<ReactionCountResponse>>> {
    let counts = ReactionService::new(state.service_context())
        .counts(target)
        .await?;
    Ok(Json(counts.into_iter().map(Into::into).collect()))
}

/// React to a recipe
///
/// POST /recipe/{slug}/reactions/
pub async fn add_recipe_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let target = ReactionService::new(state.service_context())
        .recipe_target(&slug)
        .await?;
    add(&state, &auth, target, request).await
}

/// Per-emoji counts on a recipe
///
/// GET /recipe/{slug}/reactions/
pub async fn get_recipe_reactions(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Vec<ReactionCountResponse>>> {
    let target = ReactionService::new(state.service_context())
        .recipe_target(&slug)
        .await?;
    counts(&state, target).await
}

/// Withdraw a reaction on a recipe
///
/// DELETE /recipe/{slug}/reactions/{reaction_id}/
pub async fn remove_recipe_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RecipeReactionPath>,
) -> ApiResult<NoContent> {
    let reaction_id = path.reaction_id()?;
    let service = ReactionService::new(state.service_context());
    let target = service.recipe_target(&path.slug).await?;
    service.remove(auth.user_id, target, reaction_id).await?;
    Ok(NoContent)
}

/// React to a comment
///
/// POST /comment/{comment_id}/reactions/
pub async fn add_comment_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let target = ReactionService::new(state.service_context())
        .comment_target(path.comment_id()?)
        .await?;
    add(&state, &auth, target, request).await
}

/// Per-emoji counts on a comment
///
/// GET /comment/{comment_id}/reactions/
pub async fn get_comment_reactions(
    State(state): State<AppState>,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<Vec<ReactionCountResponse>>> {
    let target = ReactionService::new(state.service_context())
        .comment_target(path.comment_id()?)
        .await?;
    counts(&state, target).await
}

/// Withdraw a reaction on a comment
///
/// DELETE /comment/{comment_id}/reactions/{reaction_id}/
pub async fn remove_comment_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentReactionPath>,
) -> ApiResult<NoContent> {
    let reaction_id = path.reaction_id()?;
    let service = ReactionService::new(state.service_context());
    let target = service.comment_target(path.comment_id()?).await?;
    service.remove(auth.user_id, target, reaction_id).await?;
    Ok(NoContent)
}
