//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use recipe_service::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
use recipe_service::{CommentService, PaginatedResponse};

use crate::extractors::{AuthUser, PageLinks, PageNumber, RecipeCommentPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a recipe's comments, oldest first
///
/// GET /recipe/{slug}/comment/
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    PageNumber(page): PageNumber,
    links: PageLinks,
) -> ApiResult<Json<PaginatedResponse<CommentResponse>>> {
    let comments = CommentService::new(state.service_context())
        .list(&slug, page)
        .await?;

    Ok(Json(PaginatedResponse::from_page(
        comments.map(CommentResponse::from),
        |p| links.link(p),
    )))
}

/// Comment on a recipe
///
/// POST /recipe/{slug}/comment/
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = CommentService::new(state.service_context())
        .create(&slug, auth.user_id, request)
        .await?;
    Ok(Created(Json(comment.into())))
}

/// Edit a comment
///
/// PATCH /recipe/{slug}/comment/{comment_id}/
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RecipeCommentPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .update(&path.slug, path.comment_id()?, auth.user_id, request)
        .await?;
    Ok(Json(comment.into()))
}

/// Delete a comment
///
/// DELETE /recipe/{slug}/comment/{comment_id}/
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RecipeCommentPath>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete(&path.slug, path.comment_id()?, auth.user_id)
        .await?;
    Ok(NoContent)
}
