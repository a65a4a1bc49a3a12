//! Subscription handlers
//!
//! Following authors and listing either side of the follow graph.

use axum::{
    extract::{Path, State},
    Json,
};
use recipe_service::dto::{CreateFollowRequest, FollowEntryResponse};
use recipe_service::{FollowService, PaginatedResponse};

use crate::extractors::{AuthUser, PageLinks, PageNumber, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Follow an author
///
/// POST /subscriptions/
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFollowRequest>,
) -> ApiResult<Created<Json<FollowEntryResponse>>> {
    let entry = FollowService::new(state.service_context())
        .follow(auth.user_id, request)
        .await?;
    Ok(Created(Json(entry.into())))
}

/// Stop following an author
///
/// DELETE /subscriptions/{username}/
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    FollowService::new(state.service_context())
        .unfollow(auth.user_id, &username)
        .await?;
    Ok(NoContent)
}

/// Authors a user follows
///
/// GET /users/{username}/following/
pub async fn list_following(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    PageNumber(page): PageNumber,
    links: PageLinks,
) -> ApiResult<Json<PaginatedResponse<FollowEntryResponse>>> {
    let entries = FollowService::new(state.service_context())
        .following(&username, page)
        .await?;

    Ok(Json(PaginatedResponse::from_page(
        entries.map(FollowEntryResponse::from),
        |p| links.link(p),
    )))
}

/// Users following a user
///
/// GET /users/{username}/followers/
pub async fn list_followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    PageNumber(page): PageNumber,
    links: PageLinks,
) -> ApiResult<Json<PaginatedResponse<FollowEntryResponse>>> {
    let entries = FollowService::new(state.service_context())
        .followers(&username, page)
        .await?;

    Ok(Json(PaginatedResponse::from_page(
        entries.map(FollowEntryResponse::from),
        |p| links.link(p),
    )))
}
