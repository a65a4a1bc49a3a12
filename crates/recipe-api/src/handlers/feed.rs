//! Feed handler
//!
//! The ranked, filterable recipe feed.

use axum::{extract::State, Json};
use recipe_service::{FeedItemResponse, FeedService, PaginatedResponse};

use crate::extractors::{FeedQueryParams, OptionalAuthUser, PageLinks};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get one page of the feed
///
/// GET /feed/?ordering=&filter=subscriptions&username=&page=
pub async fn get_feed(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    FeedQueryParams(request): FeedQueryParams,
    links: PageLinks,
) -> ApiResult<Json<PaginatedResponse<FeedItemResponse>>> {
    let service = FeedService::new(state.service_context());
    let page = service.get_feed(auth.user_id(), &request).await?;

    Ok(Json(PaginatedResponse::from_page(
        page.map(FeedItemResponse::from),
        |p| links.link(p),
    )))
}
