//! Favorite handlers

use axum::extract::{Path, State};
use axum::Json;
use recipe_service::dto::DetailResponse;
use recipe_service::FavoriteService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a recipe to the caller's favorites
///
/// POST /recipe/{slug}/favorite/
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Created<Json<DetailResponse>>> {
    FavoriteService::new(state.service_context())
        .add(&slug, auth.user_id)
        .await?;
    Ok(Created(Json(DetailResponse::new("Recipe added to favorites"))))
}

/// Remove a recipe from the caller's favorites
///
/// DELETE /recipe/{slug}/favorite/
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<NoContent> {
    FavoriteService::new(state.service_context())
        .remove(&slug, auth.user_id)
        .await?;
    Ok(NoContent)
}
