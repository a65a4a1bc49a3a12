//! Recipe handlers
//!
//! Each handler fixes its `OperationKind`; the rendered `RecipeOutput`
//! decides the body and the kind decides the status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_service::dto::{CreateRecipeRequest, UpdateRecipeRequest};
use recipe_service::{OperationKind, PaginatedResponse, RecipeOutput, RecipeService};

use crate::extractors::{
    AuthUser, OptionalAuthUser, PageLinks, PageNumber, SearchQuery, ValidatedJson,
};
use crate::response::ApiResult;
use crate::state::AppState;

fn status_for(kind: OperationKind) -> StatusCode {
    match kind {
        OperationKind::Create => StatusCode::CREATED,
        OperationKind::Delete => StatusCode::NO_CONTENT,
        OperationKind::List
        | OperationKind::Update
        | OperationKind::Favorites
        | OperationKind::Search => StatusCode::OK,
    }
}

/// Turn a rendered recipe output into a response
///
/// `links` is only consulted for paginated shapes.
fn respond(kind: OperationKind, output: RecipeOutput, links: Option<&PageLinks>) -> Response {
    let status = status_for(kind);
    match output {
        RecipeOutput::Detail(detail) => (status, Json(detail)).into_response(),
        RecipeOutput::Update(update) => (status, Json(update)).into_response(),
        RecipeOutput::Summaries(page) => {
            let body = PaginatedResponse::from_page(page, |p| {
                links.map(|links| links.link(p)).unwrap_or_default()
            });
            (status, Json(body)).into_response()
        }
        RecipeOutput::Empty => status.into_response(),
    }
}

/// Search recipes by title
///
/// GET /recipe/?search=&page=
pub async fn list_recipes(
    State(state): State<AppState>,
    query: SearchQuery,
    links: PageLinks,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.search(query.search.as_deref(), query.page).await?;
    Ok(respond(OperationKind::Search, output, Some(&links)))
}

/// Publish a recipe
///
/// POST /recipe/
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRecipeRequest>,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.create(auth.user_id, request).await?;
    Ok(respond(OperationKind::Create, output, None))
}

/// Get a recipe, recording a view
///
/// GET /recipe/{slug}/
pub async fn get_recipe(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.get(&slug, auth.user_id()).await?;
    Ok(respond(OperationKind::List, output, None))
}

/// Update a recipe
///
/// PATCH /recipe/{slug}/
pub async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRecipeRequest>,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.update(&slug, auth.user_id, request).await?;
    Ok(respond(OperationKind::Update, output, None))
}

/// Delete a recipe
///
/// DELETE /recipe/{slug}/
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.delete(&slug, auth.user_id).await?;
    Ok(respond(OperationKind::Delete, output, None))
}

/// List the caller's favorite recipes
///
/// GET /recipe/favorites/
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    PageNumber(page): PageNumber,
    links: PageLinks,
) -> ApiResult<Response> {
    let service = RecipeService::new(state.service_context());
    let output = service.favorites(auth.user_id, page).await?;
    Ok(respond(OperationKind::Favorites, output, Some(&links)))
}
