//! Authentication extractor
//!
//! Extracts and verifies bearer tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use recipe_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Snowflake,
}

impl AuthUser {
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

/// A present Authorization header that is not `Bearer <token>`
fn malformed_header(rejection: &TypedHeaderRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Malformed Authorization header");
    ApiError::InvalidAuthFormat
}

fn verify(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    state
        .jwt_service()
        .authenticate(token)
        .map(AuthUser::new)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::App(e)
        })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        malformed_header(&rejection)
                    }
                })?;

        verify(&AppState::from_ref(state), bearer.token())
    }
}

/// Optional authenticated user
///
/// `None` when no Authorization header is present. A malformed header or
/// an invalid token is rejected exactly as [`AuthUser`] rejects it.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Viewer id, `None` for anonymous requests
    pub fn user_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|user| user.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                verify(&AppState::from_ref(state), bearer.token()).map(|user| Self(Some(user)))
            }
            Err(rejection) if rejection.is_missing() => Ok(Self(None)),
            Err(rejection) => Err(malformed_header(&rejection)),
        }
    }
}
