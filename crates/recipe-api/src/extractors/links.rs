//! Absolute pagination links
//!
//! `next`/`previous` URLs reuse the request's path and query string with the
//! `page` parameter swapped. The origin comes from `PUBLIC_BASE_URL` when
//! configured, otherwise from the request's Host header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use url::Url;

use crate::response::ApiError;
use crate::state::AppState;

const PAGE_PARAM: &str = "page";

/// Link builder for the current request
#[derive(Debug, Clone)]
pub struct PageLinks {
    url: Url,
}

impl PageLinks {
    /// Build from an origin (`scheme://host[:port]`) and the request's path and query
    pub fn new(origin: &str, path_and_query: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(&format!("{}{}", origin.trim_end_matches('/'), path_and_query))?;
        Ok(Self { url })
    }

    /// URL for `page`; page 1 drops the parameter entirely
    pub fn link(&self, page: u32) -> String {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.url.clone();
        url.set_query(None);
        if !kept.is_empty() || page > 1 {
            let mut query = url.query_pairs_mut();
            for (key, value) in &kept {
                query.append_pair(key, value);
            }
            if page > 1 {
                query.append_pair(PAGE_PARAM, &page.to_string());
            }
        }
        url.to_string()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageLinks
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let origin = match &app_state.config().feed.public_base_url {
            Some(base) => base.clone(),
            None => {
                let host = parts
                    .headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .or_else(|| parts.uri.authority().map(|a| a.as_str()))
                    .unwrap_or("localhost");
                format!("http://{host}")
            }
        };

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        PageLinks::new(&origin, path_and_query).map_err(|e| {
            tracing::warn!(error = %e, origin = %origin, "Cannot build pagination links");
            ApiError::invalid_query(format!("Cannot build pagination links: {e}"))
        })
    }
}
