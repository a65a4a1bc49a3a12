//! Query string extractors
//!
//! Page-number pagination, the feed's ordering/filter parameters and the
//! recipe title search.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use recipe_service::FeedRequest;
use serde::Deserialize;

use crate::response::ApiError;

/// Parse the raw `page` parameter; absent means the first page
fn parse_page(raw: Option<&str>) -> Result<u32, ApiError> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| ApiError::invalid_query("Invalid page")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Raw page query parameter
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

/// Validated 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(pub u32);

impl TryFrom<PageParams> for PageNumber {
    type Error = ApiError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        parse_page(params.page.as_deref()).map(PageNumber)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageNumber
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        PageNumber::try_from(params)
    }
}

/// Raw feed query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    #[serde(default)]
    pub ordering: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Feed request with a validated page number
///
/// `ordering` and `filter` are kept raw; the service falls back to defaults
/// for values it does not recognise.
#[derive(Debug, Clone)]
pub struct FeedQueryParams(pub FeedRequest);

impl TryFrom<FeedParams> for FeedQueryParams {
    type Error = ApiError;

    fn try_from(params: FeedParams) -> Result<Self, Self::Error> {
        Ok(FeedQueryParams(FeedRequest {
            page: parse_page(params.page.as_deref())?,
            ordering: non_empty(params.ordering),
            filter: non_empty(params.filter),
            username: non_empty(params.username),
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FeedQueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FeedParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        FeedQueryParams::try_from(params)
    }
}

/// Raw recipe search parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Title search with a validated page number; a blank search is `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: Option<String>,
    pub page: u32,
}

impl TryFrom<SearchParams> for SearchQuery {
    type Error = ApiError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        Ok(SearchQuery {
            search: non_empty(params.search),
            page: parse_page(params.page.as_deref())?,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SearchParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        SearchQuery::try_from(params)
    }
}
