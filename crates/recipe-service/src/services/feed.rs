//! Feed service
//!
//! Assembles the recipe feed: resolves the social filter, runs the single
//! aggregated feed query, then annotates favorites for the viewer in one
//! batch lookup.

use chrono::{DateTime, Utc};
use recipe_common::FeedConfig;
use recipe_core::{
    DomainError, FeedFilter, FeedItem, FeedOrdering, FeedQuery, Page, PageRequest, Snowflake,
};
use tracing::{debug, instrument};

use crate::dto::FeedRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
    config: &'a FeedConfig,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService using the context's feed configuration
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            config: ctx.feed_config(),
        }
    }

    /// Create a FeedService with an explicit configuration
    pub fn with_config(ctx: &'a ServiceContext, config: &'a FeedConfig) -> Self {
        Self { ctx, config }
    }

    /// Build the query for one feed request
    ///
    /// # Errors
    /// `AuthenticationRequired` for `filter=subscriptions` without a viewer,
    /// a validation error for page 0.
    pub fn build_query(
        &self,
        viewer: Option<Snowflake>,
        request: &FeedRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<FeedQuery> {
        let filter = FeedFilter::resolve(
            viewer,
            request.filter.as_deref(),
            request.username.as_deref(),
        )?;
        let page = PageRequest::new(request.page, self.config.page_size)?;

        Ok(FeedQuery::builder(now, self.config.activity_interval_days)
            .filter(filter)
            .ordering(FeedOrdering::parse(request.ordering.as_deref()))
            .viewer(viewer)
            .page(page)
            .build(self.config.page_size))
    }

    /// Get one page of the feed
    #[instrument(skip(self))]
    pub async fn get_feed(
        &self,
        viewer: Option<Snowflake>,
        request: &FeedRequest,
    ) -> ServiceResult<Page<FeedItem>> {
        let query = self.build_query(viewer, request, Utc::now())?;
        let mut page = self.ctx.feed_repo().fetch_feed(&query).await?;

        if page.is_out_of_range() {
            return Err(DomainError::PageNotFound.into());
        }

        if let Some(viewer) = query.viewer {
            self.annotate_favorites(viewer, &mut page.results).await?;
        }

        debug!(
            count = page.count,
            returned = page.results.len(),
            ordering = %query.ordering,
            "Feed assembled"
        );

        Ok(page)
    }

    /// Set `is_favorite` on every item the viewer has favorited
    async fn annotate_favorites(
        &self,
        viewer: Snowflake,
        items: &mut [FeedItem],
    ) -> ServiceResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let ids: Vec<Snowflake> = items.iter().map(|item| item.id).collect();
        let favorited = self
            .ctx
            .favorite_repo()
            .favorited_among(viewer, &ids)
            .await?;

        for item in items.iter_mut() {
            item.is_favorite = favorited.contains(&item.id);
        }
        Ok(())
    }
}
