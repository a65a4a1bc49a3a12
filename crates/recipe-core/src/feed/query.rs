//! Feed query value object

use chrono::{DateTime, Duration, Utc};

use super::{FeedFilter, FeedOrdering, PageRequest};
use crate::value_objects::Snowflake;

/// Fully resolved feed request.
///
/// Built once per request; all counts in one response use the same
/// `window_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub filter: FeedFilter,
    pub ordering: FeedOrdering,
    /// Engagement at or after this instant counts as recent
    pub window_start: DateTime<Utc>,
    /// Viewer used for `is_favorite`; `None` for anonymous requests
    pub viewer: Option<Snowflake>,
    pub page: PageRequest,
}

impl FeedQuery {
    /// Start a query whose window opens `activity_interval_days` before `now`.
    /// An interval reaching past the representable range opens the window at
    /// the earliest representable instant.
    pub fn builder(now: DateTime<Utc>, activity_interval_days: u32) -> FeedQueryBuilder {
        let window_start = Duration::try_days(i64::from(activity_interval_days))
            .and_then(|interval| now.checked_sub_signed(interval))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        FeedQueryBuilder {
            window_start,
            filter: FeedFilter::All,
            ordering: FeedOrdering::default(),
            viewer: None,
            page: None,
        }
    }
}

/// Builder for [`FeedQuery`]
#[derive(Debug, Clone)]
pub struct FeedQueryBuilder {
    window_start: DateTime<Utc>,
    filter: FeedFilter,
    ordering: FeedOrdering,
    viewer: Option<Snowflake>,
    page: Option<PageRequest>,
}

impl FeedQueryBuilder {
    pub fn filter(mut self, filter: FeedFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn ordering(mut self, ordering: FeedOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn viewer(mut self, viewer: Option<Snowflake>) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Finish the query. Without an explicit page, the first page of
    /// `default_page_size` is used.
    pub fn build(self, default_page_size: u32) -> FeedQuery {
        FeedQuery {
            filter: self.filter,
            ordering: self.ordering,
            window_start: self.window_start,
            viewer: self.viewer,
            page: self
                .page
                .unwrap_or_else(|| PageRequest::first(default_page_size)),
        }
    }
}
