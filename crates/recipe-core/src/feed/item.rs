//! Feed entry

use chrono::{DateTime, Utc};

use super::ActivityCounts;
use crate::entities::{Author, Category};
use crate::value_objects::Snowflake;

/// A recipe as it appears in the feed, annotated for one viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Snowflake,
    pub title: String,
    pub slug: String,
    pub author: Author,
    pub preview_image: Option<String>,
    pub short_text: String,
    pub tags: Vec<String>,
    pub categories: Vec<Category>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub counts: ActivityCounts,
    pub is_favorite: bool,
}

impl FeedItem {
    #[inline]
    pub fn activity_count(&self) -> i64 {
        self.counts.activity_count()
    }
}
