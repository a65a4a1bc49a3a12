//! Feed query row

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use super::CategoryModel;

/// One recipe of a feed page with its six engagement counters
#[derive(Debug, Clone, FromRow)]
pub struct FeedRowModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub short_text: String,
    pub preview_image: Option<String>,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub categories: Json<Vec<CategoryModel>>,
    pub author_id: i64,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar: Option<String>,
    pub reactions_count: i64,
    pub latest_reactions_count: i64,
    pub views_count: i64,
    pub latest_views_count: i64,
    pub comments_count: i64,
    pub latest_comments_count: i64,
}
