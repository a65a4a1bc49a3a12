//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub author_id: i64,
    pub recipe_id: i64,
    pub text: String,
    pub parent_id: Option<i64>,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
