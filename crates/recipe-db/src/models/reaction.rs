//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub author_id: i64,
    pub target_kind: String,
    pub target_id: i64,
    pub emoji: String,
    pub pub_date: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub emoji: String,
    pub count: i64,
}
