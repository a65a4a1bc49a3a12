//! Follow database models

use sqlx::FromRow;

/// Row of a following/followers listing
#[derive(Debug, Clone, FromRow)]
pub struct FollowEntryModel {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub subscribers_count: i64,
}
