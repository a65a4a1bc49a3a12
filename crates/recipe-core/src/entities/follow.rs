//! Follow entity - a subscription of one user to another

use chrono::{DateTime, Utc};

use super::Author;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// `user_id` follows `author_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a follow, rejecting self-subscription
    pub fn new(id: Snowflake, user_id: Snowflake, author_id: Snowflake) -> Result<Self, DomainError> {
        if user_id == author_id {
            return Err(DomainError::CannotFollowSelf);
        }
        Ok(Self {
            id,
            user_id,
            author_id,
            created_at: Utc::now(),
        })
    }
}

/// Row of a following/followers listing: the other party and how many
/// subscribers they have
#[derive(Debug, Clone)]
pub struct FollowEntry {
    pub id: Snowflake,
    pub user: Author,
    pub subscribers_count: i64,
}
