//! Reaction entity - an emoji reaction on a recipe or a comment

use chrono::{DateTime, Utc};

use crate::value_objects::{Emoji, ReactionTarget, Snowflake};

/// Reaction entity. Deleting a reaction only sets `is_deleted`, so the same
/// `(author, emoji, target)` row can later be reactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub target: ReactionTarget,
    pub emoji: Emoji,
    pub pub_date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Reaction {
    pub fn new(id: Snowflake, author_id: Snowflake, target: ReactionTarget, emoji: Emoji) -> Self {
        Self {
            id,
            author_id,
            target,
            emoji,
            pub_date: Utc::now(),
            is_deleted: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Bring a soft-deleted reaction back. The original `pub_date` is kept,
    /// so a withdrawn reaction cannot re-enter the activity window.
    pub fn reactivate(&mut self) {
        self.is_deleted = false;
    }
}

/// Number of active reactions with a given emoji on one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: Emoji,
    pub count: i64,
}
