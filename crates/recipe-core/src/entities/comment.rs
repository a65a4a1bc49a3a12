//! Comment entity - threaded comments under a recipe

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub recipe_id: Snowflake,
    pub text: String,
    pub parent_id: Option<Snowflake>,
    pub pub_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub const MAX_TEXT_LENGTH: usize = 1000;
    /// Hours after publication during which the author may still edit
    pub const EDIT_WINDOW_HOURS: i64 = 24;

    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        recipe_id: Snowflake,
        text: String,
        parent_id: Option<Snowflake>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            recipe_id,
            text,
            parent_id,
            pub_date: now,
            updated_at: now,
        }
    }

    pub fn validate_text(text: &str) -> Result<(), DomainError> {
        let len = text.trim().chars().count();
        if len == 0 {
            return Err(DomainError::ValidationError(
                "comment text must not be empty".to_string(),
            ));
        }
        if len > Self::MAX_TEXT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_TEXT_LENGTH,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn is_editable_at(&self, now: DateTime<Utc>) -> bool {
        now - self.pub_date <= Duration::hours(Self::EDIT_WINDOW_HOURS)
    }

    /// Replace the text, enforcing the edit window
    pub fn edit(&mut self, text: String, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.is_editable_at(now) {
            return Err(DomainError::EditWindowExpired);
        }
        Self::validate_text(&text)?;
        self.text = text;
        self.updated_at = now;
        Ok(())
    }
}
