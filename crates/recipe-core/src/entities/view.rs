//! View entity - one recorded opening of a recipe page

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A recipe view. Anonymous views carry no user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: Snowflake,
    pub user_id: Option<Snowflake>,
    pub recipe_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl View {
    pub fn new(id: Snowflake, user_id: Option<Snowflake>, recipe_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            recipe_id,
            created_at: Utc::now(),
        }
    }
}
