//! Favorite entity - a recipe bookmarked by a user

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub recipe_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(id: Snowflake, author_id: Snowflake, recipe_id: Snowflake) -> Self {
        Self {
            id,
            author_id,
            recipe_id,
            created_at: Utc::now(),
        }
    }
}
