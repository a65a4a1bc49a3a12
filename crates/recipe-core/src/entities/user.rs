//! User entity - an account provisioned by the identity service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// User account as seen by the recipe domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            display_name: None,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    /// Public summary embedded in recipe and follow listings
    pub fn to_author(&self) -> Author {
        Author {
            id: self.id,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Author summary attached to recipes, comments and follow entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Snowflake,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}
