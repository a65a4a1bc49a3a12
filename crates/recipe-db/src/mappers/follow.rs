//! Follow listing row -> entity mapper

use recipe_core::entities::{Author, FollowEntry};
use recipe_core::value_objects::Snowflake;

use crate::models::FollowEntryModel;

impl From<FollowEntryModel> for FollowEntry {
    fn from(model: FollowEntryModel) -> Self {
        FollowEntry {
            id: Snowflake::new(model.id),
            user: Author {
                id: Snowflake::new(model.user_id),
                username: model.username,
                display_name: model.display_name,
                avatar: model.avatar,
            },
            subscribers_count: model.subscribers_count,
        }
    }
}
