//! User model -> entity mapper

use recipe_core::entities::User;
use recipe_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            display_name: model.display_name,
            avatar: model.avatar,
            created_at: model.created_at,
        }
    }
}
