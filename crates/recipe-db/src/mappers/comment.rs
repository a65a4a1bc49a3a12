//! Comment model -> entity mapper

use recipe_core::entities::Comment;
use recipe_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            recipe_id: Snowflake::new(model.recipe_id),
            text: model.text,
            parent_id: model.parent_id.map(Snowflake::new),
            pub_date: model.pub_date,
            updated_at: model.updated_at,
        }
    }
}
