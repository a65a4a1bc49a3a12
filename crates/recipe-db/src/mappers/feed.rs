//! Feed row -> feed item mapper

use recipe_core::entities::{Author, Category};
use recipe_core::feed::{ActivityCounts, FeedItem};
use recipe_core::value_objects::Snowflake;

use crate::models::FeedRowModel;

/// Favorites are annotated later by the service, so every item starts as
/// not favorited
impl From<FeedRowModel> for FeedItem {
    fn from(row: FeedRowModel) -> Self {
        FeedItem {
            id: Snowflake::new(row.id),
            title: row.title,
            slug: row.slug,
            author: Author {
                id: Snowflake::new(row.author_id),
                username: row.author_username,
                display_name: row.author_display_name,
                avatar: row.author_avatar,
            },
            preview_image: row.preview_image,
            short_text: row.short_text,
            tags: row.tags,
            categories: row.categories.0.into_iter().map(Category::from).collect(),
            cooking_time: row.cooking_time,
            pub_date: row.pub_date,
            counts: ActivityCounts {
                latest_reactions: row.latest_reactions_count,
                latest_views: row.latest_views_count,
                latest_comments: row.latest_comments_count,
                reactions: row.reactions_count,
                views: row.views_count,
                comments: row.comments_count,
            },
            is_favorite: false,
        }
    }
}
