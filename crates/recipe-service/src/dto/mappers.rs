//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use recipe_core::entities::{
    Author, Comment, FollowEntry, Reaction, ReactionCount, Recipe, RecipeDetail, RecipeSummary,
};
use recipe_core::FeedItem;

use super::responses::{
    AuthorResponse, CommentResponse, FeedItemResponse, FollowEntryResponse, FollowUserResponse,
    ReactionCountResponse, ReactionResponse, RecipeDetailResponse, RecipeSummaryResponse,
    RecipeUpdateResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            username: author.username.clone(),
            display_name: author.display_name.clone(),
            avatar: author.avatar.clone(),
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            username: author.username,
            display_name: author.display_name,
            avatar: author.avatar,
        }
    }
}

// ============================================================================
// Feed Mappers
// ============================================================================

impl From<FeedItem> for FeedItemResponse {
    fn from(item: FeedItem) -> Self {
        let activity_count = item.activity_count();
        Self {
            id: item.id.to_string(),
            title: item.title,
            slug: item.slug,
            author: item.author.into(),
            preview_image: item.preview_image,
            short_text: item.short_text,
            tag: item.tags,
            category: item.categories,
            cooking_time: item.cooking_time,
            pub_date: item.pub_date,
            reactions_count: item.counts.reactions,
            views_count: item.counts.views,
            comments_count: item.counts.comments,
            activity_count,
            is_favorite: item.is_favorite,
        }
    }
}

// ============================================================================
// Recipe Mappers
// ============================================================================

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(detail: RecipeDetail) -> Self {
        let recipe = detail.recipe;
        Self {
            id: recipe.id.to_string(),
            author: detail.author.into(),
            title: recipe.title,
            slug: recipe.slug,
            short_text: recipe.short_text,
            full_text: recipe.full_text,
            preview_image: recipe.preview_image,
            cooking_time: recipe.cooking_time,
            tag: recipe.tags,
            category: recipe.categories,
            ingredients: recipe.ingredients,
            pub_date: recipe.pub_date,
            updated_at: recipe.updated_at,
            reactions_count: detail.reactions_count,
            views_count: detail.views_count,
        }
    }
}

impl From<&Recipe> for RecipeUpdateResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            slug: recipe.slug.clone(),
            title: recipe.title.clone(),
            short_text: recipe.short_text.clone(),
            full_text: recipe.full_text.clone(),
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients.clone(),
            updated_at: recipe.updated_at,
        }
    }
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
            slug: summary.slug,
            author: summary.author.into(),
            preview_image: summary.preview_image,
            short_text: summary.short_text,
            tag: summary.tags,
            cooking_time: summary.cooking_time,
            pub_date: summary.pub_date,
            reactions_count: summary.reactions_count,
            views_count: summary.views_count,
            comments_count: summary.comments_count,
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            emoji: reaction.emoji,
            target_kind: reaction.target.kind.as_str(),
            target_id: reaction.target.id.to_string(),
            pub_date: reaction.pub_date,
        }
    }
}

impl From<ReactionCount> for ReactionCountResponse {
    fn from(count: ReactionCount) -> Self {
        Self {
            emoji: count.emoji,
            count: count.count,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.author_id.to_string(),
            recipe: comment.recipe_id.to_string(),
            text: comment.text.clone(),
            parent: comment.parent_id.map(|id| id.to_string()),
            pub_date: comment.pub_date,
            updated_at: comment.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Follow Mappers
// ============================================================================

impl From<FollowEntry> for FollowEntryResponse {
    fn from(entry: FollowEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            user: FollowUserResponse {
                id: entry.user.id.to_string(),
                username: entry.user.username,
                avatar: entry.user.avatar,
            },
            subscribers_count: entry.subscribers_count,
        }
    }
}
