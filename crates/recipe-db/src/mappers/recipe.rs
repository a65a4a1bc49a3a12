//! Recipe models -> entity mappers

use recipe_core::entities::{
    Author, Category, Recipe, RecipeDetail, RecipeIngredient, RecipeSummary,
};
use recipe_core::value_objects::Snowflake;

use crate::models::{
    CategoryModel, IngredientModel, RecipeDetailModel, RecipeModel, RecipeSummaryModel,
};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            name: model.name,
            slug: model.slug,
        }
    }
}

impl From<IngredientModel> for RecipeIngredient {
    fn from(model: IngredientModel) -> Self {
        RecipeIngredient {
            name: model.name,
            unit: model.unit,
            amount: model.amount,
        }
    }
}

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            slug: model.slug,
            short_text: model.short_text,
            full_text: model.full_text,
            preview_image: model.preview_image,
            cooking_time: model.cooking_time,
            tags: model.tags,
            categories: model.categories.0.into_iter().map(Category::from).collect(),
            ingredients: model
                .ingredients
                .0
                .into_iter()
                .map(RecipeIngredient::from)
                .collect(),
            pub_date: model.pub_date,
            updated_at: model.updated_at,
        }
    }
}

impl From<RecipeDetailModel> for RecipeDetail {
    fn from(model: RecipeDetailModel) -> Self {
        let author = Author {
            id: Snowflake::new(model.recipe.author_id),
            username: model.author_username,
            display_name: model.author_display_name,
            avatar: model.author_avatar,
        };
        RecipeDetail {
            recipe: Recipe::from(model.recipe),
            author,
            reactions_count: model.reactions_count,
            views_count: model.views_count,
        }
    }
}

impl From<RecipeSummaryModel> for RecipeSummary {
    fn from(model: RecipeSummaryModel) -> Self {
        RecipeSummary {
            id: Snowflake::new(model.id),
            title: model.title,
            slug: model.slug,
            author: Author {
                id: Snowflake::new(model.author_id),
                username: model.author_username,
                display_name: model.author_display_name,
                avatar: model.author_avatar,
            },
            preview_image: model.preview_image,
            short_text: model.short_text,
            tags: model.tags,
            cooking_time: model.cooking_time,
            pub_date: model.pub_date,
            reactions_count: model.reactions_count,
            views_count: model.views_count,
            comments_count: model.comments_count,
        }
    }
}
