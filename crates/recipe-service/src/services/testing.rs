//! In-memory repositories for service tests

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipe_common::{FeedConfig, JwtService};
use recipe_core::traits::{
    CommentRepository, FavoriteRepository, FeedRepository, FollowRepository, ReactionRepository,
    RecipeRepository, RepoResult, UserRepository, ViewRepository,
};
use recipe_core::{
    ActivityCounts, Author, Category, Comment, DomainError, Emoji, Favorite, FeedFilter, FeedItem,
    FeedQuery, Follow, FollowEntry, Page, PageRequest, Reaction, ReactionCount, ReactionTarget,
    Recipe, RecipeDetail, RecipeSummary, Snowflake, SnowflakeGenerator, User, View,
};

use super::context::ServiceContext;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    recipes: Vec<Recipe>,
    feed: Vec<FeedItem>,
    reactions: Vec<Reaction>,
    comments: Vec<Comment>,
    views: Vec<View>,
    favorites: Vec<Favorite>,
    follows: Vec<Follow>,
}

/// One shared store implementing every repository port
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.lock().unwrap())
    }
}

fn paginate<T: Clone>(rows: &[T], page: PageRequest) -> Page<T> {
    let results = rows
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect();
    Page::new(page, rows.len() as i64, results)
}

fn author_of(tables: &Tables, id: Snowflake) -> Author {
    tables
        .users
        .iter()
        .find(|u| u.id == id)
        .map(User::to_author)
        .unwrap_or(Author {
            id,
            username: id.to_string(),
            display_name: None,
            avatar: None,
        })
}

/// Test fixture owning the store and building contexts over it
pub struct Fixture {
    pub store: Arc<MemoryStore>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        store.with(|t| {
            for slug in ["soups", "desserts"] {
                t.categories.push(Category {
                    name: slug.to_uppercase(),
                    slug: slug.to_string(),
                });
            }
        });
        Self { store }
    }

    pub fn context(&self) -> ServiceContext {
        let store = self.store.clone();
        ServiceContext::builder()
            .user_repo(store.clone())
            .recipe_repo(store.clone())
            .feed_repo(store.clone())
            .reaction_repo(store.clone())
            .comment_repo(store.clone())
            .view_repo(store.clone())
            .favorite_repo(store.clone())
            .follow_repo(store)
            .feed_config(FeedConfig::default())
            .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build()
            .unwrap()
    }

    pub fn add_user(&self, id: i64, username: &str) -> User {
        let user = User::new(Snowflake::new(id), username.to_string());
        self.store.with(|t| t.users.push(user.clone()));
        user
    }

    pub fn set_feed(&self, items: Vec<FeedItem>) {
        self.store.with(|t| t.feed = items);
    }

    pub fn add_favorite(&self, favorite: Favorite) {
        self.store.with(|t| t.favorites.push(favorite));
    }

    pub fn views(&self) -> Vec<View> {
        self.store.with(|t| t.views.clone())
    }

    pub fn reactions(&self) -> Vec<Reaction> {
        self.store.with(|t| t.reactions.clone())
    }

    pub fn set_reaction_pub_date(&self, id: Snowflake, pub_date: DateTime<Utc>) {
        self.store.with(|t| {
            if let Some(reaction) = t.reactions.iter_mut().find(|r| r.id == id) {
                reaction.pub_date = pub_date;
            }
        });
    }
}

/// Feed row with no engagement
pub fn feed_item(id: i64) -> FeedItem {
    FeedItem {
        id: Snowflake::new(id),
        title: format!("Recipe {id}"),
        slug: format!("recipe-{id}"),
        author: Author {
            id: Snowflake::new(1),
            username: "chef".to_string(),
            display_name: None,
            avatar: None,
        },
        preview_image: None,
        short_text: String::new(),
        tags: vec![],
        categories: vec![],
        cooking_time: 30,
        pub_date: Utc::now(),
        counts: ActivityCounts::default(),
        is_favorite: false,
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.with(|t| t.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.with(|t| t.users.iter().find(|u| u.username == username).cloned()))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.with(|t| t.users.push(user.clone()));
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Recipe>> {
        Ok(self.with(|t| t.recipes.iter().find(|r| r.slug == slug).cloned()))
    }

    async fn find_detail(&self, slug: &str) -> RepoResult<Option<RecipeDetail>> {
        Ok(self.with(|t| {
            let recipe = t.recipes.iter().find(|r| r.slug == slug)?.clone();
            let target = ReactionTarget::recipe(recipe.id);
            Some(RecipeDetail {
                author: author_of(t, recipe.author_id),
                reactions_count: t
                    .reactions
                    .iter()
                    .filter(|r| r.target == target && r.is_active())
                    .count() as i64,
                views_count: t.views.iter().filter(|v| v.recipe_id == recipe.id).count() as i64,
                recipe,
            })
        }))
    }

    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        Ok(self.with(|t| t.recipes.iter().any(|r| r.slug == slug)))
    }

    async fn find_categories(&self, slugs: &[String]) -> RepoResult<Vec<Category>> {
        Ok(self.with(|t| {
            t.categories
                .iter()
                .filter(|c| slugs.contains(&c.slug))
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, recipe: &Recipe) -> RepoResult<()> {
        self.with(|t| {
            if t.recipes.iter().any(|r| r.slug == recipe.slug) {
                return Err(DomainError::SlugExists(recipe.slug.clone()));
            }
            t.recipes.push(recipe.clone());
            Ok(())
        })
    }

    async fn update(&self, recipe: &Recipe) -> RepoResult<()> {
        self.with(|t| {
            if let Some(row) = t.recipes.iter_mut().find(|r| r.id == recipe.id) {
                *row = recipe.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.with(|t| {
            t.recipes.retain(|r| r.id != id);
            t.comments.retain(|c| c.recipe_id != id);
            t.reactions.retain(|r| r.target != ReactionTarget::recipe(id));
        });
        Ok(())
    }

    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<RecipeSummary>> {
        Ok(self.with(|t| {
            let mut rows: Vec<RecipeSummary> = t
                .recipes
                .iter()
                .filter(|r| {
                    t.favorites
                        .iter()
                        .any(|f| f.author_id == user_id && f.recipe_id == r.id)
                })
                .map(|r| summary_of(t, r))
                .collect();
            rows.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(a.id.cmp(&b.id)));
            paginate(&rows, page)
        }))
    }

    async fn search(&self, terms: &[String], page: PageRequest) -> RepoResult<Page<RecipeSummary>> {
        Ok(self.with(|t| {
            let mut rows: Vec<RecipeSummary> = t
                .recipes
                .iter()
                .filter(|r| {
                    let title = r.title.to_lowercase();
                    terms.iter().all(|term| title.contains(&term.to_lowercase()))
                })
                .map(|r| summary_of(t, r))
                .collect();
            rows.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(a.id.cmp(&b.id)));
            paginate(&rows, page)
        }))
    }
}

fn summary_of(tables: &Tables, r: &Recipe) -> RecipeSummary {
    RecipeSummary {
        id: r.id,
        title: r.title.clone(),
        slug: r.slug.clone(),
        author: author_of(tables, r.author_id),
        preview_image: r.preview_image.clone(),
        short_text: r.short_text.clone(),
        tags: r.tags.clone(),
        cooking_time: r.cooking_time,
        pub_date: r.pub_date,
        reactions_count: 0,
        views_count: 0,
        comments_count: 0,
    }
}

#[async_trait]
impl FeedRepository for MemoryStore {
    async fn fetch_feed(&self, query: &FeedQuery) -> RepoResult<Page<FeedItem>> {
        Ok(self.with(|t| {
            let rows: Vec<FeedItem> = t
                .feed
                .iter()
                .filter(|item| match &query.filter {
                    FeedFilter::All => true,
                    FeedFilter::Author(username) => &item.author.username == username,
                    FeedFilter::Subscriptions(viewer) => t
                        .follows
                        .iter()
                        .any(|f| f.user_id == *viewer && f.author_id == item.author.id),
                })
                .cloned()
                .collect();
            paginate(&rows, query.page)
        }))
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        Ok(self.with(|t| t.reactions.iter().find(|r| r.id == id).cloned()))
    }

    async fn find(
        &self,
        author_id: Snowflake,
        target: ReactionTarget,
        emoji: Emoji,
    ) -> RepoResult<Option<Reaction>> {
        Ok(self.with(|t| {
            t.reactions
                .iter()
                .find(|r| r.author_id == author_id && r.target == target && r.emoji == emoji)
                .cloned()
        }))
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        self.with(|t| {
            let duplicate = t.reactions.iter().any(|r| {
                r.author_id == reaction.author_id
                    && r.target == reaction.target
                    && r.emoji == reaction.emoji
            });
            if duplicate {
                return Err(DomainError::ReactionAlreadySet);
            }
            t.reactions.push(reaction.clone());
            Ok(())
        })
    }

    async fn update(&self, reaction: &Reaction) -> RepoResult<()> {
        self.with(|t| {
            if let Some(row) = t.reactions.iter_mut().find(|r| r.id == reaction.id) {
                *row = reaction.clone();
            }
        });
        Ok(())
    }

    async fn count_by_emoji(&self, target: ReactionTarget) -> RepoResult<Vec<ReactionCount>> {
        Ok(self.with(|t| {
            Emoji::ALL
                .iter()
                .filter_map(|emoji| {
                    let count = t
                        .reactions
                        .iter()
                        .filter(|r| r.target == target && r.emoji == *emoji && r.is_active())
                        .count() as i64;
                    (count > 0).then_some(ReactionCount {
                        emoji: *emoji,
                        count,
                    })
                })
                .collect()
        }))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.with(|t| t.comments.iter().find(|c| c.id == id).cloned()))
    }

    async fn list_by_recipe(
        &self,
        recipe_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>> {
        Ok(self.with(|t| {
            let rows: Vec<Comment> = t
                .comments
                .iter()
                .filter(|c| c.recipe_id == recipe_id)
                .cloned()
                .collect();
            paginate(&rows, page)
        }))
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.with(|t| t.comments.push(comment.clone()));
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        self.with(|t| {
            if let Some(row) = t.comments.iter_mut().find(|c| c.id == comment.id) {
                *row = comment.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.with(|t| t.comments.retain(|c| c.id != id && c.parent_id != Some(id)));
        Ok(())
    }
}

#[async_trait]
impl ViewRepository for MemoryStore {
    async fn record(&self, view: &View) -> RepoResult<()> {
        self.with(|t| t.views.push(view.clone()));
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn exists(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool> {
        Ok(self.with(|t| {
            t.favorites
                .iter()
                .any(|f| f.author_id == author_id && f.recipe_id == recipe_id)
        }))
    }

    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        self.with(|t| {
            let duplicate = t
                .favorites
                .iter()
                .any(|f| f.author_id == favorite.author_id && f.recipe_id == favorite.recipe_id);
            if duplicate {
                return Err(DomainError::AlreadyFavorited);
            }
            t.favorites.push(favorite.clone());
            Ok(())
        })
    }

    async fn delete(&self, author_id: Snowflake, recipe_id: Snowflake) -> RepoResult<bool> {
        Ok(self.with(|t| {
            let before = t.favorites.len();
            t.favorites
                .retain(|f| !(f.author_id == author_id && f.recipe_id == recipe_id));
            t.favorites.len() != before
        }))
    }

    async fn favorited_among(
        &self,
        author_id: Snowflake,
        recipe_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        Ok(self.with(|t| {
            t.favorites
                .iter()
                .filter(|f| f.author_id == author_id && recipe_ids.contains(&f.recipe_id))
                .map(|f| f.recipe_id)
                .collect()
        }))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        Ok(self.with(|t| {
            t.follows
                .iter()
                .any(|f| f.user_id == user_id && f.author_id == author_id)
        }))
    }

    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        self.with(|t| {
            let duplicate = t
                .follows
                .iter()
                .any(|f| f.user_id == follow.user_id && f.author_id == follow.author_id);
            if duplicate {
                return Err(DomainError::AlreadyFollowing(follow.author_id.to_string()));
            }
            t.follows.push(follow.clone());
            Ok(())
        })
    }

    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        Ok(self.with(|t| {
            let before = t.follows.len();
            t.follows
                .retain(|f| !(f.user_id == user_id && f.author_id == author_id));
            t.follows.len() != before
        }))
    }

    async fn following(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>> {
        Ok(self.with(|t| {
            let rows: Vec<FollowEntry> = t
                .follows
                .iter()
                .filter(|f| f.user_id == user_id)
                .map(|f| FollowEntry {
                    id: f.id,
                    user: author_of(t, f.author_id),
                    subscribers_count: t
                        .follows
                        .iter()
                        .filter(|g| g.author_id == f.author_id)
                        .count() as i64,
                })
                .collect();
            paginate(&rows, page)
        }))
    }

    async fn followers(
        &self,
        author_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<FollowEntry>> {
        Ok(self.with(|t| {
            let rows: Vec<FollowEntry> = t
                .follows
                .iter()
                .filter(|f| f.author_id == author_id)
                .map(|f| FollowEntry {
                    id: f.id,
                    user: author_of(t, f.user_id),
                    subscribers_count: t
                        .follows
                        .iter()
                        .filter(|g| g.author_id == f.user_id)
                        .count() as i64,
                })
                .collect();
            paginate(&rows, page)
        }))
    }
}
