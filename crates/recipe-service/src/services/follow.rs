//! Follow service
//!
//! Subscriptions between users and the following/followers listings.

use recipe_core::{DomainError, Follow, FollowEntry, Page, PageRequest, Snowflake, User};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::CreateFollowRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe `user_id` to the author named in the request
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        user_id: Snowflake,
        request: CreateFollowRequest,
    ) -> ServiceResult<FollowEntry> {
        request.validate()?;
        let author = self.load_user(&request.author).await?;
        let follow = Follow::new(self.ctx.generate_id(), user_id, author.id)?;

        if self.ctx.follow_repo().exists(user_id, author.id).await? {
            return Err(DomainError::AlreadyFollowing(author.username).into());
        }
        self.ctx.follow_repo().create(&follow).await?;

        let subscribers = self
            .ctx
            .follow_repo()
            .followers(author.id, PageRequest::first(1))
            .await?;

        info!(user_id = %user_id, author_id = %author.id, "Subscribed");
        Ok(FollowEntry {
            id: follow.id,
            user: author.to_author(),
            subscribers_count: subscribers.count,
        })
    }

    /// Remove the subscription of `user_id` to `username`
    #[instrument(skip(self))]
    pub async fn unfollow(&self, user_id: Snowflake, username: &str) -> ServiceResult<()> {
        let author = self.load_user(username).await?;

        if !self.ctx.follow_repo().delete(user_id, author.id).await? {
            return Err(DomainError::FollowNotFound(author.username).into());
        }

        info!(user_id = %user_id, author_id = %author.id, "Unsubscribed");
        Ok(())
    }

    /// Authors `username` follows
    #[instrument(skip(self))]
    pub async fn following(&self, username: &str, page: u32) -> ServiceResult<Page<FollowEntry>> {
        let user = self.load_user(username).await?;
        let request = PageRequest::new(page, self.ctx.feed_config().follow_page_size)?;
        let page = self.ctx.follow_repo().following(user.id, request).await?;
        Self::in_range(page)
    }

    /// Users following `username`
    #[instrument(skip(self))]
    pub async fn followers(&self, username: &str, page: u32) -> ServiceResult<Page<FollowEntry>> {
        let user = self.load_user(username).await?;
        let request = PageRequest::new(page, self.ctx.feed_config().follow_page_size)?;
        let page = self.ctx.follow_repo().followers(user.id, request).await?;
        Self::in_range(page)
    }

    async fn load_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }

    fn in_range(page: Page<FollowEntry>) -> ServiceResult<Page<FollowEntry>> {
        if page.is_out_of_range() {
            return Err(DomainError::PageNotFound.into());
        }
        Ok(page)
    }
}
