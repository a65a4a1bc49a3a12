//! Social filter: which recipes are feed candidates

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Value of the `filter` parameter selecting the subscriptions feed
pub const SUBSCRIPTIONS_PARAM: &str = "subscriptions";

/// Candidate set restriction for a feed request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedFilter {
    /// Every recipe
    #[default]
    All,
    /// Recipes by authors the given user follows
    Subscriptions(Snowflake),
    /// Recipes by the named author. An unknown name matches nothing.
    Author(String),
}

impl FeedFilter {
    /// Resolve the filter from request parameters.
    ///
    /// `username` takes precedence over `filter=subscriptions` since it needs
    /// no authentication. Subscriptions without a viewer fail with
    /// [`DomainError::AuthenticationRequired`]. Unknown `filter` values are
    /// ignored.
    pub fn resolve(
        viewer: Option<Snowflake>,
        filter: Option<&str>,
        username: Option<&str>,
    ) -> Result<Self, DomainError> {
        if let Some(name) = username.map(str::trim).filter(|n| !n.is_empty()) {
            return Ok(Self::Author(name.to_string()));
        }

        match filter {
            Some(SUBSCRIPTIONS_PARAM) => viewer
                .map(Self::Subscriptions)
                .ok_or(DomainError::AuthenticationRequired),
            _ => Ok(Self::All),
        }
    }
}
