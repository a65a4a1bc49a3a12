//! Feed domain types
//!
//! A feed request is resolved into a [`FeedQuery`] once, up front: who is
//! looking, which recipes are candidates ([`FeedFilter`]), how they are sorted
//! ([`FeedOrdering`]), where the activity window starts and which page is
//! wanted. The query is then handed to
//! [`FeedRepository::fetch_feed`](crate::traits::FeedRepository::fetch_feed)
//! and executed in a single step.

mod counts;
mod filter;
mod item;
mod ordering;
mod page;
mod query;

pub use counts::ActivityCounts;
pub use filter::FeedFilter;
pub use item::FeedItem;
pub use ordering::FeedOrdering;
pub use page::{Page, PageRequest};
pub use query::{FeedQuery, FeedQueryBuilder};
