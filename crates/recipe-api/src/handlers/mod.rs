//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod comments;
pub mod favorites;
pub mod feed;
pub mod follows;
pub mod health;
pub mod reactions;
pub mod recipes;
