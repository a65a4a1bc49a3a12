//! # recipe-api
//!
//! REST API server built with Axum framework.
//!
//! Serves the ranked recipe feed under `/api/v1/feed/` together with the
//! recipe, reaction, comment, favorite and subscription endpoints.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod testing;

pub use server::{build_state, create_app, create_app_state, run, run_server};
pub use state::AppState;
