//! HTTP Request Handlers
//!
//! Thin transport layer over the catalog service, organized by domain.

pub mod courses;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/users", users::routes())
        .nest("/courses", courses::routes())
}
