//! Course management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_courses))
        .route("/", post(handler::create_course))
}
