//! LMS Admin - Learning-Management Catalog Console
//!
//! Backend and view-state core for an administrative console over a
//! learning-management catalog: user accounts, course records, and a
//! derived per-course enrollment count.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and input validation
//! - **Db**: Query construction and statement execution
//! - **Console**: View state machines driving the catalog through a
//!   request/response client
//! - **Models**: Domain rows and input shapes

pub mod config;
pub mod console;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
