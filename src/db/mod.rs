//! Database module
//!
//! Connection management, startup migrations, the statement execution
//! layer, and the search query builder.

pub mod connection;
pub mod query;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use query::SqlQuery;
pub use store::{BindValue, RecordStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
