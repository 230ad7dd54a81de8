//! Record store
//!
//! A stateless conduit between the service layer and Postgres: executes
//! one parameterized statement per call, returns typed rows, and maps
//! every backing-store failure into the opaque store error. No retries,
//! no transactions; write statements use RETURNING so callers never need
//! a follow-up read for server-assigned fields.

use sqlx::{FromRow, PgPool, postgres::PgRow};

use crate::error::{AppError, AppResult};

/// A positional bind value, supplied separately from query text so
/// user-provided input is never interpolated into SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    OptText(Option<String>),
    Int(i32),
    OptInt(Option<i32>),
}

/// Binds every value onto a query builder, in order.
macro_rules! bind_all {
    ($query:expr, $binds:expr) => {{
        let mut query = $query;
        for bind in $binds {
            query = match bind {
                BindValue::Text(v) => query.bind(v.clone()),
                BindValue::OptText(v) => query.bind(v.clone()),
                BindValue::Int(v) => query.bind(*v),
                BindValue::OptInt(v) => query.bind(*v),
            };
        }
        query
    }};
}

/// Executes parameterized statements against the connection pool.
///
/// Owns no business logic and caches nothing between calls.
#[derive(Clone)]
pub struct RecordStore {
    pool: PgPool,
}

impl RecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute a read statement and collect every row.
    pub async fn fetch_all<T>(&self, sql: &str, binds: &[BindValue]) -> AppResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        bind_all!(sqlx::query_as::<_, T>(sql), binds)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    /// Execute a statement expected to produce exactly one row
    /// (typically an INSERT with RETURNING).
    pub async fn fetch_one<T>(&self, sql: &str, binds: &[BindValue]) -> AppResult<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        bind_all!(sqlx::query_as::<_, T>(sql), binds)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }

    /// Execute a statement that produces zero or one row (UPDATE or
    /// DELETE with RETURNING); `None` means the target did not exist.
    pub async fn fetch_optional<T>(&self, sql: &str, binds: &[BindValue]) -> AppResult<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        bind_all!(sqlx::query_as::<_, T>(sql), binds)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore").finish_non_exhaustive()
    }
}
