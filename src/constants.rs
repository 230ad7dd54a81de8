//! Application-wide constants

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Maximum account name length accepted by the API
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum course name length accepted by the API
pub const MAX_COURSE_NAME_LENGTH: u64 = 256;

/// Role filter value that imposes no role constraint
pub const ROLE_FILTER_ALL: &str = "all";
