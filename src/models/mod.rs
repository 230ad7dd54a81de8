//! Domain models
//!
//! Row types returned by the catalog and the input shapes accepted by
//! its write operations.

pub mod course;
pub mod user;

pub use course::*;
pub use user::*;
