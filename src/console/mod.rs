//! Admin console view state
//!
//! One view-state value object per entity (users, courses), each owning
//! its filter fields, list snapshot, and conditional editor. Views drive
//! the catalog through the [`CatalogApi`] request/response client and
//! reload the list in full after every successful mutation, so displayed
//! data (including derived enrollment counts) is never stale relative to
//! the backing store.

pub mod client;
pub mod courses;
pub mod editor;
pub mod users;

pub use client::{CatalogApi, DirectClient};
pub use courses::CourseConsole;
pub use editor::{CourseDraft, CourseEditor, EditorMode, UserDraft, UserEditor};
pub use users::{UserConsole, UserFilter};

/// Synchronous yes/no gate shown before a destructive action runs.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}
