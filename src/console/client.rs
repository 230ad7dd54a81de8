//! Catalog client seam
//!
//! The console views talk to the catalog through this trait so they can
//! be exercised against a mock; [`DirectClient`] is the in-process
//! implementation over the record store.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    db::RecordStore,
    error::AppResult,
    models::{Course, CourseWithCount, NewCourse, NewUser, User, UserPatch},
};
use crate::services::CatalogService;

/// Request/response client for the six catalog operations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_courses(&self, search: &str) -> AppResult<Vec<CourseWithCount>>;

    async fn create_course(&self, input: NewCourse) -> AppResult<Course>;

    async fn list_users(&self, search: &str, role: &str) -> AppResult<Vec<User>>;

    async fn create_user(&self, input: NewUser) -> AppResult<User>;

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Client that calls the catalog service directly, without a wire hop.
#[derive(Debug, Clone)]
pub struct DirectClient {
    store: RecordStore,
}

impl DirectClient {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogApi for DirectClient {
    async fn list_courses(&self, search: &str) -> AppResult<Vec<CourseWithCount>> {
        CatalogService::list_courses(&self.store, search).await
    }

    async fn create_course(&self, input: NewCourse) -> AppResult<Course> {
        CatalogService::create_course(&self.store, input).await
    }

    async fn list_users(&self, search: &str, role: &str) -> AppResult<Vec<User>> {
        CatalogService::list_users(&self.store, search, role).await
    }

    async fn create_user(&self, input: NewUser) -> AppResult<User> {
        CatalogService::create_user(&self.store, input).await
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        CatalogService::update_user(&self.store, id, patch).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        CatalogService::delete_user(&self.store, id).await
    }
}
