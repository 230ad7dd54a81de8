//! Course handler implementations

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Course, CourseWithCount},
    services::CatalogService,
    state::AppState,
};

use super::request::{CreateCourseRequest, ListCoursesQuery};

/// List courses with enrollment counts, filtered by search text
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<Vec<CourseWithCount>>> {
    let search = query.search.as_deref().unwrap_or("");

    let courses = CatalogService::list_courses(state.store(), search).await?;

    Ok(Json(courses))
}

/// Create a course
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Course>)> {
    payload.validate()?;

    let course = CatalogService::create_course(state.store(), payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course)))
}
