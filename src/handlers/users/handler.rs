//! User handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    constants::ROLE_FILTER_ALL,
    error::AppResult,
    services::CatalogService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest},
    response::UserResponse,
};

/// List user accounts, filtered by search text and role
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let search = query.search.as_deref().unwrap_or("");
    let role = query.role.as_deref().unwrap_or(ROLE_FILTER_ALL);

    let users = CatalogService::list_users(state.store(), search, role).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user account
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;

    let user = CatalogService::create_user(state.store(), payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Update a user account
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = CatalogService::update_user(state.store(), id, payload.into()).await?;

    Ok(Json(user.into()))
}

/// Delete a user account
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    CatalogService::delete_user(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
