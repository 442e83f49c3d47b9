//! User handlers

use axum::{extract::State, Json};
use setlist_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use setlist_service::UserService;
use uuid::Uuid;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// GET /api/users/email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user_by_email(&email).await?;
    Ok(Json(response))
}

/// Update profile fields
///
/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(user_id, request).await?;
    Ok(Json(response))
}
