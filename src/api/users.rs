use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::api::ApiError;
use crate::auth::{AuthResponse, AuthService, LoginRequest, RegisterRequest, UserSession};
use crate::models::{UpdateProfileRequest, UserResponse};
use crate::services::UserService;

#[tracing::instrument(skip(auth_service, request), fields(email = %request.email))]
pub async fn register(
    State(auth_service): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), crate::auth::AuthError> {
    let response = auth_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[tracing::instrument(skip(auth_service, request), fields(email = %request.email))]
pub async fn login(
    State(auth_service): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, crate::auth::AuthError> {
    let response = auth_service.login(request).await?;
    Ok(Json(response))
}

#[tracing::instrument(skip(user_service))]
pub async fn get_profile(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_service
        .get_user_by_id(session.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user))
}

#[tracing::instrument(skip(user_service, update))]
pub async fn update_profile(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
    Json(update): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_service
        .update_profile(session.user_id, update)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user))
}
