use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::api::ApiError;
use crate::auth::UserSession;
use crate::models::{
    CreateWeightLogRequest, PaginatedWeightLogs, UpdateWeightLogRequest, WeightLog,
};
use crate::services::statistics::WeightStats;
use crate::services::{WeightLogQuery, WeightLogService};

#[tracing::instrument(skip(service, request))]
pub async fn create_log(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<CreateWeightLogRequest>,
) -> Result<(StatusCode, Json<WeightLog>), ApiError> {
    let log = service.create_log(session.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

#[tracing::instrument(skip(service))]
pub async fn list_logs(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
    Query(query): Query<WeightLogQuery>,
) -> Result<Json<PaginatedWeightLogs>, ApiError> {
    let page = service.list_logs(session.user_id, query).await?;
    Ok(Json(page))
}

#[tracing::instrument(skip(service))]
pub async fn weight_statistics(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WeightStats>, ApiError> {
    let stats = service.weight_statistics(session.user_id).await?;
    Ok(Json(stats))
}

#[tracing::instrument(skip(service))]
pub async fn get_log(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
    Path(log_id): Path<Uuid>,
) -> Result<Json<WeightLog>, ApiError> {
    let log = service
        .get_log(session.user_id, log_id)
        .await?
        .ok_or(ApiError::NotFound("Weight log"))?;

    Ok(Json(log))
}

#[tracing::instrument(skip(service, update))]
pub async fn update_log(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
    Path(log_id): Path<Uuid>,
    Json(update): Json<UpdateWeightLogRequest>,
) -> Result<Json<WeightLog>, ApiError> {
    let log = service
        .update_log(session.user_id, log_id, update)
        .await?
        .ok_or(ApiError::NotFound("Weight log"))?;

    Ok(Json(log))
}

#[tracing::instrument(skip(service))]
pub async fn delete_log(
    State(service): State<WeightLogService>,
    Extension(session): Extension<UserSession>,
    Path(log_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !service.delete_log(session.user_id, log_id).await? {
        return Err(ApiError::NotFound("Weight log"));
    }

    Ok(StatusCode::NO_CONTENT)
}
