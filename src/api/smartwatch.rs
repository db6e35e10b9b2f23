use axum::extract::State;
use axum::{Extension, Json};

use crate::api::ApiError;
use crate::auth::UserSession;
use crate::services::{ConnectWatchRequest, SmartwatchService, SyncResult, WatchStatus};

#[tracing::instrument(skip(service))]
pub async fn watch_status(
    State(service): State<SmartwatchService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WatchStatus>, ApiError> {
    let status = service
        .status(session.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(status))
}

#[tracing::instrument(skip(service, request))]
pub async fn connect_watch(
    State(service): State<SmartwatchService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<ConnectWatchRequest>,
) -> Result<Json<WatchStatus>, ApiError> {
    let status = service
        .connect(session.user_id, request)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(status))
}

#[tracing::instrument(skip(service))]
pub async fn sync_watch(
    State(service): State<SmartwatchService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<SyncResult>, ApiError> {
    let result = service
        .sync(session.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(result))
}

#[tracing::instrument(skip(service))]
pub async fn disconnect_watch(
    State(service): State<SmartwatchService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WatchStatus>, ApiError> {
    let status = service
        .disconnect(session.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(status))
}
