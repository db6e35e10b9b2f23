use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::api::ApiError;
use crate::auth::UserSession;
use crate::models::{
    CreateSessionRequest, CreateWorkoutRequest, GenerateWorkoutRequest, UpdateWorkoutRequest,
    Workout, WorkoutSession, WorkoutWithSessions,
};
use crate::services::statistics::WorkoutStats;
use crate::services::{WorkoutFilter, WorkoutService};

#[tracing::instrument(skip(service, request))]
pub async fn create_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let workout = service.create_workout(session.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

#[tracing::instrument(skip(service))]
pub async fn list_workouts(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Query(filter): Query<WorkoutFilter>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = service.list_workouts(session.user_id, filter).await?;
    Ok(Json(workouts))
}

#[tracing::instrument(skip(service))]
pub async fn workout_statistics(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WorkoutStats>, ApiError> {
    let stats = service.workout_statistics(session.user_id).await?;
    Ok(Json(stats))
}

#[tracing::instrument(skip(service, request))]
pub async fn generate_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<GenerateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let workout = service
        .generate_tailored_workout(session.user_id, request)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok((StatusCode::CREATED, Json(workout)))
}

#[tracing::instrument(skip(service))]
pub async fn get_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Path(workout_id): Path<Uuid>,
) -> Result<Json<WorkoutWithSessions>, ApiError> {
    let workout = service
        .get_workout(session.user_id, workout_id)
        .await?
        .ok_or(ApiError::NotFound("Workout"))?;

    Ok(Json(workout))
}

#[tracing::instrument(skip(service, update))]
pub async fn update_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Path(workout_id): Path<Uuid>,
    Json(update): Json<UpdateWorkoutRequest>,
) -> Result<Json<Workout>, ApiError> {
    let workout = service
        .update_workout(session.user_id, workout_id, update)
        .await?
        .ok_or(ApiError::NotFound("Workout"))?;

    Ok(Json(workout))
}

#[tracing::instrument(skip(service))]
pub async fn delete_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Path(workout_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !service.delete_workout(session.user_id, workout_id).await? {
        return Err(ApiError::NotFound("Workout"));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip(service, request))]
pub async fn complete_workout(
    State(service): State<WorkoutService>,
    Extension(session): Extension<UserSession>,
    Path(workout_id): Path<Uuid>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<WorkoutSession>), ApiError> {
    let logged = service
        .log_session(session.user_id, workout_id, request)
        .await?
        .ok_or(ApiError::NotFound("Workout"))?;

    Ok((StatusCode::CREATED, Json(logged)))
}
