use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::UserSession;
use crate::models::{CreateCustomExerciseRequest, Exercise, SaveExerciseRequest};
use crate::providers::ExternalExercise;
use crate::services::{ExerciseFilter, ExerciseService};

/// Search parameters for the lookup API passthrough.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub muscle: Option<String>,
    pub equipment: Option<String>,
}

#[tracing::instrument(skip(service))]
pub async fn search_exercises(
    State(service): State<ExerciseService>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<ExternalExercise>>, ApiError> {
    let exercises = service
        .search_external(
            params.query.as_deref(),
            params.muscle.as_deref(),
            params.equipment.as_deref(),
        )
        .await?;

    Ok(Json(exercises))
}

#[tracing::instrument(skip(service))]
pub async fn target_muscles(
    State(service): State<ExerciseService>,
) -> Result<Json<Vec<String>>, ApiError> {
    let targets = service.target_muscles().await?;
    Ok(Json(targets))
}

#[tracing::instrument(skip(service))]
pub async fn equipment_list(
    State(service): State<ExerciseService>,
) -> Result<Json<Vec<String>>, ApiError> {
    let equipment = service.equipment_list().await?;
    Ok(Json(equipment))
}

#[tracing::instrument(skip(service))]
pub async fn get_external_exercise(
    State(service): State<ExerciseService>,
    Path(id): Path<String>,
) -> Result<Json<ExternalExercise>, ApiError> {
    let exercise = service.get_external(&id).await?;
    Ok(Json(exercise))
}

#[tracing::instrument(skip(service, request))]
pub async fn save_exercise(
    State(service): State<ExerciseService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<SaveExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let exercise = service
        .save_external_exercise(session.user_id, &request.external_api_id)
        .await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

#[tracing::instrument(skip(service, request))]
pub async fn create_custom_exercise(
    State(service): State<ExerciseService>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<CreateCustomExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let exercise = service
        .create_custom_exercise(session.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

#[tracing::instrument(skip(service))]
pub async fn list_exercises(
    State(service): State<ExerciseService>,
    Extension(session): Extension<UserSession>,
    Query(filter): Query<ExerciseFilter>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = service.list_for_user(session.user_id, filter).await?;
    Ok(Json(exercises))
}
