use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::FitnessLevel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "muscle_group", rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    Legs,
    Glutes,
    Calves,
    #[serde(rename = "Full Body")]
    FullBody,
    Cardio,
    Other,
}

/// An exercise is either imported from the lookup API (shared, read-only for
/// everyone) or authored by a user (`is_custom`, owned by `created_by`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub external_api_id: Option<String>,
    pub description: Option<String>,
    pub muscle_group: MuscleGroup,
    pub secondary_muscles: Vec<String>,
    pub equipment: String,
    pub difficulty: Option<FitnessLevel>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub is_custom: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exercise {
    /// Column list matching the field order of this struct.
    pub const COLUMNS: &'static str = "id, name, external_api_id, description, muscle_group, \
         secondary_muscles, equipment, difficulty, instructions, image_url, is_custom, \
         created_by, created_at, updated_at";
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomExerciseRequest {
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: MuscleGroup,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    pub equipment: String,
    pub difficulty: Option<FitnessLevel>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveExerciseRequest {
    pub external_api_id: String,
}
