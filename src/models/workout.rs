use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::FitnessLevel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "workout_type", rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Flexibility,
    #[serde(rename = "HIIT")]
    Hiit,
    Custom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "duration_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "weight_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "session_feedback", rename_all = "snake_case")]
pub enum SessionFeedback {
    #[serde(rename = "Too Easy")]
    TooEasy,
    #[serde(rename = "Just Right")]
    JustRight,
    #[serde(rename = "Too Hard")]
    TooHard,
}

/// Weight prescribed for a planned exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExerciseWeight {
    pub value: f64,
    pub unit: WeightUnit,
}

/// One entry of a workout's planned exercise list. Stored as JSONB on the
/// workout row; the name is kept even when an exercise record is referenced
/// so the plan survives exercise deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_api_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    /// For timed exercises, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<ExerciseWeight>,
    /// Rest between sets, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_secs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub workout_type: WorkoutType,
    pub difficulty: FitnessLevel,
    pub duration_value: Option<f64>,
    pub duration_unit: DurationUnit,
    pub exercises: Json<Vec<PlannedExercise>>,
    pub is_active: bool,
    pub tags: Vec<String>,
    pub target_muscle_groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    /// Column list matching the field order of this struct.
    pub const COLUMNS: &'static str = "id, user_id, name, description, workout_type, difficulty, \
         duration_value, duration_unit, exercises, is_active, tags, target_muscle_groups, \
         created_at, updated_at";
}

/// One completed instance of performing a workout. Append-only: sessions are
/// only ever inserted, never updated or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub date: DateTime<Utc>,
    pub duration_value: f64,
    pub duration_unit: DurationUnit,
    pub feedback: Option<SessionFeedback>,
    pub notes: Option<String>,
    pub calories_burned: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Column list matching the field order of this struct.
    pub const COLUMNS: &'static str = "id, workout_id, date, duration_value, duration_unit, \
         feedback, notes, calories_burned, created_at";
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub description: Option<String>,
    pub workout_type: WorkoutType,
    pub difficulty: FitnessLevel,
    pub duration_value: Option<f64>,
    pub duration_unit: Option<DurationUnit>,
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workout_type: Option<WorkoutType>,
    pub difficulty: Option<FitnessLevel>,
    pub duration_value: Option<f64>,
    pub duration_unit: Option<DurationUnit>,
    pub exercises: Option<Vec<PlannedExercise>>,
    pub is_active: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub target_muscle_groups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub date: Option<DateTime<Utc>>,
    pub duration_value: f64,
    pub duration_unit: Option<DurationUnit>,
    pub feedback: Option<SessionFeedback>,
    pub notes: Option<String>,
    pub calories_burned: Option<f64>,
}

/// Inputs for the tailored plan generator endpoint. The goal is matched as an
/// exact string against the known fitness goals; anything else degrades to
/// the general fitness template.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateWorkoutRequest {
    pub goal: String,
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub excluded_exercises: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutWithSessions {
    #[serde(flatten)]
    pub workout: Workout,
    pub completed_sessions: Vec<WorkoutSession>,
}
