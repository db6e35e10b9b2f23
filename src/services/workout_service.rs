use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::ApiError;
use crate::models::{
    validate_required, CreateSessionRequest, CreateWorkoutRequest, DurationUnit, FitnessGoal,
    FitnessLevel, GenerateWorkoutRequest, UpdateWorkoutRequest, User, Workout, WorkoutSession,
    WorkoutType, WorkoutWithSessions,
};
use crate::services::plan_generator;
use crate::services::statistics::{compute_workout_stats, WorkoutStats};

/// Filters for listing a user's workouts.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WorkoutFilter {
    #[serde(rename = "type")]
    pub workout_type: Option<WorkoutType>,
    pub difficulty: Option<FitnessLevel>,
    pub is_active: Option<bool>,
}

#[derive(Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_workout(
        &self,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> Result<Workout, ApiError> {
        validate_required("name", &request.name)?;

        let workout = sqlx::query_as::<_, Workout>(&format!(
            "INSERT INTO workouts (id, user_id, name, description, workout_type, difficulty,
                 duration_value, duration_unit, exercises, is_active, tags, target_muscle_groups,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
             RETURNING {}",
            Workout::COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.workout_type)
        .bind(request.difficulty)
        .bind(request.duration_value)
        .bind(request.duration_unit.unwrap_or(DurationUnit::Minutes))
        .bind(Json(&request.exercises))
        .bind(request.is_active.unwrap_or(true))
        .bind(&request.tags)
        .bind(&request.target_muscle_groups)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(workout)
    }

    /// List the caller's workouts, newest first, with optional filters.
    pub async fn list_workouts(
        &self,
        user_id: Uuid,
        filter: WorkoutFilter,
    ) -> Result<Vec<Workout>, ApiError> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {} FROM workouts
             WHERE user_id = $1
               AND ($2::workout_type IS NULL OR workout_type = $2)
               AND ($3::fitness_level IS NULL OR difficulty = $3)
               AND ($4::boolean IS NULL OR is_active = $4)
             ORDER BY created_at DESC",
            Workout::COLUMNS
        ))
        .bind(user_id)
        .bind(filter.workout_type)
        .bind(filter.difficulty)
        .bind(filter.is_active)
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }

    pub async fn get_workout(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<Option<WorkoutWithSessions>, ApiError> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {} FROM workouts WHERE id = $1 AND user_id = $2",
            Workout::COLUMNS
        ))
        .bind(workout_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(workout) = workout else {
            return Ok(None);
        };

        let completed_sessions = self.sessions_for(workout.id).await?;

        Ok(Some(WorkoutWithSessions {
            workout,
            completed_sessions,
        }))
    }

    pub async fn update_workout(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        update: UpdateWorkoutRequest,
    ) -> Result<Option<Workout>, ApiError> {
        if let Some(name) = &update.name {
            validate_required("name", name)?;
        }

        let workout = sqlx::query_as::<_, Workout>(&format!(
            "UPDATE workouts
             SET name = COALESCE($3, name),
                 description = COALESCE($4, description),
                 workout_type = COALESCE($5, workout_type),
                 difficulty = COALESCE($6, difficulty),
                 duration_value = COALESCE($7, duration_value),
                 duration_unit = COALESCE($8, duration_unit),
                 exercises = COALESCE($9, exercises),
                 is_active = COALESCE($10, is_active),
                 tags = COALESCE($11, tags),
                 target_muscle_groups = COALESCE($12, target_muscle_groups),
                 updated_at = $13
             WHERE id = $1 AND user_id = $2
             RETURNING {}",
            Workout::COLUMNS
        ))
        .bind(workout_id)
        .bind(user_id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.workout_type)
        .bind(update.difficulty)
        .bind(update.duration_value)
        .bind(update.duration_unit)
        .bind(update.exercises.map(Json))
        .bind(update.is_active)
        .bind(update.tags)
        .bind(update.target_muscle_groups)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn delete_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Log a completed session. This is a single INSERT guarded by the
    /// ownership check; concurrent completions of the same workout both
    /// land, there is no list to read back and overwrite.
    pub async fn log_session(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        request: CreateSessionRequest,
    ) -> Result<Option<WorkoutSession>, ApiError> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            "INSERT INTO workout_sessions (id, workout_id, date, duration_value, duration_unit,
                 feedback, notes, calories_burned, created_at)
             SELECT $1, w.id, $4, $5, $6, $7, $8, $9, $10
             FROM workouts w
             WHERE w.id = $2 AND w.user_id = $3
             RETURNING {}",
            WorkoutSession::COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(workout_id)
        .bind(user_id)
        .bind(request.date.unwrap_or_else(Utc::now))
        .bind(request.duration_value)
        .bind(request.duration_unit.unwrap_or(DurationUnit::Minutes))
        .bind(request.feedback)
        .bind(request.notes)
        .bind(request.calories_burned)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    /// Generate a tailored plan from the caller's profile and persist it as
    /// a new workout.
    pub async fn generate_tailored_workout(
        &self,
        user_id: Uuid,
        request: GenerateWorkoutRequest,
    ) -> Result<Option<Workout>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            User::COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        // Unrecognized goals silently degrade to the general fitness template.
        let goal =
            FitnessGoal::from_str(&request.goal).unwrap_or(FitnessGoal::GeneralFitness);

        let plan = plan_generator::generate(
            goal,
            user.fitness_level,
            user.body_type,
            &user.available_equipment,
            request.duration_minutes,
            &request.excluded_exercises,
        );

        let workout = sqlx::query_as::<_, Workout>(&format!(
            "INSERT INTO workouts (id, user_id, name, description, workout_type, difficulty,
                 duration_value, duration_unit, exercises, is_active, tags, target_muscle_groups,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'minutes', $8, TRUE, $9, $10, $11, $11)
             RETURNING {}",
            Workout::COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.workout_type)
        .bind(plan.difficulty)
        .bind(plan.duration_minutes.map(f64::from))
        .bind(Json(&plan.exercises))
        .bind(&plan.tags)
        .bind(&plan.target_muscle_groups)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(Some(workout))
    }

    /// Load everything the caller owns and reduce it to summary statistics.
    pub async fn workout_statistics(&self, user_id: Uuid) -> Result<WorkoutStats, ApiError> {
        let workouts = self.list_workouts(user_id, WorkoutFilter::default()).await?;

        let mut with_sessions = Vec::with_capacity(workouts.len());
        for workout in workouts {
            let completed_sessions = self.sessions_for(workout.id).await?;
            with_sessions.push(WorkoutWithSessions {
                workout,
                completed_sessions,
            });
        }

        Ok(compute_workout_stats(&with_sessions))
    }

    async fn sessions_for(&self, workout_id: Uuid) -> Result<Vec<WorkoutSession>, ApiError> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {} FROM workout_sessions WHERE workout_id = $1 ORDER BY date ASC, created_at ASC",
            WorkoutSession::COLUMNS
        ))
        .bind(workout_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }
}
