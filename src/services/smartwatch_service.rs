use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiError;
use crate::models::{
    FitnessLevel, PlannedExercise, SmartwatchType, User, ValidationError, WorkoutType,
};
use crate::providers::{ImportedSession, SmartwatchProvider};

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectWatchRequest {
    pub watch_type: SmartwatchType,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchStatus {
    pub connected: bool,
    pub watch_type: SmartwatchType,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncResult {
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Clone)]
pub struct SmartwatchService {
    db: PgPool,
}

impl SmartwatchService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn status(&self, user_id: Uuid) -> Result<Option<WatchStatus>, ApiError> {
        let user = self.load_user(user_id).await?;

        Ok(user.map(|user| WatchStatus {
            connected: user.smartwatch_connected,
            watch_type: user.smartwatch_type,
        }))
    }

    /// Link a supported device to the account. Device types without a vendor
    /// integration are rejected up front.
    pub async fn connect(
        &self,
        user_id: Uuid,
        request: ConnectWatchRequest,
    ) -> Result<Option<WatchStatus>, ApiError> {
        crate::models::validate_required("access_token", &request.access_token)?;

        let provider = SmartwatchProvider::for_type(request.watch_type).ok_or_else(|| {
            ValidationError::new(
                "watch_type",
                format!(
                    "{} is not a supported smartwatch type",
                    request.watch_type.as_str()
                ),
            )
        })?;

        provider
            .connect(&request.access_token)
            .await
            .map_err(ApiError::upstream)?;

        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE users
             SET smartwatch_connected = TRUE, smartwatch_type = $2, updated_at = $3
             WHERE id = $1
             RETURNING id",
        )
        .bind(user_id)
        .bind(provider.watch_type())
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        info!(%user_id, watch_type = provider.watch_type().as_str(), "smartwatch connected");

        Ok(Some(WatchStatus {
            connected: true,
            watch_type: provider.watch_type(),
        }))
    }

    /// Pull recent activities from the connected vendor and record each as a
    /// workout with one completed session. Activities already imported for
    /// the same start time are skipped, so repeated syncs are idempotent.
    pub async fn sync(&self, user_id: Uuid) -> Result<Option<SyncResult>, ApiError> {
        let Some(user) = self.load_user(user_id).await? else {
            return Ok(None);
        };

        if !user.smartwatch_connected {
            return Err(ValidationError::new(
                "smartwatch",
                "No smartwatch is connected to this account",
            )
            .into());
        }

        let provider = SmartwatchProvider::for_type(user.smartwatch_type).ok_or_else(|| {
            ValidationError::new("smartwatch", "The connected smartwatch type is not supported")
        })?;

        let sessions = provider.sync_workouts().await.map_err(ApiError::upstream)?;

        let mut imported = 0;
        let mut skipped = 0;
        for session in sessions {
            if self.already_imported(user_id, &session).await? {
                skipped += 1;
                continue;
            }
            self.import_session(user_id, &provider, &session).await?;
            imported += 1;
        }

        info!(%user_id, imported, skipped, "smartwatch sync finished");

        Ok(Some(SyncResult { imported, skipped }))
    }

    pub async fn disconnect(&self, user_id: Uuid) -> Result<Option<WatchStatus>, ApiError> {
        let Some(user) = self.load_user(user_id).await? else {
            return Ok(None);
        };

        if let Some(provider) = SmartwatchProvider::for_type(user.smartwatch_type) {
            provider.disconnect().await.map_err(ApiError::upstream)?;
        }

        sqlx::query(
            "UPDATE users
             SET smartwatch_connected = FALSE, smartwatch_type = 'none', updated_at = $2
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.db)
        .await?;

        Ok(Some(WatchStatus {
            connected: false,
            watch_type: SmartwatchType::None,
        }))
    }

    async fn load_user(&self, user_id: Uuid) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            User::COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// Imported workouts are keyed on their session start time; a session at
    /// the same instant for the same user means the activity was synced on a
    /// previous run.
    async fn already_imported(
        &self,
        user_id: Uuid,
        session: &ImportedSession,
    ) -> Result<bool, ApiError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM workout_sessions s
             JOIN workouts w ON w.id = s.workout_id
             WHERE w.user_id = $1 AND s.date = $2",
        )
        .bind(user_id)
        .bind(session.start)
        .fetch_one(&self.db)
        .await?;

        Ok(count > 0)
    }

    async fn import_session(
        &self,
        user_id: Uuid,
        provider: &SmartwatchProvider,
        session: &ImportedSession,
    ) -> Result<(), ApiError> {
        let mut tx = self.db.begin().await?;
        let now = Utc::now();

        let name = format!("{} ({})", session.activity, provider.watch_type().as_str());
        let notes = session
            .distance_km
            .map(|distance| format!("Distance: {distance:.1} km"));

        let workout_id: Uuid = sqlx::query_scalar(
            "INSERT INTO workouts (id, user_id, name, description, workout_type, difficulty,
                 duration_value, duration_unit, exercises, is_active, tags, target_muscle_groups,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'minutes', $8, TRUE, $9, '{}', $10, $10)
             RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&name)
        .bind(format!("Imported from {}", provider.watch_type().as_str()))
        .bind(map_activity_type(&session.activity))
        .bind(FitnessLevel::Intermediate)
        .bind(session.duration_minutes)
        .bind(Json(Vec::<PlannedExercise>::new()))
        .bind(vec!["imported".to_string()])
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO workout_sessions (id, workout_id, date, duration_value, duration_unit,
                 feedback, notes, calories_burned, created_at)
             VALUES ($1, $2, $3, $4, 'minutes', NULL, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(workout_id)
        .bind(session.start)
        .bind(session.duration_minutes)
        .bind(notes)
        .bind(session.calories_burned)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Map vendor activity labels to the local workout taxonomy.
fn map_activity_type(activity: &str) -> WorkoutType {
    let lowered = activity.to_lowercase();
    if lowered.contains("strength") || lowered.contains("weight") {
        WorkoutType::Strength
    } else if lowered.contains("run")
        || lowered.contains("walk")
        || lowered.contains("cycl")
        || lowered.contains("swim")
    {
        WorkoutType::Cardio
    } else if lowered.contains("yoga") || lowered.contains("stretch") {
        WorkoutType::Flexibility
    } else if lowered.contains("hiit") || lowered.contains("interval") {
        WorkoutType::Hiit
    } else {
        WorkoutType::Custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_labels_map_to_workout_types() {
        assert_eq!(map_activity_type("Running"), WorkoutType::Cardio);
        assert_eq!(map_activity_type("Strength Training"), WorkoutType::Strength);
        assert_eq!(map_activity_type("Yoga Flow"), WorkoutType::Flexibility);
        assert_eq!(map_activity_type("HIIT Circuit"), WorkoutType::Hiit);
        assert_eq!(map_activity_type("Rock Climbing"), WorkoutType::Custom);
    }
}
