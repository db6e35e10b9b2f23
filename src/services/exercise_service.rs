use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::ApiError;
use crate::models::{
    validate_required, CreateCustomExerciseRequest, Exercise, FitnessLevel, MuscleGroup,
};
use crate::providers::{ExerciseDbClient, ExternalExercise};

/// Filters for listing saved exercises.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ExerciseFilter {
    pub muscle_group: Option<MuscleGroup>,
    pub equipment: Option<String>,
}

#[derive(Clone)]
pub struct ExerciseService {
    db: PgPool,
    api: ExerciseDbClient,
}

impl ExerciseService {
    pub fn new(db: PgPool, api: ExerciseDbClient) -> Self {
        Self { db, api }
    }

    /// Search the lookup API. Exactly one of the criteria is applied, in the
    /// order query > muscle > equipment; with none, the first 20 of the full
    /// catalogue are returned.
    pub async fn search_external(
        &self,
        query: Option<&str>,
        muscle: Option<&str>,
        equipment: Option<&str>,
    ) -> Result<Vec<ExternalExercise>, ApiError> {
        let exercises = if let Some(query) = query {
            self.api.search_exercises(query).await
        } else if let Some(muscle) = muscle {
            self.api.get_exercises_by_muscle(muscle).await
        } else if let Some(equipment) = equipment {
            self.api.get_exercises_by_equipment(equipment).await
        } else {
            self.api
                .get_all_exercises()
                .await
                .map(|mut all| {
                    all.truncate(20);
                    all
                })
        };

        exercises.map_err(ApiError::upstream)
    }

    pub async fn target_muscles(&self) -> Result<Vec<String>, ApiError> {
        self.api.get_target_muscles().await.map_err(ApiError::upstream)
    }

    pub async fn equipment_list(&self) -> Result<Vec<String>, ApiError> {
        self.api.get_equipment_list().await.map_err(ApiError::upstream)
    }

    pub async fn get_external(&self, id: &str) -> Result<ExternalExercise, ApiError> {
        self.api
            .get_exercise_by_id(id)
            .await
            .map_err(ApiError::upstream)
    }

    /// Import an API exercise into the shared local catalogue. Importing an
    /// already-saved exercise returns the existing record unchanged.
    pub async fn save_external_exercise(
        &self,
        user_id: Uuid,
        external_api_id: &str,
    ) -> Result<Exercise, ApiError> {
        validate_required("external_api_id", external_api_id)?;

        let existing = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {} FROM exercises WHERE external_api_id = $1",
            Exercise::COLUMNS
        ))
        .bind(external_api_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(exercise) = existing {
            return Ok(exercise);
        }

        let external = self.get_external(external_api_id).await?;

        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "INSERT INTO exercises (id, name, external_api_id, description, muscle_group,
                 secondary_muscles, equipment, difficulty, instructions, image_url, is_custom,
                 created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, FALSE, $11, $12, $12)
             RETURNING {}",
            Exercise::COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&external.name)
        .bind(external_api_id)
        .bind(external.instructions.join(". "))
        .bind(map_target_muscle(&external.target))
        .bind(&external.secondary_muscles)
        .bind(&external.equipment)
        .bind(map_difficulty(&external))
        .bind(external.instructions.join(". "))
        .bind(&external.gif_url)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(exercise)
    }

    pub async fn create_custom_exercise(
        &self,
        user_id: Uuid,
        request: CreateCustomExerciseRequest,
    ) -> Result<Exercise, ApiError> {
        validate_required("name", &request.name)?;
        validate_required("equipment", &request.equipment)?;

        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "INSERT INTO exercises (id, name, description, muscle_group, secondary_muscles,
                 equipment, difficulty, instructions, image_url, is_custom, created_by,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $11, $11)
             RETURNING {}",
            Exercise::COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.muscle_group)
        .bind(&request.secondary_muscles)
        .bind(&request.equipment)
        .bind(request.difficulty)
        .bind(&request.instructions)
        .bind(&request.image_url)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(exercise)
    }

    /// List the caller's custom exercises together with the shared catalogue,
    /// sorted by name.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: ExerciseFilter,
    ) -> Result<Vec<Exercise>, ApiError> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {} FROM exercises
             WHERE (is_custom = FALSE OR created_by = $1)
               AND ($2::muscle_group IS NULL OR muscle_group = $2)
               AND ($3::text IS NULL OR equipment = $3)
             ORDER BY name ASC",
            Exercise::COLUMNS
        ))
        .bind(user_id)
        .bind(filter.muscle_group)
        .bind(filter.equipment)
        .fetch_all(&self.db)
        .await?;

        Ok(exercises)
    }
}

/// The lookup API does not report difficulty; estimate it from equipment.
fn map_difficulty(exercise: &ExternalExercise) -> FitnessLevel {
    match exercise.equipment.as_str() {
        "body weight" => FitnessLevel::Beginner,
        "dumbbell" | "cable" => FitnessLevel::Intermediate,
        _ => FitnessLevel::Advanced,
    }
}

/// Map the API's lowercase target muscle names onto the local muscle groups.
fn map_target_muscle(target: &str) -> MuscleGroup {
    match target {
        "pectorals" => MuscleGroup::Chest,
        "lats" | "upper back" | "spine" => MuscleGroup::Back,
        "delts" | "traps" => MuscleGroup::Shoulders,
        "biceps" | "forearms" => MuscleGroup::Biceps,
        "triceps" => MuscleGroup::Triceps,
        "abs" => MuscleGroup::Abs,
        "quads" | "hamstrings" | "adductors" | "abductors" => MuscleGroup::Legs,
        "glutes" => MuscleGroup::Glutes,
        "calves" => MuscleGroup::Calves,
        "cardiovascular system" => MuscleGroup::Cardio,
        _ => MuscleGroup::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn external(equipment: &str, target: &str) -> ExternalExercise {
        ExternalExercise {
            id: "1001".to_string(),
            name: "test exercise".to_string(),
            target: target.to_string(),
            body_part: None,
            equipment: equipment.to_string(),
            secondary_muscles: vec![],
            instructions: vec![],
            gif_url: None,
        }
    }

    #[test]
    fn difficulty_heuristic_follows_equipment() {
        assert_eq!(
            map_difficulty(&external("body weight", "abs")),
            FitnessLevel::Beginner
        );
        assert_eq!(
            map_difficulty(&external("dumbbell", "biceps")),
            FitnessLevel::Intermediate
        );
        assert_eq!(
            map_difficulty(&external("cable", "lats")),
            FitnessLevel::Intermediate
        );
        assert_eq!(
            map_difficulty(&external("barbell", "quads")),
            FitnessLevel::Advanced
        );
    }

    #[test]
    fn target_muscles_map_to_local_groups() {
        assert_eq!(map_target_muscle("pectorals"), MuscleGroup::Chest);
        assert_eq!(map_target_muscle("cardiovascular system"), MuscleGroup::Cardio);
        assert_eq!(map_target_muscle("glutes"), MuscleGroup::Glutes);
        assert_eq!(map_target_muscle("serratus anterior"), MuscleGroup::Other);
    }
}
