use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{validate_age, validate_required, UpdateProfileRequest, User, UserResponse};

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<UserResponse>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            User::COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user.map(UserResponse::from))
    }

    /// Update profile attributes. Email and password are never touched here.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: UpdateProfileRequest,
    ) -> Result<Option<UserResponse>, crate::api::ApiError> {
        if let Some(first_name) = &update.first_name {
            validate_required("first_name", first_name)?;
        }
        if let Some(last_name) = &update.last_name {
            validate_required("last_name", last_name)?;
        }
        if let Some(age) = update.age {
            validate_age(age)?;
        }

        let fitness_goals = update.fitness_goals.map(|goals| {
            goals
                .iter()
                .map(|goal| goal.as_str().to_string())
                .collect::<Vec<_>>()
        });

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 age = COALESCE($4, age),
                 height_value = COALESCE($5, height_value),
                 height_unit = COALESCE($6, height_unit),
                 fitness_level = COALESCE($7, fitness_level),
                 fitness_goals = COALESCE($8, fitness_goals),
                 available_equipment = COALESCE($9, available_equipment),
                 body_type = COALESCE($10, body_type),
                 updated_at = $11
             WHERE id = $1
             RETURNING {}",
            User::COLUMNS
        ))
        .bind(user_id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.age)
        .bind(update.height_value)
        .bind(update.height_unit)
        .bind(update.fitness_level)
        .bind(fitness_goals)
        .bind(update.available_equipment)
        .bind(update.body_type)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await
        .map_err(crate::api::ApiError::Database)?;

        Ok(user.map(UserResponse::from))
    }
}
