use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::ApiError;
use crate::models::{
    validate_notes, validate_weight_value, CreateWeightLogRequest, PaginatedWeightLogs,
    Pagination, UpdateWeightLogRequest, WeightLog, WeightUnit,
};
use crate::services::statistics::{compute_weight_stats, WeightStats};

/// Date-range and pagination parameters for listing weight logs.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WeightLogQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

#[derive(Clone)]
pub struct WeightLogService {
    db: PgPool,
}

impl WeightLogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_log(
        &self,
        user_id: Uuid,
        request: CreateWeightLogRequest,
    ) -> Result<WeightLog, ApiError> {
        validate_weight_value(request.weight_value)?;
        if let Some(notes) = &request.notes {
            validate_notes(notes)?;
        }

        let log = sqlx::query_as::<_, WeightLog>(
            "INSERT INTO weight_logs (id, user_id, weight_value, weight_unit, notes, measured_at,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING id, user_id, weight_value, weight_unit, notes, measured_at, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(request.weight_value)
        .bind(request.weight_unit.unwrap_or(WeightUnit::Kg))
        .bind(request.notes)
        .bind(request.measured_at.unwrap_or_else(Utc::now))
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(log)
    }

    /// List the caller's logs newest first, optionally bounded by date, with
    /// limit/page pagination (defaults: 10 per page, page 1).
    pub async fn list_logs(
        &self,
        user_id: Uuid,
        query: WeightLogQuery,
    ) -> Result<PaginatedWeightLogs, ApiError> {
        let limit = query.limit.unwrap_or(10).max(1);
        let page = query.page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        let logs = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, weight_value, weight_unit, notes, measured_at, created_at, updated_at
             FROM weight_logs
             WHERE user_id = $1
               AND ($2::timestamptz IS NULL OR measured_at >= $2)
               AND ($3::timestamptz IS NULL OR measured_at <= $3)
             ORDER BY measured_at DESC
             LIMIT $4 OFFSET $5",
        )
        .bind(user_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        let total_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM weight_logs
             WHERE user_id = $1
               AND ($2::timestamptz IS NULL OR measured_at >= $2)
               AND ($3::timestamptz IS NULL OR measured_at <= $3)",
        )
        .bind(user_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .fetch_one(&self.db)
        .await?;

        Ok(PaginatedWeightLogs {
            weight_logs: logs,
            pagination: Pagination {
                total_count,
                total_pages: (total_count + limit - 1) / limit,
                current_page: page,
                limit,
            },
        })
    }

    pub async fn get_log(
        &self,
        user_id: Uuid,
        log_id: Uuid,
    ) -> Result<Option<WeightLog>, ApiError> {
        let log = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, weight_value, weight_unit, notes, measured_at, created_at, updated_at
             FROM weight_logs WHERE id = $1 AND user_id = $2",
        )
        .bind(log_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(log)
    }

    pub async fn update_log(
        &self,
        user_id: Uuid,
        log_id: Uuid,
        update: UpdateWeightLogRequest,
    ) -> Result<Option<WeightLog>, ApiError> {
        if let Some(value) = update.weight_value {
            validate_weight_value(value)?;
        }
        if let Some(notes) = &update.notes {
            validate_notes(notes)?;
        }

        let log = sqlx::query_as::<_, WeightLog>(
            "UPDATE weight_logs
             SET weight_value = COALESCE($3, weight_value),
                 weight_unit = COALESCE($4, weight_unit),
                 notes = COALESCE($5, notes),
                 measured_at = COALESCE($6, measured_at),
                 updated_at = $7
             WHERE id = $1 AND user_id = $2
             RETURNING id, user_id, weight_value, weight_unit, notes, measured_at, created_at, updated_at",
        )
        .bind(log_id)
        .bind(user_id)
        .bind(update.weight_value)
        .bind(update.weight_unit)
        .bind(update.notes)
        .bind(update.measured_at)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?;

        Ok(log)
    }

    pub async fn delete_log(&self, user_id: Uuid, log_id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM weight_logs WHERE id = $1 AND user_id = $2")
            .bind(log_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Load every log the caller owns and reduce to summary statistics.
    pub async fn weight_statistics(&self, user_id: Uuid) -> Result<WeightStats, ApiError> {
        let logs = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, weight_value, weight_unit, notes, measured_at, created_at, updated_at
             FROM weight_logs WHERE user_id = $1 ORDER BY measured_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(compute_weight_stats(&logs))
    }
}
