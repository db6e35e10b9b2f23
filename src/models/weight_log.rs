use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::WeightUnit;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_value: f64,
    pub weight_unit: WeightUnit,
    pub notes: Option<String>,
    pub measured_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWeightLogRequest {
    pub weight_value: f64,
    pub weight_unit: Option<WeightUnit>,
    pub notes: Option<String>,
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWeightLogRequest {
    pub weight_value: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub notes: Option<String>,
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedWeightLogs {
    pub weight_logs: Vec<WeightLog>,
    pub pagination: Pagination,
}
