use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ordinal fitness tiers used to scale plan intensity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(type_name = "fitness_level", rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    Endurance,
    Strength,
    Flexibility,
    #[serde(rename = "General Fitness")]
    GeneralFitness,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Strength => "Strength",
            FitnessGoal::Flexibility => "Flexibility",
            FitnessGoal::GeneralFitness => "General Fitness",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Weight Loss" => Some(FitnessGoal::WeightLoss),
            "Muscle Gain" => Some(FitnessGoal::MuscleGain),
            "Endurance" => Some(FitnessGoal::Endurance),
            "Strength" => Some(FitnessGoal::Strength),
            "Flexibility" => Some(FitnessGoal::Flexibility),
            "General Fitness" => Some(FitnessGoal::GeneralFitness),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "body_type", rename_all = "lowercase")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Ectomorph => "Ectomorph",
            BodyType::Mesomorph => "Mesomorph",
            BodyType::Endomorph => "Endomorph",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "height_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    Inches,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "smartwatch_type", rename_all = "snake_case")]
pub enum SmartwatchType {
    None,
    #[serde(rename = "Apple Watch")]
    AppleWatch,
    Fitbit,
    Garmin,
    Other,
}

impl SmartwatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmartwatchType::None => "None",
            SmartwatchType::AppleWatch => "Apple Watch",
            SmartwatchType::Fitbit => "Fitbit",
            SmartwatchType::Garmin => "Garmin",
            SmartwatchType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub height_value: Option<f64>,
    pub height_unit: HeightUnit,
    pub fitness_level: FitnessLevel,
    pub fitness_goals: Vec<String>,
    pub available_equipment: Vec<String>,
    pub body_type: Option<BodyType>,
    pub smartwatch_connected: bool,
    pub smartwatch_type: SmartwatchType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Column list matching the field order of this struct, for SELECT /
    /// RETURNING clauses.
    pub const COLUMNS: &'static str = "id, email, password_hash, first_name, last_name, age, \
         height_value, height_unit, fitness_level, fitness_goals, available_equipment, \
         body_type, smartwatch_connected, smartwatch_type, created_at, updated_at";
}

/// Profile view returned to clients; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub height_value: Option<f64>,
    pub height_unit: HeightUnit,
    pub fitness_level: FitnessLevel,
    pub fitness_goals: Vec<String>,
    pub available_equipment: Vec<String>,
    pub body_type: Option<BodyType>,
    pub smartwatch_connected: bool,
    pub smartwatch_type: SmartwatchType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            height_value: user.height_value,
            height_unit: user.height_unit,
            fitness_level: user.fitness_level,
            fitness_goals: user.fitness_goals,
            available_equipment: user.available_equipment,
            body_type: user.body_type,
            smartwatch_connected: user.smartwatch_connected,
            smartwatch_type: user.smartwatch_type,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile update payload. Email and password are deliberately absent; they
/// change through dedicated auth flows only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub height_value: Option<f64>,
    pub height_unit: Option<HeightUnit>,
    pub fitness_level: Option<FitnessLevel>,
    pub fitness_goals: Option<Vec<FitnessGoal>>,
    pub available_equipment: Option<Vec<String>>,
    pub body_type: Option<BodyType>,
}
