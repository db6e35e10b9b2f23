use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ExerciseDB (RapidAPI) client.
///
/// Responses are treated as opaque exercise records; mapping into the local
/// exercise shape happens in the exercise service.
#[derive(Clone)]
pub struct ExerciseDbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Exercise record as returned by the ExerciseDB API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalExercise {
    pub id: String,
    pub name: String,
    /// Primary target muscle, lowercase (e.g. "biceps", "cardiovascular system").
    pub target: String,
    pub body_part: Option<String>,
    pub equipment: String,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub gif_url: Option<String>,
}

impl ExerciseDbClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: "https://exercisedb.p.rapidapi.com".to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", "exercisedb.p.rapidapi.com")
            .send()
            .await
            .with_context(|| format!("ExerciseDB request failed: {path}"))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("ExerciseDB returned an error status: {path}"))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode ExerciseDB response: {path}"))
    }

    pub async fn get_all_exercises(&self) -> Result<Vec<ExternalExercise>> {
        self.get_json("/exercises").await
    }

    pub async fn get_exercise_by_id(&self, id: &str) -> Result<ExternalExercise> {
        self.get_json(&format!("/exercises/exercise/{id}")).await
    }

    pub async fn get_exercises_by_muscle(&self, muscle: &str) -> Result<Vec<ExternalExercise>> {
        self.get_json(&format!("/exercises/target/{muscle}")).await
    }

    pub async fn get_exercises_by_equipment(
        &self,
        equipment: &str,
    ) -> Result<Vec<ExternalExercise>> {
        self.get_json(&format!("/exercises/equipment/{equipment}"))
            .await
    }

    pub async fn search_exercises(&self, name: &str) -> Result<Vec<ExternalExercise>> {
        self.get_json(&format!("/exercises/name/{name}")).await
    }

    pub async fn get_target_muscles(&self) -> Result<Vec<String>> {
        self.get_json("/exercises/targetList").await
    }

    pub async fn get_equipment_list(&self) -> Result<Vec<String>> {
        self.get_json("/exercises/equipmentList").await
    }
}
