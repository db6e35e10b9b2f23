use anyhow::Result;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::api::{exercises, health, smartwatch, users, weight_logs, workouts};
use crate::auth::{cors_layer, jwt_auth_middleware, AuthService};
use crate::config::AppConfig;
use crate::providers::ExerciseDbClient;
use crate::services::{
    ExerciseService, SmartwatchService, UserService, WeightLogService, WorkoutService,
};

/// Build the full application router. Everything under /api except the auth
/// endpoints and the exercise lookup passthroughs requires a bearer token.
pub fn create_routes(db: PgPool, config: &AppConfig) -> Result<Router> {
    let auth_service = AuthService::new(db.clone(), &config.jwt_secret);
    let user_service = UserService::new(db.clone());
    let workout_service = WorkoutService::new(db.clone());
    let weight_log_service = WeightLogService::new(db.clone());
    let exercise_service = ExerciseService::new(
        db.clone(),
        ExerciseDbClient::new(config.exercise_db_api_key.clone())?,
    );
    let smartwatch_service = SmartwatchService::new(db);

    let require_auth =
        middleware::from_fn_with_state(auth_service.clone(), jwt_auth_middleware);

    // Registration and login live beside the profile routes, as one user area.
    let user_routes = Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .with_state(auth_service)
        .merge(
            Router::new()
                .route(
                    "/profile",
                    get(users::get_profile).put(users::update_profile),
                )
                .route_layer(require_auth.clone())
                .with_state(user_service),
        );

    let workout_routes = Router::new()
        .route("/", post(workouts::create_workout).get(workouts::list_workouts))
        .route("/statistics", get(workouts::workout_statistics))
        .route("/generate", post(workouts::generate_workout))
        .route(
            "/:id",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        .route("/:id/complete", post(workouts::complete_workout))
        .route_layer(require_auth.clone())
        .with_state(workout_service);

    let weight_log_routes = Router::new()
        .route(
            "/",
            post(weight_logs::create_log).get(weight_logs::list_logs),
        )
        .route("/statistics", get(weight_logs::weight_statistics))
        .route(
            "/:id",
            get(weight_logs::get_log)
                .put(weight_logs::update_log)
                .delete(weight_logs::delete_log),
        )
        .route_layer(require_auth.clone())
        .with_state(weight_log_service);

    // Lookup passthroughs are public; the local catalogue requires auth.
    let exercise_routes = Router::new()
        .route("/", get(exercises::list_exercises))
        .route("/save", post(exercises::save_exercise))
        .route("/custom", post(exercises::create_custom_exercise))
        .route_layer(require_auth.clone())
        .route("/search", get(exercises::search_exercises))
        .route("/targets", get(exercises::target_muscles))
        .route("/equipment", get(exercises::equipment_list))
        .route("/:id", get(exercises::get_external_exercise))
        .with_state(exercise_service);

    let smartwatch_routes = Router::new()
        .route("/status", get(smartwatch::watch_status))
        .route("/connect", post(smartwatch::connect_watch))
        .route("/sync", post(smartwatch::sync_watch))
        .route("/disconnect", post(smartwatch::disconnect_watch))
        .route_layer(require_auth)
        .with_state(smartwatch_service);

    let api = Router::new()
        .nest("/users", user_routes)
        .nest("/workouts", workout_routes)
        .nest("/weight-logs", weight_log_routes)
        .nest("/exercises", exercise_routes)
        .nest("/smartwatch", smartwatch_routes);

    Ok(Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer()))
}
