// Business logic, one service per resource area

pub mod exercise_service;
pub mod plan_generator;
pub mod smartwatch_service;
pub mod statistics;
pub mod user_service;
pub mod weight_log_service;
pub mod workout_service;

pub use exercise_service::{ExerciseFilter, ExerciseService};
pub use smartwatch_service::{ConnectWatchRequest, SmartwatchService, SyncResult, WatchStatus};
pub use user_service::UserService;
pub use weight_log_service::{WeightLogQuery, WeightLogService};
pub use workout_service::{WorkoutFilter, WorkoutService};
