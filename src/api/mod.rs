// HTTP layer: routing, handlers, and error responses

pub mod error;
pub mod exercises;
pub mod health;
pub mod routes;
pub mod smartwatch;
pub mod users;
pub mod weight_logs;
pub mod workouts;

pub use error::ApiError;
pub use routes::create_routes;
