// External collaborators: exercise lookup API and smartwatch vendors

pub mod exercise_db;
pub mod smartwatch;

pub use exercise_db::*;
pub use smartwatch::*;
