// Data models and request/response types

pub mod exercise;
pub mod user;
pub mod validation;
pub mod weight_log;
pub mod workout;

pub use exercise::*;
pub use user::*;
pub use validation::*;
pub use weight_log::*;
pub use workout::*;
