use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.+-]+@([\w-]+\.)+[\w-]+$").unwrap())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email_pattern().is_match(email) {
        return Err(ValidationError::new("email", "Please enter a valid email"));
    }
    Ok(())
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if age < 13 {
        return Err(ValidationError::new(
            "age",
            "User must be at least 13 years old",
        ));
    }
    if age > 120 {
        return Err(ValidationError::new("age", "Please enter a valid age"));
    }
    Ok(())
}

pub fn validate_notes(notes: &str) -> Result<(), ValidationError> {
    if notes.len() > 500 {
        return Err(ValidationError::new(
            "notes",
            "Notes cannot exceed 500 characters",
        ));
    }
    Ok(())
}

pub fn validate_weight_value(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(
            "weight_value",
            "Weight value must be a positive number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.co").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(13).is_ok());
        assert!(validate_age(120).is_ok());
        assert!(validate_age(12).is_err());
        assert!(validate_age(121).is_err());
    }

    #[test]
    fn test_notes_length() {
        assert!(validate_notes(&"x".repeat(500)).is_ok());
        assert!(validate_notes(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_weight_value() {
        assert!(validate_weight_value(72.5).is_ok());
        assert!(validate_weight_value(0.0).is_err());
        assert!(validate_weight_value(-3.0).is_err());
        assert!(validate_weight_value(f64::NAN).is_err());
    }
}
