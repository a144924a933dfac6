//! Error types for form rendering.

use std::collections::HashMap;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field was configured with a type outside the known kinds.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// A named route could not be resolved.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// A controller action could not be resolved.
    #[error("action not found: {0}")]
    ActionNotFound(String),

    /// A route needed more positional parameters than were given.
    #[error("missing parameter {parameter} for route {route}")]
    MissingRouteParameter { route: String, parameter: String },

    /// A view override was configured without a view renderer.
    #[error("no view renderer available for view: {0}")]
    MissingViewRenderer(String),

    /// The view renderer failed.
    #[error("failed to render view: {0}")]
    View(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error for a field.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.keys().collect();
        fields.sort();
        for field in fields {
            for message in &self.errors[field] {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_keep_message_order() {
        let errors = ValidationErrors::new()
            .with("email", "The email field is required.")
            .with("email", "The email must be valid.");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("email").unwrap(),
            &vec![
                "The email field is required.".to_string(),
                "The email must be valid.".to_string()
            ]
        );
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_display_is_sorted_by_field() {
        let errors = ValidationErrors::new()
            .with("name", "too short")
            .with("email", "invalid");
        assert_eq!(errors.to_string(), "email: invalid\nname: too short\n");
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: FormError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FormError::Config(_)));
    }
}
