//! In-memory capability implementations.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::context::{RelationLoader, Session};
use crate::error::ValidationErrors;
use crate::object::lookup;

/// Session state held in memory for a single request.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    started: bool,
    token: Option<String>,
    old: Map<String, Value>,
    errors: ValidationErrors,
}

impl MemorySession {
    /// Creates a started session with no token, input or errors.
    pub fn new() -> Self {
        Self {
            started: true,
            ..Default::default()
        }
    }

    /// Creates a session that was never started.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Sets the CSRF token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Records previously submitted input for a field.
    #[must_use]
    pub fn with_old(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.old.insert(name.into(), value.into());
        self
    }

    /// Replaces the previously submitted input with a JSON object.
    #[must_use]
    pub fn with_old_input(mut self, input: Map<String, Value>) -> Self {
        self.old = input;
        self
    }

    /// Replaces the error bag.
    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Adds an error message for a field.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }
}

impl Session for MemorySession {
    fn is_started(&self) -> bool {
        self.started
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn old_input(&self, name: &str) -> Option<Value> {
        if !self.started {
            return None;
        }
        Some(lookup(&self.old, name)).filter(|v| !v.is_null())
    }

    fn errors(&self, name: &str) -> Vec<String> {
        if !self.started {
            return Vec::new();
        }
        self.errors.get(name).cloned().unwrap_or_default()
    }
}

/// Relationship rows keyed by model name.
#[derive(Debug, Clone, Default)]
pub struct MemoryRelations {
    rows: HashMap<String, Vec<Value>>,
}

impl MemoryRelations {
    /// Creates an empty row store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rows of a model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>, rows: Vec<Value>) -> Self {
        self.rows.insert(model.into(), rows);
        self
    }
}

impl RelationLoader for MemoryRelations {
    fn load(&self, model: &str) -> Vec<Value> {
        self.rows.get(model).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_started_session() {
        let session = MemorySession::new()
            .with_token("tester")
            .with_old("name", "Ada")
            .with_error("name", "Too short.");

        assert!(session.is_started());
        assert_eq!(session.token(), Some("tester".to_string()));
        assert_eq!(session.old_input("name"), Some(json!("Ada")));
        assert_eq!(session.old_input("email"), None);
        assert_eq!(session.errors("name"), vec!["Too short."]);
    }

    #[test]
    fn test_inactive_session_hides_state() {
        let session = MemorySession::inactive().with_old("name", "Ada").with_error("name", "x");
        assert!(!session.is_started());
        assert_eq!(session.old_input("name"), None);
        assert!(session.errors("name").is_empty());
    }

    #[test]
    fn test_nested_old_input() {
        let input = json!({"meta": {"user": {"phone": "555-0100"}}});
        let session = MemorySession::new().with_old_input(input.as_object().unwrap().clone());
        assert_eq!(session.old_input("meta[user][phone]"), Some(json!("555-0100")));
    }

    #[test]
    fn test_relations() {
        let relations = MemoryRelations::new().model("Role", vec![json!({"id": 1, "name": "Admin"})]);
        assert_eq!(relations.load("Role").len(), 1);
        assert!(relations.load("Team").is_empty());
    }
}
