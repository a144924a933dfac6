//! Error types for routing.

use formmaker::FormError;
use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matched the path.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },

    /// The path matched, but not for this method.
    #[error("method not allowed: {method} for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Invalid path pattern.
    #[error("invalid path pattern: {0}")]
    InvalidPattern(String),

    /// Route name not found.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// Controller action not registered.
    #[error("action not found: {0}")]
    ActionNotFound(String),

    /// Too few parameters to fill a route's pattern.
    #[error("missing parameter {parameter} for route {route}")]
    MissingParameter { route: String, parameter: String },

    /// Unsupported HTTP method.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

impl From<RouterError> for FormError {
    fn from(err: RouterError) -> Self {
        match err {
            RouterError::RouteNotFound(name) => Self::RouteNotFound(name),
            RouterError::ActionNotFound(action) => Self::ActionNotFound(action),
            RouterError::MissingParameter { route, parameter } => {
                Self::MissingRouteParameter { route, parameter }
            }
            other => Self::RouteNotFound(other.to_string()),
        }
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
