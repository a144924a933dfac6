//! Capabilities supplied by the host application.
//!
//! Rendering never reaches for globals: URL resolution, the session, view
//! templates and relationship rows are all handed in through a
//! [`FormContext`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::{FormMakerConfig, Orientation};
use crate::error::Result;
use crate::fields::FieldConfig;

/// Resolves form actions to URLs.
pub trait UrlGenerator: Send + Sync {
    /// Builds a URL for a literal path with extra path segments.
    fn to(&self, path: &str, params: &[String]) -> String;

    /// Builds a URL for a named route with positional parameters.
    fn route(&self, name: &str, params: &[String]) -> Result<String>;

    /// Builds a URL for a named controller action.
    fn action(&self, action: &str, params: &[String]) -> Result<String>;

    /// Returns the URL of the current request.
    fn current(&self) -> String;
}

/// Read access to the per-request session.
pub trait Session: Send + Sync {
    /// Returns whether a session is active for this request.
    fn is_started(&self) -> bool;

    /// Returns the CSRF token.
    fn token(&self) -> Option<String>;

    /// Returns previously submitted input for a field.
    fn old_input(&self, name: &str) -> Option<Value>;

    /// Returns validation messages for a field, in order.
    fn errors(&self, name: &str) -> Vec<String>;
}

/// Data handed to a custom field view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewData {
    /// Rendered label markup.
    pub label: String,
    /// Rendered control markup.
    pub field: String,
    /// Rendered error block, empty without errors.
    pub errors: String,
    /// Field configuration with default attributes merged in.
    pub options: FieldConfig,
}

/// Renders custom field views.
pub trait ViewRenderer: Send + Sync {
    /// Renders the view named `view`.
    fn render(&self, view: &str, data: &ViewData) -> Result<String>;
}

/// Loads rows for relationship pickers.
pub trait RelationLoader: Send + Sync {
    /// Returns every row of `model`.
    fn load(&self, model: &str) -> Vec<Value>;
}

/// Everything a renderer needs for one request.
#[derive(Clone)]
pub struct FormContext {
    /// URL resolution.
    pub urls: Arc<dyn UrlGenerator>,
    /// Current session.
    pub session: Arc<dyn Session>,
    /// Custom view renderer.
    pub views: Option<Arc<dyn ViewRenderer>>,
    /// Relationship row source.
    pub relations: Option<Arc<dyn RelationLoader>>,
    /// Class names.
    pub config: FormMakerConfig,
    /// Form layout.
    pub orientation: Orientation,
}

impl std::fmt::Debug for FormContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormContext")
            .field("config", &self.config)
            .field("orientation", &self.orientation)
            .field("has_views", &self.views.is_some())
            .field("has_relations", &self.relations.is_some())
            .finish_non_exhaustive()
    }
}

impl FormContext {
    /// Creates a context with default configuration.
    pub fn new(urls: impl UrlGenerator + 'static, session: impl Session + 'static) -> Self {
        Self {
            urls: Arc::new(urls),
            session: Arc::new(session),
            views: None,
            relations: None,
            config: FormMakerConfig::default(),
            orientation: Orientation::default(),
        }
    }

    /// Sets the view renderer.
    #[must_use]
    pub fn with_views(mut self, views: impl ViewRenderer + 'static) -> Self {
        self.views = Some(Arc::new(views));
        self
    }

    /// Sets the relationship loader.
    #[must_use]
    pub fn with_relations(mut self, relations: impl RelationLoader + 'static) -> Self {
        self.relations = Some(Arc::new(relations));
        self
    }

    /// Sets the class-name configuration.
    #[must_use]
    pub fn with_config(mut self, config: FormMakerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Switches to the horizontal layout.
    #[must_use]
    pub fn horizontal(self) -> Self {
        self.with_orientation(Orientation::Horizontal)
    }
}
