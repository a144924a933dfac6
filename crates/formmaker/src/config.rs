//! Class-name configuration shared by every rendered field.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Layout of a rendered form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Label stacked above the control.
    #[default]
    Vertical,
    /// Label and control side by side in grid columns.
    Horizontal,
}

impl Orientation {
    /// Returns whether this is the horizontal layout.
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

/// CSS class names used while rendering fields.
///
/// Every key is optional in a configuration document; missing keys keep
/// their default.
///
/// ```
/// use formmaker::FormMakerConfig;
///
/// let config = FormMakerConfig::from_json(r#"{"group_class": "mb-3"}"#).unwrap();
/// assert_eq!(config.group_class, "mb-3");
/// assert_eq!(config.label_class, "control-label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMakerConfig {
    /// Class of the `<div>` wrapping label and control.
    pub group_class: String,
    /// Class of field labels.
    pub label_class: String,
    /// Class appended to a label when its field has errors.
    pub error_class: String,
    /// Class of the error paragraph rendered after a field.
    pub error_message_class: String,
    /// Class of the wrapper added around `before`/`after` decorations.
    pub before_after_input_wrapper: String,
    /// Label column class in horizontal forms.
    pub label_column: String,
    /// Control column class in horizontal forms.
    pub input_column: String,
}

impl Default for FormMakerConfig {
    fn default() -> Self {
        Self {
            group_class: "form-group".to_string(),
            label_class: "control-label".to_string(),
            error_class: "has-error".to_string(),
            error_message_class: "text-danger".to_string(),
            before_after_input_wrapper: "input-group".to_string(),
            label_column: "col-md-2 col-form-label".to_string(),
            input_column: "col-md-10".to_string(),
        }
    }
}

impl FormMakerConfig {
    /// Creates a configuration with the default class names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Sets the field group class.
    #[must_use]
    pub fn group_class(mut self, class: impl Into<String>) -> Self {
        self.group_class = class.into();
        self
    }

    /// Sets the label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    /// Sets the label error class.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the horizontal label and input column classes.
    #[must_use]
    pub fn columns(mut self, label: impl Into<String>, input: impl Into<String>) -> Self {
        self.label_column = label.into();
        self.input_column = input.into();
        self
    }
}
