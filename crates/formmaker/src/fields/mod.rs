//! Field definitions.

mod checkbox;
mod hidden;
mod select;
mod text;

pub use checkbox::{checkbox, checkbox_inline, radio, radio_inline};
pub use hidden::{custom_file, file, hidden, image};
pub use select::{relationship, select};
pub use text::{
    color, date, datetime_local, email, month, number, password, range, search, tel, text,
    textarea, time, url, week,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::error::FormError;

/// The rendering family a field type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single self-closing `<input>`.
    Standard,
    /// A composite control with its own builder.
    Special,
    /// Checkboxes and radios carrying their own inline labels.
    Choice,
}

/// Every supported field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    Hidden,
    Text,
    Number,
    Color,
    Email,
    Date,
    DatetimeLocal,
    Month,
    Range,
    Search,
    Tel,
    Time,
    Url,
    Week,
    Password,
    Image,
    File,
    Select,
    CustomFile,
    Textarea,
    Relationship,
    Checkbox,
    Radio,
    CheckboxInline,
    RadioInline,
}

impl FieldType {
    /// Every type, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Hidden,
        Self::Text,
        Self::Number,
        Self::Color,
        Self::Email,
        Self::Date,
        Self::DatetimeLocal,
        Self::Month,
        Self::Range,
        Self::Search,
        Self::Tel,
        Self::Time,
        Self::Url,
        Self::Week,
        Self::Password,
        Self::Image,
        Self::File,
        Self::Select,
        Self::CustomFile,
        Self::Textarea,
        Self::Relationship,
        Self::Checkbox,
        Self::Radio,
        Self::CheckboxInline,
        Self::RadioInline,
    ];

    /// Returns the configuration name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Text => "text",
            Self::Number => "number",
            Self::Color => "color",
            Self::Email => "email",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Range => "range",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Time => "time",
            Self::Url => "url",
            Self::Week => "week",
            Self::Password => "password",
            Self::Image => "image",
            Self::File => "file",
            Self::Select => "select",
            Self::CustomFile => "custom-file",
            Self::Textarea => "textarea",
            Self::Relationship => "relationship",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::CheckboxInline => "checkbox-inline",
            Self::RadioInline => "radio-inline",
        }
    }

    /// Returns the rendering family of the type.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Select | Self::CustomFile | Self::Textarea | Self::Relationship => {
                FieldKind::Special
            }
            Self::Checkbox | Self::Radio | Self::CheckboxInline | Self::RadioInline => {
                FieldKind::Choice
            }
            _ => FieldKind::Standard,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

impl TryFrom<String> for FieldType {
    type Error = FormError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.as_str().to_string()
    }
}

/// One entry of a select or choice group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Displayed text.
    pub label: String,
    /// Submitted value.
    pub value: String,
}

impl ChoiceOption {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Row keys used to turn relationship rows into options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    /// Key holding the option text.
    pub label: String,
    /// Key holding the option value.
    pub value: String,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            label: "name".to_string(),
            value: "id".to_string(),
        }
    }
}

/// Configuration of a single form field.
///
/// `type` is required; every other key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Label override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Control attributes, merged over `class` and `id` defaults.
    #[serde(default)]
    pub attributes: Attributes,
    /// Markup placed before the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Markup placed after the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Custom view replacing the default markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Legend of choice groups in horizontal forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    /// Options of selects and choice groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Text of a leading empty-value option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_label: Option<String>,
    /// Text of the custom file label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_file_label: Option<String>,
    /// Model whose rows feed a relationship picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Row keys of a relationship picker.
    #[serde(default)]
    pub model_options: ModelOptions,
}

impl FieldConfig {
    /// Creates a configuration of the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            label: None,
            attributes: Attributes::new(),
            before: None,
            after: None,
            view: None,
            legend: None,
            options: Vec::new(),
            null_label: None,
            custom_file_label: None,
            model: None,
            model_options: ModelOptions::default(),
        }
    }
}

/// A column paired with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column (and input) name.
    pub name: String,
    /// Field configuration.
    #[serde(flatten)]
    pub config: FieldConfig,
}

impl FieldDef {
    /// Creates a field of the given type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            config: FieldConfig::new(field_type),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Sets a control attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.attributes.set(key, value);
        self
    }

    /// Sets the markup placed before the control.
    #[must_use]
    pub fn before(mut self, markup: impl Into<String>) -> Self {
        self.config.before = Some(markup.into());
        self
    }

    /// Sets the markup placed after the control.
    #[must_use]
    pub fn after(mut self, markup: impl Into<String>) -> Self {
        self.config.after = Some(markup.into());
        self
    }

    /// Renders the field through a custom view.
    #[must_use]
    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.config.view = Some(view.into());
        self
    }

    /// Sets the legend used by choice groups in horizontal forms.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.config.legend = Some(legend.into());
        self
    }

    /// Adds an option.
    #[must_use]
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.options.push(ChoiceOption::new(label, value));
        self
    }

    /// Adds a leading empty-value option.
    #[must_use]
    pub fn null_label(mut self, label: impl Into<String>) -> Self {
        self.config.null_label = Some(label.into());
        self
    }
}
