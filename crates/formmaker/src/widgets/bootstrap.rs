//! Composite Bootstrap controls.

use serde_json::Value;

use super::Widget;
use crate::attributes::Attributes;
use crate::fields::ChoiceOption;
use crate::object::{display_value, is_truthy, value_matches};

/// Replaces the default `form-control` class with `class`.
fn with_control_class(attrs: &Attributes, class: &str) -> Attributes {
    let mut attrs = attrs.clone();
    if attrs.get("class") == Some("form-control") {
        attrs.set("class", class);
    }
    attrs
}

/// Multi-line text input.
#[derive(Debug, Clone, Default)]
pub struct Textarea;

impl Widget for Textarea {
    fn render(&self, name: &str, value: &Value, attrs: &Attributes) -> String {
        format!(
            r#"<textarea{} name="{name}">{}</textarea>"#,
            attrs.to_html(),
            display_value(value)
        )
    }
}

/// Dropdown select.
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Available choices.
    pub options: Vec<ChoiceOption>,
    /// Text of a leading empty-value option.
    pub null_label: Option<String>,
    /// Key compared when the value is a list of row objects.
    pub value_key: Option<String>,
}

impl Select {
    /// Creates a select with the given choices.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Adds a leading empty-value option.
    #[must_use]
    pub fn null_label(mut self, label: Option<String>) -> Self {
        self.null_label = label;
        self
    }

    /// Compares list items through `key` when they are objects.
    #[must_use]
    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = Some(key.into());
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: &Value, attrs: &Attributes) -> String {
        let name = if attrs.contains("multiple") && !name.ends_with("[]") {
            format!("{name}[]")
        } else {
            name.to_string()
        };

        let mut options = String::new();

        if let Some(label) = &self.null_label {
            options.push_str(&format!(r#"<option value="">{label}</option>"#));
        }

        for option in &self.options {
            let selected = value_matches(value, &option.value, self.value_key.as_deref());
            let selected_attr = if selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                option.value, option.label
            ));
        }

        format!(
            r#"<select{} name="{name}">{options}</select>"#,
            attrs.to_html()
        )
    }
}

/// File input with its own label.
#[derive(Debug, Clone)]
pub struct CustomFile {
    /// Label text.
    pub label: String,
}

impl Default for CustomFile {
    fn default() -> Self {
        Self {
            label: "Choose file".to_string(),
        }
    }
}

impl Widget for CustomFile {
    fn render(&self, name: &str, _value: &Value, attrs: &Attributes) -> String {
        let attrs = with_control_class(attrs, "custom-file-input");
        let id = attrs.get("id").unwrap_or(name);

        format!(
            r#"<div class="custom-file"><input{} name="{name}" type="file"><label class="custom-file-label" for="{id}">{}</label></div>"#,
            attrs.to_html(),
            self.label
        )
    }
}

/// Checkboxes and radios.
///
/// Without options a single control with value `1` is rendered; with
/// options one control per option, ids suffixed with the option index.
#[derive(Debug, Clone)]
pub struct CheckInput {
    /// `checkbox` or `radio`.
    pub input_type: &'static str,
    /// Whether controls sit on one line.
    pub inline: bool,
    /// Group options.
    pub options: Vec<ChoiceOption>,
    /// Label of a single control.
    pub label: String,
}

impl CheckInput {
    /// Creates a checkbox control.
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self {
            input_type: "checkbox",
            inline: false,
            options: Vec::new(),
            label: label.into(),
        }
    }

    /// Creates a radio control.
    pub fn radio(label: impl Into<String>) -> Self {
        Self {
            input_type: "radio",
            ..Self::checkbox(label)
        }
    }

    /// Places the controls on one line.
    #[must_use]
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Sets the group options.
    #[must_use]
    pub fn options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    fn wrapper_class(&self) -> &'static str {
        if self.inline {
            "form-check form-check-inline"
        } else {
            "form-check"
        }
    }

    fn control(&self, name: &str, value: &str, checked: bool, attrs: &Attributes, label: &str) -> String {
        let id = attrs.get("id").unwrap_or(name);
        let checked_attr = if checked { " checked" } else { "" };

        format!(
            r#"<div class="{}"><input{} name="{name}" type="{}" value="{value}"{checked_attr}><label class="form-check-label" for="{id}">{label}</label></div>"#,
            self.wrapper_class(),
            attrs.to_html(),
            self.input_type,
        )
    }
}

impl Widget for CheckInput {
    fn render(&self, name: &str, value: &Value, attrs: &Attributes) -> String {
        let attrs = with_control_class(attrs, "form-check-input");

        if self.options.is_empty() {
            return self.control(name, "1", is_truthy(value), &attrs, &self.label);
        }

        let name = if self.input_type == "checkbox" && !name.ends_with("[]") {
            format!("{name}[]")
        } else {
            name.to_string()
        };
        let base_id = attrs.get("id").unwrap_or_default().to_string();

        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut option_attrs = attrs.clone();
                option_attrs.set("id", format!("{base_id}_{i}"));
                self.control(
                    &name,
                    &option.value,
                    value_matches(value, &option.value, None),
                    &option_attrs,
                    &option.label,
                )
            })
            .collect()
    }
}
