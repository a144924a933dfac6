//! Widgets producing the markup of individual controls.

mod bootstrap;

pub use bootstrap::{CheckInput, CustomFile, Select, Textarea};

use serde_json::Value;

use crate::attributes::Attributes;
use crate::object::display_value;

/// A control that renders itself for a field name and value.
pub trait Widget {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The resolved current value
    /// * `attrs` - Control attributes, already merged over the defaults
    fn render(&self, name: &str, value: &Value, attrs: &Attributes) -> String;
}

/// A single self-closing `<input>`.
#[derive(Debug, Clone)]
pub struct Input {
    /// The HTML input type.
    pub input_type: String,
}

impl Input {
    /// Creates an input of the given type.
    pub fn new(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
        }
    }

    /// Creates a hidden input.
    pub fn hidden() -> Self {
        Self::new("hidden")
    }
}

impl Widget for Input {
    fn render(&self, name: &str, value: &Value, attrs: &Attributes) -> String {
        format!(
            r#"<input{} name="{name}" type="{}" value="{}">"#,
            attrs.to_html(),
            self.input_type,
            display_value(value)
        )
    }
}

/// Renders a submit button.
pub fn submit(label: &str, attrs: &Attributes) -> String {
    format!(r#"<button{} type="submit">{label}</button>"#, attrs.to_html())
}

/// Renders a link styled by `attrs`.
pub fn link(label: &str, href: &str, attrs: &Attributes) -> String {
    format!(r#"<a{} href="{href}">{label}</a>"#, attrs.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input() {
        let attrs = Attributes::new().with("class", "form-control").with("id", "Name");
        let html = Input::new("text").render("name", &Value::Null, &attrs);
        assert_eq!(
            html,
            r#"<input class="form-control" id="Name" name="name" type="text" value="">"#
        );
    }

    #[test]
    fn test_hidden_input() {
        let html = Input::hidden().render("_method", &json!("PUT"), &Attributes::new());
        assert_eq!(html, r#"<input name="_method" type="hidden" value="PUT">"#);
    }

    #[test]
    fn test_number_value() {
        let html = Input::new("number").render("age", &json!(42), &Attributes::new());
        assert!(html.contains(r#"value="42""#));
    }

    #[test]
    fn test_submit() {
        let attrs = Attributes::new().with("class", "btn btn-primary");
        assert_eq!(
            submit("Save", &attrs),
            r#"<button class="btn btn-primary" type="submit">Save</button>"#
        );
    }

    #[test]
    fn test_link() {
        let attrs = Attributes::new().with("class", "btn btn-secondary");
        assert_eq!(
            link("Cancel", "/users", &attrs),
            r#"<a class="btn btn-secondary" href="/users">Cancel</a>"#
        );
    }
}
