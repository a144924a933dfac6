//! Template-backed view overrides.

use minijinja::{AutoEscape, Environment};

use crate::context::{ViewData, ViewRenderer};
use crate::error::{FormError, Result};

/// A [`ViewRenderer`] backed by minijinja templates.
///
/// Templates receive `label`, `field`, `errors` and `options`. Output is
/// not escaped since the first three are already markup.
pub struct JinjaViews {
    env: Environment<'static>,
}

impl Default for JinjaViews {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JinjaViews {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaViews").finish_non_exhaustive()
    }
}

impl JinjaViews {
    /// Creates an empty template set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Registers a template under `name`.
    pub fn add_template(&mut self, name: impl Into<String>, source: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .map_err(|e| FormError::View(format!("{name}: {e}")))
    }

    /// Registers a template, builder style.
    pub fn template(mut self, name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        self.add_template(name, source)?;
        Ok(self)
    }
}

impl ViewRenderer for JinjaViews {
    fn render(&self, view: &str, data: &ViewData) -> Result<String> {
        let template = self
            .env
            .get_template(view)
            .map_err(|e| FormError::View(format!("{view}: {e}")))?;
        template
            .render(data)
            .map_err(|e| FormError::View(format!("{view}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldConfig, FieldType};

    fn data() -> ViewData {
        let mut options = FieldConfig::new(FieldType::Text);
        options.attributes.set("id", "Name");
        ViewData {
            label: r#"<label for="Name">Name</label>"#.to_string(),
            field: r#"<input name="name">"#.to_string(),
            errors: String::new(),
            options,
        }
    }

    #[test]
    fn test_render_without_escaping() {
        let views = JinjaViews::new()
            .template("inline", "<span>{{ label }}{{ field }}</span>")
            .unwrap();
        assert_eq!(
            views.render("inline", &data()).unwrap(),
            r#"<span><label for="Name">Name</label><input name="name"></span>"#
        );
    }

    #[test]
    fn test_options_are_exposed() {
        let views = JinjaViews::new()
            .template("typed", "{{ options.type }}#{{ options.attributes.id }}")
            .unwrap();
        assert_eq!(views.render("typed", &data()).unwrap(), "text#Name");
    }

    #[test]
    fn test_missing_template() {
        let err = JinjaViews::new().render("absent", &data()).unwrap_err();
        assert!(matches!(err, FormError::View(msg) if msg.starts_with("absent")));
    }

    #[test]
    fn test_syntax_error() {
        let mut views = JinjaViews::new();
        assert!(views.add_template("broken", "{{ label ").is_err());
    }
}
