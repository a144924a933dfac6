//! Field rendering: label, control, decorations, errors and layout.

use serde_json::Value;
use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::context::{FormContext, ViewData};
use crate::error::{FormError, Result};
use crate::fields::{ChoiceOption, FieldConfig, FieldDef, FieldKind, FieldType};
use crate::naming::{strip_array_handles, ucfirst, ucwords};
use crate::object::{display_value, lookup, BoundObject};
use crate::widgets::{CheckInput, CustomFile, Input, Select, Textarea, Widget};

/// Renders form fields against a [`FormContext`].
///
/// ```
/// use formmaker::{FieldConfig, FieldMaker, FieldType, FormContext, MemorySession};
/// # use formmaker::UrlGenerator;
/// # struct NoUrls;
/// # impl UrlGenerator for NoUrls {
/// #     fn to(&self, path: &str, _: &[String]) -> String { path.to_string() }
/// #     fn route(&self, name: &str, _: &[String]) -> formmaker::Result<String> { Ok(name.to_string()) }
/// #     fn action(&self, name: &str, _: &[String]) -> formmaker::Result<String> { Ok(name.to_string()) }
/// #     fn current(&self) -> String { "/".to_string() }
/// # }
///
/// let ctx = FormContext::new(NoUrls, MemorySession::new());
/// let html = FieldMaker::new(&ctx)
///     .make("name", &FieldConfig::new(FieldType::Text), None)
///     .unwrap();
/// assert_eq!(
///     html,
///     r#"<div class="form-group"><label class="control-label" for="Name">Name</label><input class="form-control" id="Name" name="name" type="text" value=""></div>"#
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldMaker<'a> {
    ctx: &'a FormContext,
}

impl<'a> FieldMaker<'a> {
    /// Creates a field maker for the given context.
    pub fn new(ctx: &'a FormContext) -> Self {
        Self { ctx }
    }

    /// Renders every field in order and concatenates the markup.
    pub fn make_all(&self, fields: &[FieldDef], object: Option<&dyn BoundObject>) -> Result<String> {
        fields.iter().try_fold(String::new(), |mut html, field| {
            html.push_str(&self.make(&field.name, &field.config, object)?);
            Ok(html)
        })
    }

    /// Renders a single field.
    pub fn make(
        &self,
        column: &str,
        config: &FieldConfig,
        object: Option<&dyn BoundObject>,
    ) -> Result<String> {
        let settings = &self.ctx.config;
        let horizontal = self.ctx.orientation.is_horizontal();
        let kind = config.field_type.kind();

        debug!(column, field_type = %config.field_type, "rendering field");

        let mut group_class = settings.group_class.clone();
        if horizontal {
            group_class.push_str(" row");
        }

        let value = self.value(column, object);
        let messages = self.messages(column);
        let with_errors = !messages.is_empty();
        let errors = self.error_block(&messages);

        let mut label = self.label(column, config, None, with_errors);
        let options = parse_options(column, config);
        let field = self
            .widget(column, &options)
            .render(column, &value, &options.attributes);

        if let Some(view) = &config.view {
            let views = self
                .ctx
                .views
                .as_ref()
                .ok_or_else(|| FormError::MissingViewRenderer(view.clone()))?;
            debug!(column, view, "delegating field to view");
            return views.render(
                view,
                &ViewData {
                    label,
                    field,
                    errors,
                    options,
                },
            );
        }

        if kind == FieldKind::Choice {
            label = String::new();
        }

        let mut field_string = format!("{}{field}{}", self.before(config), self.after(config));

        if horizontal {
            label = self.label(column, config, Some(&settings.label_column), with_errors);

            if kind == FieldKind::Choice {
                let legend = config
                    .legend
                    .clone()
                    .or_else(|| config.label.clone())
                    .unwrap_or_else(|| ucfirst(column));
                label = format!(
                    r#"<legend class="{} pt-0">{legend}</legend>"#,
                    settings.label_column
                );
            }

            field_string = format!(r#"<div class="{}">{field_string}</div>"#, settings.input_column);
        }

        Ok(wrap_field(&group_class, &label, &field_string, &errors))
    }

    /// Renders the label of a field.
    ///
    /// `class` replaces the configured label class; the error class is
    /// appended when `with_errors` is set.
    pub fn label(
        &self,
        column: &str,
        config: &FieldConfig,
        class: Option<&str>,
        with_errors: bool,
    ) -> String {
        let settings = &self.ctx.config;
        let text = config.label.clone().unwrap_or_else(|| ucfirst(column));

        let mut class = class.unwrap_or(&settings.label_class).to_string();
        if with_errors {
            class.push(' ');
            class.push_str(&settings.error_class);
        }

        let id = config
            .attributes
            .get("id")
            .map_or_else(|| strip_array_handles(column), str::to_string);

        format!(r#"<label class="{class}" for="{id}">{text}</label>"#)
    }

    /// Resolves the current value: old input, then the bound object.
    fn value(&self, column: &str, object: Option<&dyn BoundObject>) -> Value {
        let session = &self.ctx.session;
        if session.is_started() {
            if let Some(old) = session.old_input(column) {
                return old;
            }
        }

        object.map_or(Value::Null, |object| lookup(object, column))
    }

    fn messages(&self, column: &str) -> Vec<String> {
        if self.ctx.session.is_started() {
            self.ctx.session.errors(column)
        } else {
            Vec::new()
        }
    }

    fn error_block(&self, messages: &[String]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        format!(
            r#"<div><p class="{}">{}</p></div>"#,
            self.ctx.config.error_message_class,
            messages.join(" ")
        )
    }

    fn before(&self, config: &FieldConfig) -> String {
        if config.before.is_none() && config.after.is_none() {
            return String::new();
        }

        format!(
            r#"<div class="{}">{}"#,
            self.ctx.config.before_after_input_wrapper,
            config.before.as_deref().unwrap_or_default()
        )
    }

    fn after(&self, config: &FieldConfig) -> String {
        if config.before.is_none() && config.after.is_none() {
            return String::new();
        }

        format!("{}</div>", config.after.as_deref().unwrap_or_default())
    }

    fn widget(&self, column: &str, options: &FieldConfig) -> Box<dyn Widget> {
        let text = || options.label.clone().unwrap_or_else(|| ucfirst(column));

        match options.field_type {
            t @ (FieldType::Hidden
            | FieldType::Text
            | FieldType::Number
            | FieldType::Color
            | FieldType::Email
            | FieldType::Date
            | FieldType::DatetimeLocal
            | FieldType::Month
            | FieldType::Range
            | FieldType::Search
            | FieldType::Tel
            | FieldType::Time
            | FieldType::Url
            | FieldType::Week
            | FieldType::Password
            | FieldType::Image
            | FieldType::File) => Box::new(Input::new(t.as_str())),
            FieldType::Select => Box::new(
                Select::new(options.options.clone()).null_label(options.null_label.clone()),
            ),
            FieldType::Textarea => Box::new(Textarea),
            FieldType::CustomFile => Box::new(custom_file(options)),
            FieldType::Relationship => Box::new(self.relationship(options)),
            FieldType::Checkbox => Box::new(CheckInput::checkbox(text()).options(options.options.clone())),
            FieldType::CheckboxInline => Box::new(
                CheckInput::checkbox(text())
                    .inline(true)
                    .options(options.options.clone()),
            ),
            FieldType::Radio => Box::new(CheckInput::radio(text()).options(options.options.clone())),
            FieldType::RadioInline => Box::new(
                CheckInput::radio(text())
                    .inline(true)
                    .options(options.options.clone()),
            ),
        }
    }

    fn relationship(&self, options: &FieldConfig) -> Select {
        let keys = &options.model_options;

        let rows = match (&self.ctx.relations, &options.model) {
            (Some(loader), Some(model)) => loader.load(model),
            (None, Some(model)) => {
                warn!(model, "no relation loader configured, rendering empty relationship");
                Vec::new()
            }
            (_, None) => {
                warn!("relationship field has no model, rendering empty relationship");
                Vec::new()
            }
        };

        let choices = rows
            .iter()
            .filter_map(|row| {
                let value = row.get(keys.value.as_str())?;
                let label = row.get(keys.label.as_str()).unwrap_or(&Value::Null);
                Some(ChoiceOption::new(display_value(label), display_value(value)))
            })
            .collect();

        Select::new(choices)
            .null_label(options.null_label.clone())
            .value_key(keys.value.clone())
    }
}

/// Returns `config` with its attributes merged over the `class` and `id`
/// defaults.
fn parse_options(column: &str, config: &FieldConfig) -> FieldConfig {
    let defaults = Attributes::new()
        .with("class", "form-control")
        .with("id", ucwords(column));

    FieldConfig {
        attributes: defaults.merged(&config.attributes),
        ..config.clone()
    }
}

fn wrap_field(group_class: &str, label: &str, field: &str, errors: &str) -> String {
    format!(r#"<div class="{group_class}">{label}{field}</div>{errors}"#)
}

/// File input labelled with `custom_file_label`, or the widget default.
fn custom_file(options: &FieldConfig) -> CustomFile {
    options
        .custom_file_label
        .clone()
        .map_or_else(CustomFile::default, |label| CustomFile { label })
}
