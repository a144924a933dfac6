//! Create, edit and delete forms derived from a model's field list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::Attributes;
use crate::config::Orientation;
use crate::context::FormContext;
use crate::error::{FormError, Result};
use crate::fields::FieldDef;
use crate::form::{ButtonForm, Form, FormOptions, Target};
use crate::maker::FieldMaker;
use crate::object::{display_value, lookup, BoundObject};
use crate::widgets::{link, submit};

/// Prompt shown before a delete form submits.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Button labels of a model form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buttons {
    /// Submit button of create and edit forms.
    pub save: String,
    /// Button of the delete form.
    pub delete: String,
    /// Cancel link, omitted when `None`.
    pub cancel: Option<String>,
}

impl Default for Buttons {
    fn default() -> Self {
        Self {
            save: "Save".to_string(),
            delete: "Delete".to_string(),
            cancel: None,
        }
    }
}

/// A form bound to a resource's routes.
///
/// Implementors name the route prefix and the fields; the create, edit
/// and delete forms are derived from them. Routes follow the resource
/// convention: `{prefix}.store`, `{prefix}.update` and `{prefix}.destroy`.
pub trait ModelForm {
    /// Route name prefix, e.g. `users`.
    fn route_prefix(&self) -> &str;

    /// Fields in render order.
    fn fields(&self) -> Vec<FieldDef>;

    /// Button labels.
    fn buttons(&self) -> Buttons {
        Buttons::default()
    }

    /// Target of the cancel link; `{prefix}.index` when `None`.
    fn button_links(&self) -> Option<Target> {
        None
    }

    /// Field holding the object's route key.
    fn primary_key(&self) -> &str {
        "id"
    }

    /// Class of the `<form>` tag.
    fn form_class(&self) -> Option<&str> {
        None
    }

    /// Whether the form uploads files.
    fn has_files(&self) -> bool {
        false
    }

    /// Layout override; the context's orientation when `None`.
    fn orientation(&self) -> Option<Orientation> {
        None
    }

    /// Prompt shown before deleting; no prompt when `None`.
    fn confirm_message(&self) -> Option<&str> {
        Some(DEFAULT_CONFIRM_MESSAGE)
    }

    /// Renders the form creating a new record.
    fn create(&self, ctx: &FormContext) -> Result<String> {
        let target = Target::new(format!("{}.store", self.route_prefix()));
        render_model_form(self, ctx, target, "post", None)
    }

    /// Renders the form editing `object`.
    fn edit(&self, ctx: &FormContext, object: &dyn BoundObject) -> Result<String> {
        let route = format!("{}.update", self.route_prefix());
        let key = route_key(self, &route, object)?;
        let target = Target::new(route).param(key);
        render_model_form(self, ctx, target, "put", Some(object))
    }

    /// Renders the button form deleting `object`.
    fn delete(&self, ctx: &FormContext, object: &dyn BoundObject) -> Result<String> {
        let route = format!("{}.destroy", self.route_prefix());
        let key = route_key(self, &route, object)?;
        let target = Target::new(route).param(key);

        let mut form = Form::new(ctx);
        if let Some(message) = self.confirm_message() {
            form = form.confirm(message);
        }

        form.action(
            "delete",
            target,
            &self.buttons().delete,
            &Attributes::new().with("class", "btn btn-danger"),
        )
        .map(ButtonForm::into_string)
    }
}

/// Reads the object's route key; a null or empty key cannot fill `{id}`.
fn route_key<F: ModelForm + ?Sized>(
    form: &F,
    route: &str,
    object: &dyn BoundObject,
) -> Result<String> {
    let key = display_value(&lookup(object, form.primary_key()));
    if key.is_empty() {
        return Err(FormError::MissingRouteParameter {
            route: route.to_string(),
            parameter: form.primary_key().to_string(),
        });
    }
    Ok(key)
}

fn render_model_form<F: ModelForm + ?Sized>(
    form: &F,
    ctx: &FormContext,
    target: Target,
    method: &str,
    object: Option<&dyn BoundObject>,
) -> Result<String> {
    debug!(route = %target.name, method, "rendering model form");

    let ctx = match form.orientation() {
        Some(orientation) => ctx.clone().with_orientation(orientation),
        None => ctx.clone(),
    };

    let mut options = FormOptions::new().method(method).route(target);
    if form.has_files() {
        options = options.files();
    }
    if let Some(class) = form.form_class() {
        options = options.attr("class", class);
    }

    let shell = Form::new(&ctx);
    let mut html = shell.open(&options)?;
    html.push_str(&FieldMaker::new(&ctx).make_all(&form.fields(), object)?);
    html.push_str(&footer(form, &ctx)?);
    html.push_str(&shell.close());
    Ok(html)
}

fn footer<F: ModelForm + ?Sized>(form: &F, ctx: &FormContext) -> Result<String> {
    let buttons = form.buttons();
    let mut html = format!(r#"<div class="{}">"#, ctx.config.group_class);

    if let Some(cancel) = &buttons.cancel {
        let target = form
            .button_links()
            .unwrap_or_else(|| Target::new(format!("{}.index", form.route_prefix())));
        let href = ctx.urls.route(&target.name, &target.params)?;
        html.push_str(&link(
            cancel,
            &href,
            &Attributes::new().with("class", "btn btn-secondary"),
        ));
    }

    html.push_str(&submit(
        &buttons.save,
        &Attributes::new().with("class", "btn btn-primary"),
    ));
    html.push_str("</div>");
    Ok(html)
}

fn default_primary_key() -> String {
    "id".to_string()
}

/// A model form described by data instead of code.
///
/// ```
/// use formmaker::{FieldType, FormDefinition};
///
/// let form = FormDefinition::from_json(r#"{
///     "route_prefix": "users",
///     "fields": [{"name": "email", "type": "email"}]
/// }"#).unwrap();
/// assert_eq!(form.fields[0].config.field_type, FieldType::Email);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Route name prefix.
    pub route_prefix: String,
    /// Fields in render order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Button labels.
    #[serde(default)]
    pub buttons: Buttons,
    /// Cancel link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_route: Option<Target>,
    /// Field holding the route key.
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Class of the `<form>` tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_class: Option<String>,
    /// Whether the form uploads files.
    #[serde(default)]
    pub files: bool,
    /// Layout override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Delete prompt; the default prompt when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_message: Option<String>,
}

impl FormDefinition {
    /// Creates a definition with no fields.
    pub fn new(route_prefix: impl Into<String>) -> Self {
        Self {
            route_prefix: route_prefix.into(),
            fields: Vec::new(),
            buttons: Buttons::default(),
            cancel_route: None,
            primary_key: default_primary_key(),
            form_class: None,
            files: false,
            orientation: None,
            confirm_message: None,
        }
    }

    /// Parses a JSON definition.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

impl ModelForm for FormDefinition {
    fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    fn fields(&self) -> Vec<FieldDef> {
        self.fields.clone()
    }

    fn buttons(&self) -> Buttons {
        self.buttons.clone()
    }

    fn button_links(&self) -> Option<Target> {
        self.cancel_route.clone()
    }

    fn primary_key(&self) -> &str {
        &self.primary_key
    }

    fn form_class(&self) -> Option<&str> {
        self.form_class.as_deref()
    }

    fn has_files(&self) -> bool {
        self.files
    }

    fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    fn confirm_message(&self) -> Option<&str> {
        Some(
            self.confirm_message
                .as_deref()
                .unwrap_or(DEFAULT_CONFIRM_MESSAGE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UrlGenerator;
    use crate::fields::{email, text};
    use crate::memory::MemorySession;
    use serde_json::json;

    struct ResourceUrls;

    impl UrlGenerator for ResourceUrls {
        fn to(&self, path: &str, _params: &[String]) -> String {
            format!("http://localhost/{path}")
        }

        fn route(&self, name: &str, params: &[String]) -> Result<String> {
            let id = params.first().cloned().unwrap_or_default();
            match name {
                "users.index" | "users.store" => Ok("http://localhost/users".to_string()),
                "users.update" | "users.destroy" => Ok(format!("http://localhost/users/{id}")),
                _ => Err(FormError::RouteNotFound(name.to_string())),
            }
        }

        fn action(&self, action: &str, _params: &[String]) -> Result<String> {
            Err(FormError::ActionNotFound(action.to_string()))
        }

        fn current(&self) -> String {
            "http://localhost".to_string()
        }
    }

    struct UserForm;

    impl ModelForm for UserForm {
        fn route_prefix(&self) -> &str {
            "users"
        }

        fn fields(&self) -> Vec<FieldDef> {
            vec![text("name"), email("email")]
        }

        fn buttons(&self) -> Buttons {
            Buttons {
                cancel: Some("Cancel".to_string()),
                ..Buttons::default()
            }
        }
    }

    fn ctx() -> FormContext {
        FormContext::new(ResourceUrls, MemorySession::new().with_token("t"))
    }

    #[test]
    fn test_create() {
        let html = UserForm.create(&ctx()).unwrap();
        assert!(html.starts_with(
            r#"<form method="POST" action="http://localhost/users" accept-charset="UTF-8"><input name="_token" type="hidden" value="t">"#
        ));
        assert!(html.contains(r#"name="name" type="text" value="""#));
        assert!(html.contains(r#"name="email" type="email" value="""#));
        assert!(html.ends_with(concat!(
            r#"<div class="form-group"><a class="btn btn-secondary" href="http://localhost/users">Cancel</a>"#,
            r#"<button class="btn btn-primary" type="submit">Save</button></div></form>"#
        )));
    }

    #[test]
    fn test_edit_binds_object() {
        let user = json!({"id": 3, "name": "Ada", "email": "ada@example.com"});
        let html = UserForm.edit(&ctx(), &user).unwrap();
        assert!(html.contains(r#"action="http://localhost/users/3""#));
        assert!(html.contains(r#"<input name="_method" type="hidden" value="PUT">"#));
        assert!(html.contains(r#"name="name" type="text" value="Ada""#));
        assert!(html.contains(r#"value="ada@example.com""#));
    }

    #[test]
    fn test_delete() {
        let user = json!({"id": 3});
        let html = UserForm.delete(&ctx(), &user).unwrap();
        assert!(html.contains(r#"action="http://localhost/users/3""#));
        assert!(html.contains(r#"<input name="_method" type="hidden" value="DELETE">"#));
        assert!(html.contains(&format!(
            r#"<button class="btn btn-danger" onclick="return confirm('{DEFAULT_CONFIRM_MESSAGE}')" type="submit">Delete</button>"#
        )));
    }

    #[test]
    fn test_definition_from_json() {
        let form = FormDefinition::from_json(
            r#"{
                "route_prefix": "users",
                "fields": [{"name": "name", "type": "text", "label": "Full name"}],
                "buttons": {"save": "Create"},
                "form_class": "user-form",
                "orientation": "horizontal"
            }"#,
        )
        .unwrap();
        assert_eq!(form.primary_key, "id");
        assert_eq!(form.buttons.delete, "Delete");

        let html = form.create(&ctx()).unwrap();
        assert!(html.contains(r#"accept-charset="UTF-8" class="user-form">"#));
        assert!(html.contains(r#"<label class="col-md-2 col-form-label" for="Name">Full name</label>"#));
        assert!(html.contains(">Create</button>"));
        assert!(!html.contains("btn-secondary"));
    }

    #[test]
    fn test_definition_custom_key_and_prompt() {
        let mut form = FormDefinition::new("users");
        form.primary_key = "uuid".to_string();
        form.confirm_message = Some("Really?".to_string());

        let html = form.delete(&ctx(), &json!({"uuid": "abc"})).unwrap();
        assert!(html.contains("http://localhost/users/abc"));
        assert!(html.contains("return confirm('Really?')"));
    }

    #[test]
    fn test_missing_primary_key_fails() {
        let user = json!({"name": "Ada"});

        let err = UserForm.edit(&ctx(), &user).unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingRouteParameter { ref route, ref parameter }
                if route == "users.update" && parameter == "id"
        ));

        let err = UserForm.delete(&ctx(), &json!({"id": null})).unwrap_err();
        assert!(matches!(
            err,
            FormError::MissingRouteParameter { ref route, .. } if route == "users.destroy"
        ));
    }

    #[test]
    fn test_unknown_prefix_fails() {
        let form = FormDefinition::new("posts").field(text("title"));
        assert!(matches!(
            form.create(&ctx()),
            Err(FormError::RouteNotFound(name)) if name == "posts.store"
        ));
    }
}
