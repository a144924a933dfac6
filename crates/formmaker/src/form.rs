//! Form open/close tags, method spoofing, CSRF tokens and button forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::attributes::Attributes;
use crate::context::FormContext;
use crate::error::Result;
use crate::object::display_value;
use crate::widgets::{submit, Input, Widget};

/// Option keys never copied onto the `<form>` tag.
const RESERVED: [&str; 5] = ["method", "url", "route", "action", "files"];

/// Verbs sent through the hidden `_method` field.
const SPOOFED_METHODS: [&str; 3] = ["DELETE", "PATCH", "PUT"];

/// A URL, route or controller action with positional parameters.
///
/// Deserializes from `"users.index"` or `["users.update", 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TargetRepr", into = "TargetRepr")]
pub struct Target {
    /// Path, route name or action name.
    pub name: String,
    /// Positional parameters.
    pub params: Vec<String>,
}

impl Target {
    /// Creates a target without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    #[must_use]
    pub fn param(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Name(String),
    WithParams(Vec<Value>),
}

impl From<TargetRepr> for Target {
    fn from(repr: TargetRepr) -> Self {
        match repr {
            TargetRepr::Name(name) => Self::new(name),
            TargetRepr::WithParams(items) => {
                let mut items = items.iter().map(display_value);
                Self {
                    name: items.next().unwrap_or_default(),
                    params: items.collect(),
                }
            }
        }
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        if target.params.is_empty() {
            return Self::Name(target.name);
        }
        Self::WithParams(
            std::iter::once(target.name)
                .chain(target.params)
                .map(Value::String)
                .collect(),
        )
    }
}

/// Options of an opening `<form>` tag.
///
/// `url`, `route` and `action` are consulted in that order; without any
/// of them the form posts to the current URL. Unknown keys become tag
/// attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// HTTP verb, case-insensitive; `post` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Literal path target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Target>,
    /// Named route target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Target>,
    /// Controller action target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Target>,
    /// Whether the form uploads files.
    pub files: bool,
    /// Extra tag attributes.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl FormOptions {
    /// Creates empty options (POST to the current URL).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP verb.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Targets a literal path.
    #[must_use]
    pub fn url(mut self, target: impl Into<Target>) -> Self {
        self.url = Some(target.into());
        self
    }

    /// Targets a named route.
    #[must_use]
    pub fn route(mut self, target: impl Into<Target>) -> Self {
        self.route = Some(target.into());
        self
    }

    /// Targets a controller action.
    #[must_use]
    pub fn action(mut self, target: impl Into<Target>) -> Self {
        self.action = Some(target.into());
        self
    }

    /// Enables multipart file uploads.
    #[must_use]
    pub fn files(mut self) -> Self {
        self.files = true;
        self
    }

    /// Sets a tag attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }
}

/// A complete single-button form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonForm(String);

impl ButtonForm {
    /// Returns the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ButtonForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Emits form shells for a [`FormContext`].
#[derive(Debug, Clone)]
pub struct Form<'a> {
    ctx: &'a FormContext,
    confirm_message: Option<String>,
}

impl<'a> Form<'a> {
    /// Creates a form shell.
    pub fn new(ctx: &'a FormContext) -> Self {
        Self {
            ctx,
            confirm_message: None,
        }
    }

    /// Sets the confirmation prompt shown by button forms.
    #[must_use]
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm_message = Some(message.into());
        self
    }

    /// Opens a form.
    ///
    /// Verbs other than GET submit as POST; DELETE, PATCH and PUT add a
    /// hidden `_method` field and every verb but GET adds the CSRF token.
    pub fn open(&self, options: &FormOptions) -> Result<String> {
        let method = options
            .method
            .as_deref()
            .unwrap_or("post")
            .to_uppercase();
        let action = self.get_action(options)?;

        debug!(method, action, "opening form");

        let mut attributes = Attributes::new()
            .with("method", get_method(&method))
            .with("action", action)
            .with("accept-charset", "UTF-8")
            .merged(&options.attributes.except(&RESERVED));

        if options.files {
            attributes.set("enctype", "multipart/form-data");
        }

        Ok(format!(
            "<form{}>{}",
            attributes.to_html(),
            self.get_appendage(&method)
        ))
    }

    /// Closes a form.
    pub fn close(&self) -> String {
        "</form>".to_string()
    }

    /// Renders the hidden CSRF token field.
    pub fn token(&self) -> String {
        let token = self.ctx.session.token().unwrap_or_default();
        Input::hidden().render("_token", &Value::String(token), &Attributes::new())
    }

    /// Renders a form holding a single submit button.
    ///
    /// The button carries `btn btn-primary` unless `extra` overrides the
    /// class, and a `confirm()` prompt when a confirmation message is set.
    pub fn action(
        &self,
        method: &str,
        route: impl Into<Target>,
        button: &str,
        extra: &Attributes,
    ) -> Result<ButtonForm> {
        let open = self.open(
            &FormOptions::new()
                .route(route)
                .method(method)
                .attr("class", "form d-inline"),
        )?;

        let mut attrs = Attributes::new().with("class", "btn btn-primary").merged(extra);
        if let Some(message) = self.confirm_message.as_deref().filter(|m| !m.is_empty()) {
            attrs.set("onclick", format!("return confirm('{message}')"));
        }

        Ok(ButtonForm(format!(
            "{open}{}{}",
            submit(button, &attrs),
            self.close()
        )))
    }

    fn get_action(&self, options: &FormOptions) -> Result<String> {
        let urls = &self.ctx.urls;

        if let Some(target) = &options.url {
            return Ok(urls.to(&target.name, &target.params));
        }

        if let Some(target) = &options.route {
            return urls.route(&target.name, &target.params);
        }

        if let Some(target) = &options.action {
            return urls.action(&target.name, &target.params);
        }

        Ok(urls.current())
    }

    fn get_appendage(&self, method: &str) -> String {
        let mut appendage = String::new();

        if SPOOFED_METHODS.contains(&method) {
            appendage.push_str(&Input::hidden().render(
                "_method",
                &Value::String(method.to_string()),
                &Attributes::new(),
            ));
        }

        if method != "GET" {
            appendage.push_str(&self.token());
        }

        appendage
    }
}

/// The verb an HTML form can actually submit.
fn get_method(method: &str) -> &'static str {
    if method == "GET" {
        "GET"
    } else {
        "POST"
    }
}
