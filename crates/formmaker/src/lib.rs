//! # formmaker
//!
//! Declarative HTML form rendering with Bootstrap markup.
//!
//! This crate provides:
//! - A field renderer producing label, control, decorations and error
//!   blocks for each field type
//! - Vertical and horizontal layouts
//! - Form shells with method spoofing and CSRF token fields
//! - Single-button action forms with confirmation prompts
//! - Create, edit and delete forms derived from a model's field list
//!
//! Routing, sessions, custom views and relationship rows are supplied by
//! the caller through the capability traits in [`FormContext`].
//!
//! ## Quick Start
//!
//! ```rust
//! use formmaker::fields::{email, text};
//! use formmaker::{FieldMaker, Form, FormContext, FormOptions, MemorySession, UrlGenerator};
//!
//! struct Urls;
//!
//! impl UrlGenerator for Urls {
//!     fn to(&self, path: &str, _: &[String]) -> String {
//!         format!("https://example.com/{path}")
//!     }
//!     fn route(&self, name: &str, _: &[String]) -> formmaker::Result<String> {
//!         Err(formmaker::FormError::RouteNotFound(name.to_string()))
//!     }
//!     fn action(&self, name: &str, _: &[String]) -> formmaker::Result<String> {
//!         Err(formmaker::FormError::ActionNotFound(name.to_string()))
//!     }
//!     fn current(&self) -> String {
//!         "https://example.com".to_string()
//!     }
//! }
//!
//! let ctx = FormContext::new(Urls, MemorySession::new().with_token("secret"));
//! let form = Form::new(&ctx);
//!
//! let mut html = form.open(&FormOptions::new().url("signup")).unwrap();
//! html.push_str(
//!     &FieldMaker::new(&ctx)
//!         .make_all(&[text("name"), email("email").label("E-mail")], None)
//!         .unwrap(),
//! );
//! html.push_str(&form.close());
//!
//! assert!(html.contains(r#"<input name="_token" type="hidden" value="secret">"#));
//! assert!(html.contains(r#"<label class="control-label" for="Email">E-mail</label>"#));
//! ```
//!
//! ## Binding Objects and Old Input
//!
//! ```rust
//! use formmaker::{FieldConfig, FieldMaker, FieldType, FormContext, MemorySession};
//! # use formmaker::UrlGenerator;
//! # struct Urls;
//! # impl UrlGenerator for Urls {
//! #     fn to(&self, path: &str, _: &[String]) -> String { path.to_string() }
//! #     fn route(&self, name: &str, _: &[String]) -> formmaker::Result<String> { Ok(name.to_string()) }
//! #     fn action(&self, name: &str, _: &[String]) -> formmaker::Result<String> { Ok(name.to_string()) }
//! #     fn current(&self) -> String { "/".to_string() }
//! # }
//! use serde_json::json;
//!
//! let user = json!({"meta": {"user": {"phone": "555"}}});
//! let ctx = FormContext::new(Urls, MemorySession::new());
//! let html = FieldMaker::new(&ctx)
//!     .make("meta[user][phone]", &FieldConfig::new(FieldType::Tel), Some(&user))
//!     .unwrap();
//! assert!(html.contains(r#"value="555""#));
//! ```
//!
//! ## Field Types
//!
//! - Standard inputs: `hidden`, `text`, `number`, `color`, `email`, `date`,
//!   `datetime-local`, `month`, `range`, `search`, `tel`, `time`, `url`,
//!   `week`, `password`, `image`, `file`
//! - Special controls: `select`, `custom-file`, `textarea`, `relationship`
//! - Choice controls: `checkbox`, `radio`, `checkbox-inline`, `radio-inline`

mod attributes;
mod config;
mod context;
mod error;
pub mod fields;
mod form;
mod maker;
mod memory;
mod model_form;
mod naming;
mod object;
mod path;
mod views;
pub mod widgets;

pub use attributes::Attributes;
pub use config::{FormMakerConfig, Orientation};
pub use context::{
    FormContext, RelationLoader, Session, UrlGenerator, ViewData, ViewRenderer,
};
pub use error::{FormError, Result, ValidationErrors};
pub use fields::{ChoiceOption, FieldConfig, FieldDef, FieldKind, FieldType, ModelOptions};
pub use form::{ButtonForm, Form, FormOptions, Target};
pub use maker::FieldMaker;
pub use memory::{MemoryRelations, MemorySession};
pub use model_form::{Buttons, FormDefinition, ModelForm, DEFAULT_CONFIRM_MESSAGE};
pub use naming::{strip_array_handles, ucfirst, ucwords};
pub use object::{display_value, lookup, BoundObject};
pub use path::PropertyPath;
pub use views::JinjaViews;
