//! The `render` command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use formmaker::{
    FormContext, FormDefinition, FormMakerConfig, MemorySession, ModelForm, Orientation,
    ValidationErrors,
};
use formmaker_router::RouteTable;
use serde_json::{Map, Value};
use tracing::debug;

use crate::preview::render_page;

/// Which model form to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Form storing a new record.
    #[default]
    Create,
    /// Form updating an existing record.
    Edit,
    /// Button form deleting a record.
    Delete,
}

/// Inputs of a render run.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub definition: PathBuf,
    pub mode: Mode,
    pub object: Option<PathBuf>,
    pub base_url: String,
    pub resource_path: Option<String>,
    pub horizontal: bool,
    pub config: Option<PathBuf>,
    pub token: Option<String>,
    pub old: Option<PathBuf>,
    pub errors: Option<PathBuf>,
    pub page: bool,
}

/// Renders the form described by `args`.
pub fn run(args: &RenderArgs) -> Result<String> {
    let definition = FormDefinition::from_json(&read(&args.definition)?)
        .with_context(|| format!("invalid form definition {}", args.definition.display()))?;

    let resource_path = args
        .resource_path
        .clone()
        .unwrap_or_else(|| format!("/{}", definition.route_prefix.replace('.', "/")));
    debug!(prefix = %definition.route_prefix, resource_path, "registering resource routes");

    let routes = RouteTable::new(&args.base_url)
        .resource(&definition.route_prefix, &resource_path)?
        .with_current(&format!("{resource_path}/create"));

    let ctx = FormContext::new(routes, session(args)?)
        .with_config(config(args.config.as_deref())?)
        .with_orientation(if args.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        });

    let object = match &args.object {
        Some(path) => Some(
            serde_json::from_str::<Value>(&read(path)?)
                .with_context(|| format!("invalid object {}", path.display()))?,
        ),
        None => None,
    };

    let markup = match (args.mode, &object) {
        (Mode::Create, _) => definition.create(&ctx)?,
        (Mode::Edit, Some(object)) => definition.edit(&ctx, object)?,
        (Mode::Delete, Some(object)) => definition.delete(&ctx, object)?,
        (mode, None) => bail!("--object is required in {mode:?} mode"),
    };

    if args.page {
        let title = format!("{:?} {}", args.mode, definition.route_prefix);
        return Ok(render_page(&title, &markup));
    }

    Ok(markup)
}

fn session(args: &RenderArgs) -> Result<MemorySession> {
    let mut session = MemorySession::new();

    if let Some(token) = &args.token {
        session = session.with_token(token.clone());
    }

    if let Some(path) = &args.old {
        let old: Map<String, Value> = serde_json::from_str(&read(path)?)
            .with_context(|| format!("old input must be a JSON object: {}", path.display()))?;
        session = session.with_old_input(old);
    }

    if let Some(path) = &args.errors {
        let bag: Map<String, Value> = serde_json::from_str(&read(path)?)
            .with_context(|| format!("errors must be a JSON object: {}", path.display()))?;
        let mut errors = ValidationErrors::new();
        for (field, messages) in bag {
            match messages {
                Value::Array(items) => {
                    for item in &items {
                        errors.add(&field, formmaker::display_value(item));
                    }
                }
                other => errors.add(&field, formmaker::display_value(&other)),
            }
        }
        session = session.with_errors(errors);
    }

    Ok(session)
}

fn config(path: Option<&Path>) -> Result<FormMakerConfig> {
    match path {
        Some(path) => FormMakerConfig::from_json(&read(path)?)
            .with_context(|| format!("invalid configuration {}", path.display())),
        None => Ok(FormMakerConfig::default()),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn definition() -> NamedTempFile {
        file(
            r#"{
                "route_prefix": "users",
                "fields": [
                    {"name": "name", "type": "text"},
                    {"name": "email", "type": "email"}
                ]
            }"#,
        )
    }

    fn args(definition: &NamedTempFile) -> RenderArgs {
        RenderArgs {
            definition: definition.path().to_path_buf(),
            base_url: "http://localhost".to_string(),
            token: Some("t0k3n".to_string()),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn test_create() {
        let definition = definition();
        let html = run(&args(&definition)).unwrap();
        assert!(html.starts_with(r#"<form method="POST" action="http://localhost/users""#));
        assert!(html.contains(r#"value="t0k3n""#));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn test_edit_with_old_input_and_errors() {
        let definition = definition();
        let object = file(r#"{"id": 5, "name": "Ada", "email": "ada@example.com"}"#);
        let old = file(r#"{"email": "typo@"}"#);
        let errors = file(r#"{"email": ["The email must be valid."]}"#);

        let html = run(&RenderArgs {
            mode: Mode::Edit,
            object: Some(object.path().to_path_buf()),
            old: Some(old.path().to_path_buf()),
            errors: Some(errors.path().to_path_buf()),
            ..args(&definition)
        })
        .unwrap();

        assert!(html.contains(r#"action="http://localhost/users/5""#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"value="typo@""#));
        assert!(html.contains(r#"<p class="text-danger">The email must be valid.</p>"#));
    }

    #[test]
    fn test_delete_requires_object() {
        let definition = definition();
        let err = run(&RenderArgs {
            mode: Mode::Delete,
            ..args(&definition)
        })
        .unwrap_err();
        assert!(err.to_string().contains("--object"));
    }

    #[test]
    fn test_horizontal_page() {
        let definition = definition();
        let html = run(&RenderArgs {
            horizontal: true,
            page: true,
            ..args(&definition)
        })
        .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="col-md-10">"#));
    }

    #[test]
    fn test_unknown_field_type() {
        let definition = file(r#"{"route_prefix": "users", "fields": [{"name": "x", "type": "datetime"}]}"#);
        let err = run(&args(&definition)).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field type"));
    }
}
