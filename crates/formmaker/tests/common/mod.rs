#![allow(dead_code)]

use formmaker::{
    FieldConfig, FieldMaker, FieldType, FormContext, FormError, MemorySession, Result,
    UrlGenerator,
};
use serde_json::Value;

/// Resolves the `users` resource routes under `http://localhost`.
pub struct LocalUrls;

impl UrlGenerator for LocalUrls {
    fn to(&self, path: &str, params: &[String]) -> String {
        let mut url = format!("http://localhost/{}", path.trim_matches('/'));
        for param in params {
            url.push('/');
            url.push_str(param);
        }
        url
    }

    fn route(&self, name: &str, params: &[String]) -> Result<String> {
        let id = || {
            params.first().cloned().ok_or_else(|| FormError::MissingRouteParameter {
                route: name.to_string(),
                parameter: "id".to_string(),
            })
        };

        match name {
            "users" | "users.index" | "users.store" => Ok(self.to("users", &[])),
            "users.update" | "users.destroy" => Ok(self.to("users", &[id()?])),
            _ => Err(FormError::RouteNotFound(name.to_string())),
        }
    }

    fn action(&self, action: &str, params: &[String]) -> Result<String> {
        match action {
            "UserController@store" => Ok(self.to("users", params)),
            _ => Err(FormError::ActionNotFound(action.to_string())),
        }
    }

    fn current(&self) -> String {
        self.to("users/create", &[])
    }
}

pub fn context() -> FormContext {
    FormContext::new(LocalUrls, MemorySession::new().with_token("csrf-token"))
}

pub fn context_with(session: MemorySession) -> FormContext {
    FormContext::new(LocalUrls, session)
}

pub fn render(ctx: &FormContext, column: &str, field_type: FieldType) -> String {
    FieldMaker::new(ctx)
        .make(column, &FieldConfig::new(field_type), None)
        .unwrap_or_else(|e| panic!("Failed to render {column}: {e}"))
}

pub fn render_bound(ctx: &FormContext, column: &str, field_type: FieldType, object: &Value) -> String {
    FieldMaker::new(ctx)
        .make(column, &FieldConfig::new(field_type), Some(object))
        .unwrap_or_else(|e| panic!("Failed to render {column}: {e}"))
}
