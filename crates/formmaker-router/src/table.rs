//! Named route table.

use std::collections::HashMap;

use formmaker::UrlGenerator;
use tracing::debug;

use crate::error::{Result, RouterError};
use crate::method::Method;
use crate::path::PathPattern;

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route {
    /// Route name for reverse URL lookup.
    pub name: String,
    /// HTTP method.
    pub method: Method,
    /// Path pattern.
    pub pattern: PathPattern,
}

/// Routes of an application, resolvable by name.
///
/// ```
/// use formmaker_router::{Method, RouteTable};
///
/// let routes = RouteTable::new("http://localhost")
///     .resource("users", "/users")
///     .unwrap();
/// assert_eq!(
///     routes.url_for("users.update", &["3".to_string()]).unwrap(),
///     "http://localhost/users/3"
/// );
/// assert_eq!(routes.recognize(Method::Get, "/users/3/edit").unwrap().name, "users.edit");
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Scheme and host prefixed to every generated URL.
    base_url: String,
    /// Registered routes in registration order.
    routes: Vec<Route>,
    /// Named routes for reverse URL lookup.
    named_routes: HashMap<String, usize>,
    /// Controller actions mapped to route names.
    actions: HashMap<String, String>,
    /// Path of the current request.
    current: String,
}

impl RouteTable {
    /// Creates an empty table for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            routes: Vec::new(),
            named_routes: HashMap::new(),
            actions: HashMap::new(),
            current: "/".to_string(),
        }
    }

    /// Adds a route.
    ///
    /// A later route with the same name replaces the earlier one for URL
    /// generation; both still take part in recognition.
    pub fn route(mut self, method: Method, name: &str, pattern: &str) -> Result<Self> {
        let pattern = PathPattern::new(pattern)?;
        self.named_routes.insert(name.to_string(), self.routes.len());
        self.routes.push(Route {
            name: name.to_string(),
            method,
            pattern,
        });
        Ok(self)
    }

    /// Adds a GET route.
    pub fn get(self, name: &str, pattern: &str) -> Result<Self> {
        self.route(Method::Get, name, pattern)
    }

    /// Adds a POST route.
    pub fn post(self, name: &str, pattern: &str) -> Result<Self> {
        self.route(Method::Post, name, pattern)
    }

    /// Adds a PUT route.
    pub fn put(self, name: &str, pattern: &str) -> Result<Self> {
        self.route(Method::Put, name, pattern)
    }

    /// Adds a PATCH route.
    pub fn patch(self, name: &str, pattern: &str) -> Result<Self> {
        self.route(Method::Patch, name, pattern)
    }

    /// Adds a DELETE route.
    pub fn delete(self, name: &str, pattern: &str) -> Result<Self> {
        self.route(Method::Delete, name, pattern)
    }

    /// Adds the seven resource routes of `prefix` under `path`.
    ///
    /// | name | method | path |
    /// |------|--------|------|
    /// | `{prefix}.index` | GET | `{path}` |
    /// | `{prefix}.create` | GET | `{path}/create` |
    /// | `{prefix}.store` | POST | `{path}` |
    /// | `{prefix}.show` | GET | `{path}/{id}` |
    /// | `{prefix}.edit` | GET | `{path}/{id}/edit` |
    /// | `{prefix}.update` | PUT | `{path}/{id}` |
    /// | `{prefix}.destroy` | DELETE | `{path}/{id}` |
    pub fn resource(self, prefix: &str, path: &str) -> Result<Self> {
        let path = path.trim_end_matches('/');
        let member = format!("{path}/{{id}}");

        self.get(&format!("{prefix}.index"), path)?
            .get(&format!("{prefix}.create"), &format!("{path}/create"))?
            .post(&format!("{prefix}.store"), path)?
            .get(&format!("{prefix}.show"), &member)?
            .get(&format!("{prefix}.edit"), &format!("{member}/edit"))?
            .put(&format!("{prefix}.update"), &member)?
            .delete(&format!("{prefix}.destroy"), &member)
    }

    /// Maps a controller action such as `UserController@store` to a route.
    #[must_use]
    pub fn controller_action(mut self, action: &str, route_name: &str) -> Self {
        self.actions
            .insert(action.to_string(), route_name.to_string());
        self
    }

    /// Sets the path of the current request.
    #[must_use]
    pub fn with_current(mut self, path: &str) -> Self {
        self.current = path.to_string();
        self
    }

    /// Returns the registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates the URL of a named route, filling parameters in order.
    pub fn url_for(&self, name: &str, params: &[String]) -> Result<String> {
        let route = self
            .named_routes
            .get(name)
            .and_then(|&i| self.routes.get(i))
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;

        let path = route
            .pattern
            .fill(params)
            .map_err(|parameter| RouterError::MissingParameter {
                route: name.to_string(),
                parameter: parameter.to_string(),
            })?;

        debug!(name, path, "resolved route");
        Ok(self.absolute(&path))
    }

    /// Finds the route answering `method` on `path`.
    pub fn recognize(&self, method: Method, path: &str) -> Result<&Route> {
        let mut path_matched = false;

        for route in &self.routes {
            if route.pattern.match_path(path).is_some() {
                if route.method == method {
                    return Ok(route);
                }
                path_matched = true;
            }
        }

        if path_matched {
            Err(RouterError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            })
        } else {
            Err(RouterError::NotFound {
                method: method.to_string(),
                path: path.to_string(),
            })
        }
    }

    fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl UrlGenerator for RouteTable {
    fn to(&self, path: &str, params: &[String]) -> String {
        let mut url = self.absolute(path);
        for param in params {
            url.push('/');
            url.push_str(param);
        }
        url
    }

    fn route(&self, name: &str, params: &[String]) -> formmaker::Result<String> {
        Ok(self.url_for(name, params)?)
    }

    fn action(&self, action: &str, params: &[String]) -> formmaker::Result<String> {
        let name = self
            .actions
            .get(action)
            .ok_or_else(|| RouterError::ActionNotFound(action.to_string()))?;
        Ok(self.url_for(name, params)?)
    }

    fn current(&self) -> String {
        self.absolute(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formmaker::FormError;

    fn users() -> RouteTable {
        RouteTable::new("http://localhost/")
            .resource("users", "/users")
            .unwrap()
            .controller_action("UserController@store", "users.store")
            .with_current("/users/create")
    }

    #[test]
    fn test_resource_routes() {
        let names: Vec<_> = users().routes().iter().map(|r| r.name.clone()).collect();
        assert_eq!(
            names,
            [
                "users.index",
                "users.create",
                "users.store",
                "users.show",
                "users.edit",
                "users.update",
                "users.destroy"
            ]
        );
    }

    #[test]
    fn test_url_for() {
        let routes = users();
        assert_eq!(routes.url_for("users.store", &[]).unwrap(), "http://localhost/users");
        assert_eq!(
            routes.url_for("users.edit", &["7".to_string()]).unwrap(),
            "http://localhost/users/7/edit"
        );
    }

    #[test]
    fn test_url_for_errors() {
        let routes = users();
        assert!(matches!(
            routes.url_for("posts.index", &[]),
            Err(RouterError::RouteNotFound(_))
        ));
        assert!(matches!(
            routes.url_for("users.update", &[]),
            Err(RouterError::MissingParameter { parameter, .. }) if parameter == "id"
        ));
    }

    #[test]
    fn test_recognize() {
        let routes = users();
        assert_eq!(routes.recognize(Method::Put, "/users/3").unwrap().name, "users.update");
        assert_eq!(routes.recognize(Method::Delete, "/users/3").unwrap().name, "users.destroy");
        assert!(matches!(
            routes.recognize(Method::Patch, "/users/3"),
            Err(RouterError::MethodNotAllowed { .. })
        ));
        assert!(matches!(
            routes.recognize(Method::Get, "/posts"),
            Err(RouterError::NotFound { .. })
        ));
    }

    #[test]
    fn test_url_generator() {
        let routes = users();
        assert_eq!(routes.to("search", &["q".to_string()]), "http://localhost/search/q");
        assert_eq!(routes.to("https://example.com/x", &[]), "https://example.com/x");
        assert_eq!(routes.current(), "http://localhost/users/create");
        assert_eq!(
            routes.action("UserController@store", &[]).unwrap(),
            "http://localhost/users"
        );
        assert!(matches!(
            routes.action("UserController@missing", &[]),
            Err(FormError::ActionNotFound(_))
        ));
        assert!(matches!(
            UrlGenerator::route(&routes, "users.update", &[]),
            Err(FormError::MissingRouteParameter { .. })
        ));
    }

    #[test]
    fn test_later_name_wins() {
        let routes = RouteTable::new("http://localhost")
            .get("home", "/")
            .unwrap()
            .get("home", "/start")
            .unwrap();
        assert_eq!(routes.url_for("home", &[]).unwrap(), "http://localhost/start");
        assert_eq!(routes.recognize(Method::Get, "/").unwrap().pattern.pattern(), "/");
    }
}
