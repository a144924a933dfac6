#![allow(dead_code)]

use formmaker::{FormContext, MemorySession};
use formmaker_router::RouteTable;

/// The routes a typical user admin registers.
pub fn user_routes() -> RouteTable {
    RouteTable::new("http://localhost")
        .post("users", "/users")
        .and_then(|t| t.get("users.index", "/users"))
        .and_then(|t| t.put("users.update", "/users/{id}"))
        .and_then(|t| t.delete("users.destroy", "/users/{id}"))
        .unwrap_or_else(|e| panic!("Failed to build routes: {e}"))
}

pub fn context(routes: RouteTable) -> FormContext {
    FormContext::new(routes, MemorySession::new().with_token("token"))
}
