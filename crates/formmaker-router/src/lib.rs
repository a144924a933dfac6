//! # formmaker-router
//!
//! A named route table for resolving form targets.
//!
//! This crate provides:
//! - Path pattern matching with parameters
//! - Named routes filled with positional parameters
//! - Resource route registration
//! - Controller action aliases
//! - A [`formmaker::UrlGenerator`] implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use formmaker::{Form, FormContext, FormOptions, MemorySession, Target};
//! use formmaker_router::RouteTable;
//!
//! let routes = RouteTable::new("https://example.com")
//!     .resource("posts", "/posts")
//!     .unwrap();
//!
//! let ctx = FormContext::new(routes, MemorySession::new().with_token("abc"));
//! let html = Form::new(&ctx)
//!     .open(&FormOptions::new().method("patch").route(Target::new("posts.update").param("9")))
//!     .unwrap();
//!
//! assert!(html.contains(r#"action="https://example.com/posts/9""#));
//! assert!(html.contains(r#"value="PATCH""#));
//! ```

mod error;
mod method;
mod path;
mod table;

pub use error::{Result, RouterError};
pub use method::Method;
pub use path::{PathPattern, PathSegment};
pub use table::{Route, RouteTable};
