//! Path pattern matching.

use regex::Regex;
use std::collections::HashMap;

use crate::error::{Result, RouterError};

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A parameter segment (e.g., {id}).
    Param(String),
}

/// A compiled path pattern for matching URLs.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original pattern string.
    pattern: String,
    /// Parsed segments.
    segments: Vec<PathSegment>,
    /// Compiled regex for matching.
    regex: Regex,
    /// Parameter names in order.
    param_names: Vec<String>,
}

impl PathPattern {
    /// Parses a path pattern string.
    ///
    /// Pattern syntax:
    /// - `/users` - Literal path
    /// - `/users/{id}` - Path with parameter
    ///
    /// # Example
    ///
    /// ```
    /// use formmaker_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/posts/{id}/comments/{comment_id}").unwrap();
    /// let params = pattern.match_path("/posts/123/comments/456").unwrap();
    /// assert_eq!(params.get("id").map(String::as_str), Some("123"));
    /// assert_eq!(params.get("comment_id").map(String::as_str), Some("456"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut param_names = Vec::new();
        let mut regex_str = String::from("^");

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            regex_str.push('/');

            if let Some(param) = part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if param.is_empty() || param.contains(['{', '}']) {
                    return Err(RouterError::InvalidPattern(pattern.to_string()));
                }
                segments.push(PathSegment::Param(param.to_string()));
                param_names.push(param.to_string());
                regex_str.push_str("([^/]+)");
            } else {
                segments.push(PathSegment::Literal(part.to_string()));
                regex_str.push_str(&regex::escape(part));
            }
        }

        regex_str.push_str("/?$");

        let regex = Regex::new(&regex_str)
            .map_err(|e| RouterError::InvalidPattern(format!("{pattern}: {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            regex,
            param_names,
        })
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns extracted parameters if the path matches.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(path)?;

        Some(
            self.param_names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| {
                    caps.get(i + 1)
                        .map(|value| (name.clone(), value.as_str().to_string()))
                })
                .collect(),
        )
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parameter names.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Generates a path from named parameters.
    pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
        self.build(|_, name| params.get(name).map(String::as_str))
    }

    /// Generates a path filling parameters in order.
    ///
    /// Surplus values are ignored. Returns the name of the first unfilled
    /// parameter on failure.
    ///
    /// ```
    /// use formmaker_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/users/{id}/edit").unwrap();
    /// assert_eq!(pattern.fill(&["3".to_string()]).unwrap(), "/users/3/edit");
    /// assert_eq!(pattern.fill(&[]).unwrap_err(), "id");
    /// ```
    pub fn fill<'a>(&'a self, params: &[String]) -> std::result::Result<String, &'a str> {
        self.build(|i, _| params.get(i).map(String::as_str))
            .ok_or_else(|| {
                self.param_names
                    .get(params.len())
                    .map_or("", String::as_str)
            })
    }

    fn build<'p>(&self, mut value: impl FnMut(usize, &str) -> Option<&'p str>) -> Option<String> {
        let mut path = String::new();
        let mut index = 0;

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Param(name) => {
                    path.push_str(value(index, name)?);
                    index += 1;
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path() {
        let pattern = PathPattern::new("/users").unwrap();
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/users/").is_some());
        assert!(pattern.match_path("/posts").is_none());
    }

    #[test]
    fn test_single_param() {
        let pattern = PathPattern::new("/users/{id}").unwrap();
        let params = pattern.match_path("/users/123").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("123"));
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let pattern = PathPattern::new("/files/v1.0").unwrap();
        assert!(pattern.match_path("/files/v1.0").is_some());
        assert!(pattern.match_path("/files/v1x0").is_none());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            PathPattern::new("/users/{}"),
            Err(RouterError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_reverse() {
        let pattern = PathPattern::new("/posts/{id}").unwrap();
        let params: HashMap<String, String> = [("id".to_string(), "123".to_string())]
            .into_iter()
            .collect();
        assert_eq!(pattern.reverse(&params), Some("/posts/123".to_string()));
    }

    #[test]
    fn test_reverse_missing_param() {
        let pattern = PathPattern::new("/posts/{id}").unwrap();
        assert!(pattern.reverse(&HashMap::new()).is_none());
    }

    #[test]
    fn test_fill_positional() {
        let pattern = PathPattern::new("/posts/{post}/comments/{comment}").unwrap();
        let params = vec!["4".to_string(), "9".to_string(), "extra".to_string()];
        assert_eq!(pattern.fill(&params).unwrap(), "/posts/4/comments/9");
        assert_eq!(pattern.fill(&params[..1]).unwrap_err(), "comment");
    }

    #[test]
    fn test_root() {
        let pattern = PathPattern::new("/").unwrap();
        assert_eq!(pattern.fill(&[]).unwrap(), "/");
        assert!(pattern.match_path("/").is_some());
    }
}
