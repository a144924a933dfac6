//! Bracketed property paths such as `meta[user][phone]`.
//!
//! Field names double as lookup paths into bound objects and old input.
//! Parsing is lenient: stray or unbalanced brackets never fail, they only
//! split the name into fewer or more segments.

use serde_json::Value;

/// A parsed property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<String>,
    array: bool,
}

impl PropertyPath {
    /// Parses a field name into its path segments.
    ///
    /// ```
    /// use formmaker::PropertyPath;
    ///
    /// let path = PropertyPath::parse("meta[user][phone]");
    /// assert_eq!(path.segments(), ["meta", "user", "phone"]);
    ///
    /// let tags = PropertyPath::parse("tags[]");
    /// assert_eq!(tags.segments(), ["tags"]);
    /// assert!(tags.is_array());
    /// ```
    pub fn parse(name: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();

        for c in name.chars() {
            match c {
                '[' | ']' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(c),
            }
        }

        if !current.is_empty() {
            segments.push(current);
        }

        Self {
            segments,
            array: name.ends_with("[]"),
        }
    }

    /// Returns the path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns whether the name ends with an array handle (`[]`).
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Returns whether the path has more than one segment.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Returns the path without its first segment.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            segments: self.segments.iter().skip(1).cloned().collect(),
            array: self.array,
        }
    }

    /// Walks the path through `root`.
    ///
    /// Objects are indexed by key and arrays by numeric index. Returns
    /// `None` as soon as a step is missing or null.
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        let mut current = root;

        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };

            if current.is_null() {
                return None;
            }
        }

        Some(current)
    }
}
