//! Display names derived from column names.

/// Uppercases the first character.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces underscores with spaces and uppercases the first character of
/// every word.
pub fn ucwords(s: &str) -> String {
    s.replace('_', " ")
        .split(' ')
        .map(ucfirst)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label `for` target of a column: capitalized, array handles removed.
pub fn strip_array_handles(column: &str) -> String {
    ucfirst(column).replace("[]", "")
}
