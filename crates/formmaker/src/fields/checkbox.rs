//! Checkbox and radio helpers.

use super::{FieldDef, FieldType};

/// Creates a single checkbox.
pub fn checkbox(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Checkbox)
}

/// Creates a single inline checkbox.
pub fn checkbox_inline(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::CheckboxInline)
}

/// Creates a radio group with `(label, value)` options.
pub fn radio(name: &str, options: Vec<(&str, &str)>) -> FieldDef {
    with_options(FieldDef::new(name, FieldType::Radio), options)
}

/// Creates an inline radio group with `(label, value)` options.
pub fn radio_inline(name: &str, options: Vec<(&str, &str)>) -> FieldDef {
    with_options(FieldDef::new(name, FieldType::RadioInline), options)
}

fn with_options(field: FieldDef, options: Vec<(&str, &str)>) -> FieldDef {
    options
        .into_iter()
        .fold(field, |field, (label, value)| field.option(label, value))
}
