//! Select field helpers.

use super::{FieldDef, FieldType};

/// Creates a select with `(label, value)` options.
pub fn select(name: &str, options: Vec<(&str, &str)>) -> FieldDef {
    options
        .into_iter()
        .fold(FieldDef::new(name, FieldType::Select), |field, (label, value)| {
            field.option(label, value)
        })
}

/// Creates a relationship picker fed by the rows of `model`.
pub fn relationship(name: &str, model: &str) -> FieldDef {
    let mut field = FieldDef::new(name, FieldType::Relationship);
    field.config.model = Some(model.to_string());
    field
}

impl FieldDef {
    /// Sets the row keys used for relationship option text and value.
    #[must_use]
    pub fn model_options(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.model_options.label = label.into();
        self.config.model_options.value = value.into();
        self
    }

    /// Allows selecting several options.
    #[must_use]
    pub fn multiple(self) -> Self {
        self.attr("multiple", "multiple")
    }
}
