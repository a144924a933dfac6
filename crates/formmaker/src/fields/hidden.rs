//! Hidden and file field helpers.

use super::{FieldDef, FieldType};

/// Creates a hidden input.
pub fn hidden(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Hidden)
}

/// Creates a plain file input.
pub fn file(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::File)
}

/// Creates an image submit input.
pub fn image(name: &str, src: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Image).attr("src", src)
}

/// Creates a file input with custom label markup.
pub fn custom_file(name: &str, label: &str) -> FieldDef {
    let mut field = FieldDef::new(name, FieldType::CustomFile);
    field.config.custom_file_label = Some(label.to_string());
    field
}
