//! Text-like field helpers.

use super::{FieldDef, FieldType};

/// Creates a text input.
pub fn text(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Text)
}

/// Creates a textarea.
pub fn textarea(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Textarea)
}

/// Creates an email input.
pub fn email(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Email)
}

/// Creates a password input.
pub fn password(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Password)
}

/// Creates a number input.
pub fn number(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Number)
}

/// Creates a range slider.
pub fn range(name: &str, min: i64, max: i64) -> FieldDef {
    FieldDef::new(name, FieldType::Range)
        .attr("min", min.to_string())
        .attr("max", max.to_string())
}

/// Creates a URL input.
pub fn url(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Url).attr("placeholder", "https://")
}

/// Creates a telephone input.
pub fn tel(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Tel)
}

/// Creates a search input.
pub fn search(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Search)
}

/// Creates a color picker.
pub fn color(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Color)
}

/// Creates a date input.
pub fn date(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Date)
}

/// Creates a local date and time input.
pub fn datetime_local(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::DatetimeLocal)
}

/// Creates a time input.
pub fn time(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Time)
}

/// Creates a month input.
pub fn month(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Month)
}

/// Creates a week input.
pub fn week(name: &str) -> FieldDef {
    FieldDef::new(name, FieldType::Week)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field() {
        let field = text("name");
        assert_eq!(field.name, "name");
        assert_eq!(field.config.field_type, FieldType::Text);
        assert!(field.config.label.is_none());
    }

    #[test]
    fn test_range_bounds() {
        let field = range("volume", 0, 11);
        assert_eq!(field.config.attributes.get("min"), Some("0"));
        assert_eq!(field.config.attributes.get("max"), Some("11"));
    }

    #[test]
    fn test_url_placeholder() {
        let field = url("homepage");
        assert_eq!(field.config.field_type, FieldType::Url);
        assert_eq!(field.config.attributes.get("placeholder"), Some("https://"));
    }
}
