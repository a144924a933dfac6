//! Scaffolding for new form types.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use formmaker::{Buttons, FormDefinition};

/// A form type to scaffold.
#[derive(Debug, Clone)]
pub struct FormStub {
    /// Type name, e.g. `UserForm`.
    pub name: String,
    /// Model the form edits.
    pub model: String,
    /// Route name prefix.
    pub prefix: String,
}

impl FormStub {
    /// Validates the names of a new stub.
    pub fn new(name: &str, model: &str, prefix: Option<&str>) -> Result<Self> {
        for (what, value) in [("form", name), ("model", model)] {
            let mut chars = value.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                bail!("{what} name must be a CamelCase identifier: {value:?}");
            }
        }

        let prefix = prefix.map_or_else(|| format!("{}s", snake_case(model)), str::to_string);

        Ok(Self {
            name: name.to_string(),
            model: model.to_string(),
            prefix,
        })
    }

    /// File the Rust stub is written to.
    pub fn file_name(&self) -> String {
        format!("{}.rs", snake_case(&self.name))
    }

    /// File the JSON definition is written to.
    pub fn json_file_name(&self) -> String {
        format!("{}.json", snake_case(&self.name))
    }

    /// Generates a Rust type implementing `ModelForm`.
    pub fn generate(&self) -> String {
        format!(
            r#"use formmaker::{{Buttons, FieldDef, ModelForm}};

/// Form for `{model}` records.
#[derive(Debug, Default)]
pub struct {name};

impl {name} {{
    /// The model this form edits.
    pub const MODEL: &'static str = "{model}";
}}

impl ModelForm for {name} {{
    /// Routes are resolved as `{prefix}.store`, `{prefix}.update` and
    /// `{prefix}.destroy`.
    fn route_prefix(&self) -> &str {{
        "{prefix}"
    }}

    /// Add `cancel` for a cancel link; its target comes from
    /// `button_links`.
    fn buttons(&self) -> Buttons {{
        Buttons {{
            save: "Save".to_string(),
            ..Buttons::default()
        }}
    }}

    fn fields(&self) -> Vec<FieldDef> {{
        vec![]
    }}
}}
"#,
            name = self.name,
            model = self.model,
            prefix = self.prefix,
        )
    }

    /// Generates an equivalent JSON definition for `formmaker render`.
    pub fn generate_json(&self) -> Result<String> {
        let mut definition = FormDefinition::new(&self.prefix);
        definition.buttons = Buttons {
            save: "Save".to_string(),
            ..Buttons::default()
        };
        Ok(serde_json::to_string_pretty(&definition)?)
    }

    /// Returns the file name and contents of the stub.
    pub fn render(&self, json: bool) -> Result<(String, String)> {
        if json {
            Ok((self.json_file_name(), self.generate_json()?))
        } else {
            Ok((self.file_name(), self.generate()))
        }
    }

    /// Writes the stub into `dir`, refusing to overwrite an existing file.
    pub fn write(&self, dir: &Path, json: bool) -> Result<PathBuf> {
        let (file_name, code) = self.render(json)?;
        let file_path = dir.join(file_name);

        if file_path.exists() {
            bail!("{} already exists", file_path.display());
        }

        fs::create_dir_all(dir)?;
        fs::write(&file_path, code)?;
        Ok(file_path)
    }
}

/// Converts `UserProfileForm` to `user_profile_form`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("UserForm"), "user_form");
        assert_eq!(snake_case("Post"), "post");
    }

    #[test]
    fn test_default_prefix() {
        let stub = FormStub::new("TeamForm", "Team", None).unwrap();
        assert_eq!(stub.prefix, "teams");
        assert_eq!(stub.file_name(), "team_form.rs");
    }

    #[test]
    fn test_invalid_names() {
        assert!(FormStub::new("userForm", "User", None).is_err());
        assert!(FormStub::new("UserForm", "App::User", None).is_err());
        assert!(FormStub::new("", "User", None).is_err());
    }

    #[test]
    fn test_generate() {
        let code = FormStub::new("UserForm", "User", Some("admin.users"))
            .unwrap()
            .generate();
        assert!(code.contains("pub struct UserForm;"));
        assert!(code.contains(r#"pub const MODEL: &'static str = "User";"#));
        assert!(code.contains(r#""admin.users""#));
        assert!(code.contains("impl ModelForm for UserForm {"));
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let forms = dir.path().join("forms");
        let stub = FormStub::new("UserForm", "User", None).unwrap();

        let path = stub.write(&forms, false).unwrap();
        assert_eq!(path, forms.join("user_form.rs"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("pub struct UserForm;"));

        assert!(stub.write(&forms, false).is_err());
        assert!(stub.write(&forms, true).unwrap().ends_with("user_form.json"));
    }

    #[test]
    fn test_generate_json_parses_back() {
        let json = FormStub::new("UserForm", "User", None)
            .unwrap()
            .generate_json()
            .unwrap();
        let definition = FormDefinition::from_json(&json).unwrap();
        assert_eq!(definition.route_prefix, "users");
        assert!(definition.fields.is_empty());
    }
}
