//! Menu form schema and validation
//!
//! The raw [`MenuForm`] is whatever the client posted. [`MenuForm::validate`]
//! applies the schema in [`MENU_FORM_FIELDS`] and yields either a
//! [`CleanedMenuForm`] or every field error found.

use serde::Serialize;

/// One input of the menu form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Body field name, also the HTML `name` attribute
    pub name: &'static str,
    /// Human readable label shown next to the input
    pub label: &'static str,
    /// Maximum length in characters, after stripping
    pub max_length: usize,
}

pub const ITEM_NAME: FieldSpec = FieldSpec {
    name: "item_name",
    label: "Item name",
    max_length: 200,
};

pub const CATEGORY: FieldSpec = FieldSpec {
    name: "category",
    label: "Category",
    max_length: 300,
};

pub const DESCRIPTION: FieldSpec = FieldSpec {
    name: "description",
    label: "Description",
    max_length: 1000,
};

/// Fields in display order
pub const MENU_FORM_FIELDS: [FieldSpec; 3] = [ITEM_NAME, CATEGORY, DESCRIPTION];

/// Menu form as submitted, before cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Menu form after validation: all fields present, stripped, within limits
/// and free of null characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedMenuForm {
    pub item_name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field}: this field is required")]
    Required { field: &'static str },
    #[error("{field}: ensure this value has at most {max} characters (it has {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field}: null characters are not allowed")]
    NullCharacter { field: &'static str },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field }
            | FieldError::TooLong { field, .. }
            | FieldError::NullCharacter { field } => *field,
        }
    }
}

/// All field errors of a rejected submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid menu form: {}", describe(.0))]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    /// Names of the failing fields, in schema order
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FieldError::field).collect()
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl MenuForm {
    /// Set a field by its body name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "item_name" => self.item_name = Some(value),
            "category" => self.category = Some(value),
            "description" => self.description = Some(value),
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<CleanedMenuForm, FormErrors> {
        let item_name = clean_field(&ITEM_NAME, self.item_name.as_deref());
        let category = clean_field(&CATEGORY, self.category.as_deref());
        let description = clean_field(&DESCRIPTION, self.description.as_deref());

        match (item_name, category, description) {
            (Ok(item_name), Ok(category), Ok(description)) => Ok(CleanedMenuForm {
                item_name,
                category,
                description,
            }),
            (item_name, category, description) => Err(FormErrors(
                [item_name.err(), category.err(), description.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

fn clean_field(spec: &FieldSpec, raw: Option<&str>) -> Result<String, FieldError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(FieldError::Required { field: spec.name });
    }

    let length = value.chars().count();
    if length > spec.max_length {
        return Err(FieldError::TooLong {
            field: spec.name,
            max: spec.max_length,
            actual: length,
        });
    }

    if value.contains('\0') {
        return Err(FieldError::NullCharacter { field: spec.name });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> MenuForm {
        MenuForm {
            item_name: Some("Bruschetta".to_string()),
            category: Some("Starters".to_string()),
            description: Some("Grilled bread with garlic and tomatoes".to_string()),
        }
    }

    #[test]
    fn test_valid_form_is_cleaned() {
        let cleaned = valid_form().validate().unwrap();
        assert_eq!(cleaned.item_name, "Bruschetta");
        assert_eq!(cleaned.category, "Starters");
        assert_eq!(cleaned.description, "Grilled bread with garlic and tomatoes");
    }

    #[test]
    fn test_values_are_stripped() {
        let form = MenuForm {
            item_name: Some("  Lemon Dessert\n".to_string()),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().item_name, "Lemon Dessert");
    }

    #[test]
    fn test_missing_field_is_required() {
        let form = MenuForm {
            category: None,
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0, vec![FieldError::Required { field: "category" }]);
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let form = MenuForm {
            description: Some("   \t ".to_string()),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0[0].field(), "description");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = MenuForm::default().validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["item_name", "category", "description"]);
    }

    #[test]
    fn test_too_long_counts_characters() {
        // 200 multi-byte characters is still within the limit
        let form = MenuForm {
            item_name: Some("é".repeat(200)),
            ..valid_form()
        };
        assert!(form.validate().is_ok());

        let form = MenuForm {
            item_name: Some("é".repeat(201)),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().0,
            vec![FieldError::TooLong {
                field: "item_name",
                max: 200,
                actual: 201,
            }]
        );
    }

    #[test]
    fn test_null_character_is_rejected() {
        let form = MenuForm {
            category: Some("Star\0ters".to_string()),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().0,
            vec![FieldError::NullCharacter { field: "category" }]
        );
    }

    #[test]
    fn test_set_ignores_unknown_fields() {
        let mut form = MenuForm::default();
        form.set("item_name", "Pasta".to_string());
        form.set("price", "12".to_string());
        assert_eq!(form.item_name.as_deref(), Some("Pasta"));
        assert_eq!(form.category, None);
    }

    #[test]
    fn test_form_errors_display() {
        let errors = MenuForm::default().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "invalid menu form: item_name: this field is required; \
             category: this field is required; description: this field is required"
        );
    }
}
