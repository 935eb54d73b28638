//! Schema type definitions
//!
//! Supported field kinds:
//! - string: UTF-8 string
//! - number: any JSON number
//! - boolean: true/false
//! - date: RFC 3339 timestamp or YYYY-MM-DD date, carried as a string
//! - list: homogeneous-or-not JSON array
//! - struct: nested JSON object

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Supported field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// UTF-8 string
    String,
    /// Any JSON number
    Number,
    /// Boolean
    Boolean,
    /// RFC 3339 timestamp or YYYY-MM-DD date, carried as a string cell
    Date,
    /// JSON array
    List,
    /// Nested JSON object
    Struct,
}

impl FieldKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::List => "list",
            FieldKind::Struct => "struct",
        }
    }
}

/// A single named, typed field of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name this field maps to
    pub name: String,
    /// Field data kind
    pub kind: FieldKind,
}

impl FieldDef {
    /// Create a field with an explicit kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a string field
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Create a number field
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Create a boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Create a date field
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Create a list field
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::List)
    }

    /// Create a struct field
    pub fn structured(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Struct)
    }
}

/// A declared table shape: name plus ordered field list.
///
/// Declaration order of `fields` defines the canonical column order used
/// when the table header is first created. Immutable after declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Declares a schema, checking declaration invariants.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` if:
    /// - `name` is empty
    /// - `fields` is empty
    /// - a field name repeats
    pub fn declare(name: impl Into<String>, fields: Vec<FieldDef>) -> SchemaResult<Self> {
        let schema = Self {
            name: name.into(),
            fields,
        };
        schema.validate_structure()?;
        Ok(schema)
    }

    /// Validates the declaration invariants.
    ///
    /// Called by `declare` and again when a schema is read back from disk,
    /// since a file may have been edited out-of-band.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "schema name must not be empty".into(),
            ));
        }

        if self.fields.is_empty() {
            return Err(SchemaError::InvalidSchema(format!(
                "schema '{}' declares no fields",
                self.name
            )));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::InvalidSchema(format!(
                    "schema '{}' declares a field with an empty name",
                    self.name
                )));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::InvalidSchema(format!(
                    "schema '{}' declares duplicate field '{}'",
                    self.name, field.name
                )));
            }
        }

        Ok(())
    }

    /// Returns the schema (table) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared fields in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns declared field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the declared kind of a field, if declared
    pub fn kind_of(&self, field_name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|f| f.name == field_name)
            .map(|f| f.kind)
    }

    /// Checks whether a field name is declared
    pub fn contains_field(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f.name == field_name)
    }

    /// Returns the number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::declare(
            "users",
            vec![FieldDef::string("name"), FieldDef::number("age")],
        )
        .unwrap()
    }

    #[test]
    fn test_declare_valid_schema() {
        let schema = sample_schema();
        assert_eq!(schema.name(), "users");
        assert_eq!(schema.field_count(), 2);
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let schema = Schema::declare(
            "events",
            vec![
                FieldDef::date("when"),
                FieldDef::string("what"),
                FieldDef::boolean("done"),
            ],
        )
        .unwrap();

        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["when", "what", "done"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Schema::declare("", vec![FieldDef::string("name")]);
        assert!(matches!(result, Err(SchemaError::InvalidSchema(_))));
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let result = Schema::declare("users", vec![]);
        assert!(matches!(result, Err(SchemaError::InvalidSchema(_))));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Schema::declare(
            "users",
            vec![FieldDef::string("name"), FieldDef::number("name")],
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate field 'name'"));
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let result = Schema::declare("users", vec![FieldDef::string("")]);
        assert!(matches!(result, Err(SchemaError::InvalidSchema(_))));
    }

    #[test]
    fn test_kind_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.kind_of("age"), Some(FieldKind::Number));
        assert_eq!(schema.kind_of("missing"), None);
        assert!(schema.contains_field("name"));
        assert!(!schema.contains_field("email"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldKind::String.kind_name(), "string");
        assert_eq!(FieldKind::Number.kind_name(), "number");
        assert_eq!(FieldKind::Boolean.kind_name(), "boolean");
        assert_eq!(FieldKind::Date.kind_name(), "date");
        assert_eq!(FieldKind::List.kind_name(), "list");
        assert_eq!(FieldKind::Struct.kind_name(), "struct");
    }

    #[test]
    fn test_serde_round_trip() {
        let schema = sample_schema();
        let json = serde_json::to_string(&schema).unwrap();
        let parsed: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&FieldKind::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
    }
}
