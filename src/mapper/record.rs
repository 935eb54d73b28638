//! Record validation and row projection
//!
//! A record is validated against its schema (no undeclared fields, values
//! match declared kinds) and projected into a positional row in
//! persisted-header order: for each header column, the record's value for
//! that column, or null when the record does not carry it. Persisted
//! headers wider than the schema are tolerated.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

use crate::schema::{FieldKind, Schema};
use crate::store::{Header, Row, TableStore};

use super::errors::{MapperError, MapperResult};
use super::reconcile::{missing_columns, TableMapper};

/// A transient, caller-owned record conforming to a schema's field set
pub type Record = Map<String, Value>;

impl TableMapper {
    /// Appends a record to its schema's table.
    ///
    /// Reads the header fresh, checks that every declared field is a
    /// persisted column, validates record values against declared kinds,
    /// and appends the projected row. Never creates the table.
    ///
    /// # Errors
    ///
    /// - `TableNotFound` when the table has never been created
    /// - `SchemaMismatch` when a declared field is absent from the header
    /// - `UndeclaredField` / `KindMismatch` when the record does not
    ///   conform to the schema
    /// - `BackendUnavailable` propagated from the store
    pub fn insert_record(
        &self,
        store: &dyn TableStore,
        schema: &Schema,
        record: &Record,
    ) -> MapperResult<()> {
        let header = store.read_header(schema.name())?;

        let missing = missing_columns(schema, &header);
        if !missing.is_empty() {
            return Err(MapperError::SchemaMismatch {
                schema: schema.name().to_string(),
                missing,
            });
        }

        validate_record(schema, record)?;

        let row = project_row(&header, record);
        store.append_row(schema.name(), &row)?;
        Ok(())
    }
}

/// Checks a record against its schema: every key must be a declared field
/// and every non-null value must match the declared kind.
fn validate_record(schema: &Schema, record: &Record) -> MapperResult<()> {
    for key in record.keys() {
        if !schema.contains_field(key) {
            return Err(MapperError::UndeclaredField {
                schema: schema.name().to_string(),
                field: key.clone(),
            });
        }
    }

    for field in schema.fields() {
        let value = match record.get(&field.name) {
            Some(v) => v,
            None => continue,
        };
        // Null stands for an absent cell
        if value.is_null() {
            continue;
        }
        if !kind_matches(field.kind, value) {
            return Err(MapperError::KindMismatch {
                schema: schema.name().to_string(),
                field: field.name.clone(),
                expected: field.kind.kind_name(),
                actual: json_type_name(value),
            });
        }
    }

    Ok(())
}

/// Projects a record into a row in persisted-header order.
///
/// Columns the record does not carry emit null, which tolerates headers
/// wider than the declared schema.
fn project_row(header: &Header, record: &Record) -> Row {
    header
        .iter()
        .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
        .collect()
}

fn kind_matches(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Date => value.as_str().is_some_and(is_valid_date),
        FieldKind::List => value.is_array(),
        FieldKind::Struct => value.is_object(),
    }
}

fn is_valid_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "struct",
    }
}
