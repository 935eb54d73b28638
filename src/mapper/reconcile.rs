//! Header reconciliation
//!
//! `ensure_table` is the idempotent create-or-migrate operation: it reads
//! the persisted header fresh, creates the table when the store reports it
//! absent, and migrates the header when declared fields are missing from it.
//! Only the store's specific not-found signal triggers the create path; any
//! other failure propagates.

use crate::observability::Logger;
use crate::schema::Schema;
use crate::store::{Header, StoreError, TableStore};

use super::errors::MapperResult;

/// Outcome of a reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Table did not exist; created with the declared header
    Created,
    /// Every declared field was already in the persisted header; no write
    UpToDate,
    /// Header was rewritten to cover the declared fields
    Migrated,
}

/// How a header with missing declared fields is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationPolicy {
    /// Header becomes exactly the declared field names in declaration
    /// order. Schema-authoritative; lossy for persisted columns the schema
    /// does not declare.
    #[default]
    Replace,
    /// Persisted header is kept and the missing declared fields are
    /// appended after it. Existing column positions are untouched.
    Union,
}

/// Maps declared schemas onto spreadsheet-backed tables.
///
/// Holds no state beyond the migration policy; the store and schema are
/// passed into every operation.
#[derive(Debug, Default)]
pub struct TableMapper {
    policy: MigrationPolicy,
}

impl TableMapper {
    /// Create a mapper with the default `Replace` migration policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with an explicit migration policy
    pub fn with_policy(policy: MigrationPolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured migration policy
    pub fn policy(&self) -> MigrationPolicy {
        self.policy
    }

    /// Creates or migrates the table for a schema. Idempotent.
    ///
    /// # Errors
    ///
    /// `BackendUnavailable` from the store propagates unchanged; it is
    /// never treated as "table absent".
    pub fn ensure_table(
        &self,
        store: &dyn TableStore,
        schema: &Schema,
    ) -> MapperResult<TableStatus> {
        let header = match store.read_header(schema.name()) {
            Ok(header) => header,
            Err(StoreError::TableNotFound(_)) => {
                store.create_table(schema.name())?;
                let header: Header = schema.field_names().map(str::to_string).collect();
                store.write_header(schema.name(), &header)?;
                Logger::info("TABLE_CREATED", &[("table", schema.name())]);
                return Ok(TableStatus::Created);
            }
            Err(e) => return Err(e.into()),
        };

        let missing = missing_columns(schema, &header);
        if missing.is_empty() {
            Logger::info("SCHEMA_UP_TO_DATE", &[("table", schema.name())]);
            return Ok(TableStatus::UpToDate);
        }

        let new_header: Header = match self.policy {
            MigrationPolicy::Replace => schema.field_names().map(str::to_string).collect(),
            MigrationPolicy::Union => header.into_iter().chain(missing).collect(),
        };

        store.write_header(schema.name(), &new_header)?;
        let columns = new_header.len().to_string();
        Logger::info(
            "SCHEMA_MIGRATED",
            &[("table", schema.name()), ("columns", columns.as_str())],
        );
        Ok(TableStatus::Migrated)
    }
}

/// Declared field names absent from the persisted header, in declaration
/// order. Containment is order-insensitive; the header may be a superset.
pub(super) fn missing_columns(schema: &Schema, header: &[String]) -> Vec<String> {
    schema
        .field_names()
        .filter(|name| !header.iter().any(|col| col == name))
        .map(str::to_string)
        .collect()
}
