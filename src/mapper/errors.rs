//! # Mapper Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;

/// Reconciliation and insertion errors.
///
/// Store failures pass through untouched so the caller keeps the
/// `TableNotFound` / `BackendUnavailable` distinction. The data-integrity
/// variants are surfaced to the caller and never auto-resolved.
#[derive(Debug, Clone, Error)]
pub enum MapperError {
    /// Underlying store failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Declared fields are missing from the persisted header
    #[error("Schema '{schema}' does not match table header: missing columns {missing:?}")]
    SchemaMismatch {
        schema: String,
        missing: Vec<String>,
    },

    /// The record carries a field the schema does not declare
    #[error("Record field '{field}' is not declared by schema '{schema}'")]
    UndeclaredField { schema: String, field: String },

    /// A record value does not match the declared field kind
    #[error("Field '{field}' of schema '{schema}': expected {expected}, got {actual}")]
    KindMismatch {
        schema: String,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}
