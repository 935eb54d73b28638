//! # Table Store Errors

use thiserror::Error;

/// Result type for table store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Table store errors.
///
/// `TableNotFound` is a distinct, expected signal: reconciliation uses it
/// to take the create path. Every other backend failure (auth, network,
/// quota) is `BackendUnavailable` and must propagate unchanged; the two are
/// never conflated.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The named table does not exist in the backend
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Attempt to create a table that already exists
    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),

    /// Any other backend failure: auth, network, quota
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl StoreError {
    /// Whether this is the expected not-found signal rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::TableNotFound(_))
    }
}
