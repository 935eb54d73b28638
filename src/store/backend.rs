//! # Table Store Trait

use serde_json::Value;

use super::errors::StoreResult;

/// The persisted first row of a table: an ordered sequence of column names
pub type Header = Vec<String>;

/// A positional data row; cells are scalar JSON values
pub type Row = Vec<Value>;

/// Backend trait for spreadsheet-backed tables.
///
/// Implementations own all transport, auth, and retry concerns. The core
/// calls these methods sequentially and never retries on its own.
pub trait TableStore: Send + Sync + std::fmt::Debug {
    /// Read the header row of a table.
    ///
    /// Fails with `TableNotFound` when the table does not exist and
    /// `BackendUnavailable` on any other failure.
    fn read_header(&self, table: &str) -> StoreResult<Header>;

    /// Create a new, empty table.
    ///
    /// Fails with `TableAlreadyExists` or `BackendUnavailable`.
    fn create_table(&self, table: &str) -> StoreResult<()>;

    /// Replace the header row of a table. Full replace semantics.
    ///
    /// Fails with `TableNotFound` or `BackendUnavailable`.
    fn write_header(&self, table: &str, header: &[String]) -> StoreResult<()>;

    /// Append a row after the last data row of a table.
    ///
    /// Fails with `TableNotFound` or `BackendUnavailable`.
    fn append_row(&self, table: &str, row: &[Value]) -> StoreResult<()>;
}
