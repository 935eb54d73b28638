//! TableMapper subsystem
//!
//! Reconciles persisted table headers against declared schemas and maps
//! typed records to positional rows.
//!
//! # Design Principles
//!
//! - The backend is the source of truth: headers are read fresh on every
//!   operation, never cached
//! - Reconciliation is a total function over three outcomes:
//!   `Created`, `UpToDate`, `Migrated`
//! - Migration behavior is an explicit, configurable policy
//! - Rows are projected in persisted-header order, so inserts stay correct
//!   after non-destructive header growth
//! - Insertion never creates a table and never migrates a header

mod errors;
mod reconcile;
mod record;

pub use errors::{MapperError, MapperResult};
pub use reconcile::{MigrationPolicy, TableMapper, TableStatus};
pub use record::Record;
