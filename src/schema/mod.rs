//! Schema subsystem for sheetmap
//!
//! Schemas are the declared shape of a table: a name plus an ordered list of
//! typed fields. Field order is significant and defines the canonical column
//! order used when a table header is first created.
//!
//! # Design Principles
//!
//! - Field order is a declared invariant, not an incidental property
//! - Schemas are immutable after declaration
//! - Declaration failures are caller bugs, never retried
//! - Deterministic validation

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{FieldDef, FieldKind, Schema};
