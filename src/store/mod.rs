//! TableStore capability
//!
//! The narrow interface through which the mapper reaches the spreadsheet
//! backend. Row 1 of every table is the header; data rows begin at row 2;
//! width is positional and unbounded. Auth, transport, retries, and quota
//! handling all live behind implementations of this trait.

mod backend;
mod errors;
mod memory;

pub use backend::{Header, Row, TableStore};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
