//! sheetmap - schema-driven object mapping for spreadsheet-backed tables
//!
//! A named sheet is a table: row 1 is a header of column names, every
//! following row is a record. This crate declares table shapes as ordered
//! schemas, reconciles persisted headers against them, and projects typed
//! records into positional rows.

pub mod mapper;
pub mod observability;
pub mod schema;
pub mod store;
