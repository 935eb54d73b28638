//! # Schema Errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema declaration and registry errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Bad declaration: empty name, empty field list, or repeated field name.
    /// Always a caller bug.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A schema with this name has already been declared
    #[error("Schema already declared: {0}")]
    AlreadyDeclared(String),

    /// No schema with this name has been declared
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    /// A persisted schema file could not be read or parsed
    #[error("Malformed schema file '{path}': {reason}")]
    MalformedFile { path: String, reason: String },
}
