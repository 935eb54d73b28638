//! Schema registry with JSON file persistence
//!
//! Declared schemas live in memory, one per table name. Optionally they can
//! be persisted as one JSON file per schema at `<dir>/schema_<name>.json`
//! and reloaded at startup. Files are never overwritten: schemas are
//! immutable once declared.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::Logger;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDef, Schema};

/// Registry of declared schemas, indexed by table name.
pub struct SchemaRegistry {
    /// Directory holding persisted schema files
    schema_dir: PathBuf,
    /// Declared schemas by name
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates a registry rooted at the given schema directory.
    ///
    /// Nothing is read from disk until `load_all` is called.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Declares a new schema and stores it in the registry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` for a bad declaration and `AlreadyDeclared`
    /// if a schema with this name exists.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> SchemaResult<&Schema> {
        let schema = Schema::declare(name, fields)?;

        if self.schemas.contains_key(schema.name()) {
            return Err(SchemaError::AlreadyDeclared(schema.name().to_string()));
        }

        let name = schema.name().to_string();
        self.schemas.insert(name.clone(), schema);
        Ok(&self.schemas[&name])
    }

    /// Gets a declared schema by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Checks whether a schema with this name has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of declared schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns all declared schemas.
    pub fn all_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Loads every schema file from the schema directory.
    ///
    /// A missing directory is not an error; there is simply nothing to load.
    /// A file that cannot be read, parsed, or that fails structural
    /// validation is a `MalformedFile` error.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| SchemaError::MalformedFile {
            path: self.schema_dir.display().to_string(),
            reason: format!("failed to read schema directory: {}", e),
        })?;

        let mut loaded = 0usize;
        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::MalformedFile {
                path: self.schema_dir.display().to_string(),
                reason: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_schema_file(&path)?;
            loaded += 1;
        }

        let count = loaded.to_string();
        let dir = self.schema_dir.display().to_string();
        Logger::info(
            "SCHEMAS_LOADED",
            &[("count", count.as_str()), ("dir", dir.as_str())],
        );

        Ok(())
    }

    /// Loads a single schema file into the registry.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| SchemaError::MalformedFile {
            path: path.display().to_string(),
            reason: format!("failed to read file: {}", e),
        })?;

        let schema: Schema =
            serde_json::from_str(&content).map_err(|e| SchemaError::MalformedFile {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {}", e),
            })?;

        // Files may have been edited out-of-band
        schema.validate_structure()?;

        if self.schemas.contains_key(schema.name()) {
            return Err(SchemaError::AlreadyDeclared(schema.name().to_string()));
        }

        self.schemas.insert(schema.name().to_string(), schema);
        Ok(())
    }

    /// Saves a declared schema to its file under the schema directory.
    ///
    /// Refuses to overwrite an existing file: schemas are immutable.
    pub fn save_schema(&self, name: &str) -> SchemaResult<PathBuf> {
        let schema = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;

        let path = self.schema_dir.join(format!("schema_{}.json", schema.name()));
        if path.exists() {
            return Err(SchemaError::AlreadyDeclared(schema.name().to_string()));
        }

        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| SchemaError::MalformedFile {
                path: self.schema_dir.display().to_string(),
                reason: format!("failed to create schema directory: {}", e),
            })?;
        }

        let content =
            serde_json::to_string_pretty(schema).map_err(|e| SchemaError::MalformedFile {
                path: path.display().to_string(),
                reason: format!("failed to serialize schema: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| SchemaError::MalformedFile {
            path: path.display().to_string(),
            reason: format!("failed to write file: {}", e),
        })?;

        Ok(path)
    }
}
