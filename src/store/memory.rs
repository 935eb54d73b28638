//! # In-Memory Table Store
//!
//! A process-local `TableStore` used by tests and for embedding. Carries a
//! fault-injection switch that makes every call fail with
//! `BackendUnavailable`, for exercising failure propagation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::backend::{Header, Row, TableStore};
use super::errors::{StoreError, StoreResult};

#[derive(Debug, Default, Clone)]
struct TableData {
    header: Header,
    rows: Vec<Row>,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<String, TableData>,
    header_writes: usize,
    unavailable: bool,
}

/// In-memory table store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle fault injection: while set, every store call fails with
    /// `BackendUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }

    /// Returns the persisted header of a table, if the table exists.
    pub fn header_of(&self, table: &str) -> Option<Header> {
        let inner = self.inner.lock().ok()?;
        inner.tables.get(table).map(|t| t.header.clone())
    }

    /// Returns the data rows of a table, if the table exists.
    pub fn rows_of(&self, table: &str) -> Option<Vec<Row>> {
        let inner = self.inner.lock().ok()?;
        inner.tables.get(table).map(|t| t.rows.clone())
    }

    /// Returns the number of tables in the store.
    pub fn table_count(&self) -> usize {
        self.inner.lock().map(|i| i.tables.len()).unwrap_or(0)
    }

    /// Returns how many header writes the store has served, across all
    /// tables. Lets tests assert that an operation performed no write.
    pub fn header_write_count(&self) -> usize {
        self.inner.lock().map(|i| i.header_writes).unwrap_or(0)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::BackendUnavailable("store mutex poisoned".into()))?;
        if inner.unavailable {
            return Err(StoreError::BackendUnavailable(
                "backend marked unavailable".into(),
            ));
        }
        Ok(inner)
    }
}

impl TableStore for MemoryStore {
    fn read_header(&self, table: &str) -> StoreResult<Header> {
        let inner = self.lock()?;
        inner
            .tables
            .get(table)
            .map(|t| t.header.clone())
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))
    }

    fn create_table(&self, table: &str) -> StoreResult<()> {
        let mut inner = self.lock()?;
        if inner.tables.contains_key(table) {
            return Err(StoreError::TableAlreadyExists(table.to_string()));
        }
        inner.tables.insert(table.to_string(), TableData::default());
        Ok(())
    }

    fn write_header(&self, table: &str, header: &[String]) -> StoreResult<()> {
        let mut inner = self.lock()?;
        let data = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        data.header = header.to_vec();
        inner.header_writes += 1;
        Ok(())
    }

    fn append_row(&self, table: &str, row: &[Value]) -> StoreResult<()> {
        let mut inner = self.lock()?;
        let data = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        data.rows.push(row.to_vec());
        Ok(())
    }
}
