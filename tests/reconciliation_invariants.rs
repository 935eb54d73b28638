//! Header Reconciliation Invariant Tests
//!
//! - A missing table is created with the declared header, in declared order
//! - Reconciliation is idempotent: second pass performs no write
//! - A header missing declared fields is migrated per the configured policy
//! - Only the store's not-found signal triggers the create path;
//!   backend failures propagate unchanged

use serde_json::json;
use sheetmap::mapper::{MapperError, MigrationPolicy, TableMapper, TableStatus};
use sheetmap::schema::{FieldDef, Schema};
use sheetmap::store::{MemoryStore, StoreError, TableStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn user_schema() -> Schema {
    Schema::declare(
        "users",
        vec![FieldDef::string("name"), FieldDef::number("age")],
    )
    .unwrap()
}

// =============================================================================
// Create Path Tests
// =============================================================================

/// A table that does not exist is created with exactly the declared header.
#[test]
fn test_ensure_creates_table_with_declared_header() {
    let store = MemoryStore::new();
    let mapper = TableMapper::new();

    let status = mapper.ensure_table(&store, &user_schema()).unwrap();

    assert_eq!(status, TableStatus::Created);
    assert_eq!(store.header_of("users").unwrap(), vec!["name", "age"]);
    assert!(store.rows_of("users").unwrap().is_empty());
}

/// Declared field order defines the created header's column order.
#[test]
fn test_created_header_follows_declaration_order() {
    let store = MemoryStore::new();
    let schema = Schema::declare(
        "events",
        vec![
            FieldDef::date("when"),
            FieldDef::string("what"),
            FieldDef::boolean("done"),
        ],
    )
    .unwrap();

    TableMapper::new().ensure_table(&store, &schema).unwrap();

    assert_eq!(
        store.header_of("events").unwrap(),
        vec!["when", "what", "done"]
    );
}

// =============================================================================
// Idempotence Tests
// =============================================================================

/// Two passes with an unchanged schema yield Created then UpToDate and the
/// second performs no header write.
#[test]
fn test_second_pass_is_up_to_date() {
    let store = MemoryStore::new();
    let mapper = TableMapper::new();
    let schema = user_schema();

    assert_eq!(
        mapper.ensure_table(&store, &schema).unwrap(),
        TableStatus::Created
    );
    let writes_after_create = store.header_write_count();

    assert_eq!(
        mapper.ensure_table(&store, &schema).unwrap(),
        TableStatus::UpToDate
    );
    // No header write on the second pass
    assert_eq!(store.header_write_count(), writes_after_create);
}

/// Extra persisted columns do not trigger migration; containment is
/// order-insensitive.
#[test]
fn test_superset_and_reordered_header_is_up_to_date() {
    let store = MemoryStore::new();
    store.create_table("users").unwrap();
    store
        .write_header("users", &["extra".into(), "age".into(), "name".into()])
        .unwrap();

    let status = TableMapper::new()
        .ensure_table(&store, &user_schema())
        .unwrap();

    assert_eq!(status, TableStatus::UpToDate);
    assert_eq!(
        store.header_of("users").unwrap(),
        vec!["extra", "age", "name"]
    );
}

// =============================================================================
// Migration Tests
// =============================================================================

/// A strict-subset header migrates; under Replace the result is exactly the
/// declared field list.
#[test]
fn test_replace_migration_yields_declared_header() {
    let store = MemoryStore::new();
    store.create_table("users").unwrap();
    store.write_header("users", &["name".into()]).unwrap();

    let status = TableMapper::new()
        .ensure_table(&store, &user_schema())
        .unwrap();

    assert_eq!(status, TableStatus::Migrated);
    assert_eq!(store.header_of("users").unwrap(), vec!["name", "age"]);
}

/// Replace is lossy for persisted columns the schema does not declare.
#[test]
fn test_replace_migration_drops_undeclared_columns() {
    let store = MemoryStore::new();
    store.create_table("users").unwrap();
    store
        .write_header("users", &["name".into(), "legacy".into()])
        .unwrap();

    TableMapper::new()
        .ensure_table(&store, &user_schema())
        .unwrap();

    assert_eq!(store.header_of("users").unwrap(), vec!["name", "age"]);
}

/// Union keeps existing columns in place and appends the missing declared
/// fields after them.
#[test]
fn test_union_migration_appends_missing_fields() {
    let store = MemoryStore::new();
    store.create_table("users").unwrap();
    store
        .write_header("users", &["legacy".into(), "age".into()])
        .unwrap();

    let mapper = TableMapper::with_policy(MigrationPolicy::Union);
    let status = mapper.ensure_table(&store, &user_schema()).unwrap();

    assert_eq!(status, TableStatus::Migrated);
    assert_eq!(
        store.header_of("users").unwrap(),
        vec!["legacy", "age", "name"]
    );
}

/// After a Union migration, inserts project against the grown header and
/// remain correct.
#[test]
fn test_insert_after_union_migration() {
    let store = MemoryStore::new();
    store.create_table("users").unwrap();
    store.write_header("users", &["legacy".into()]).unwrap();

    let mapper = TableMapper::with_policy(MigrationPolicy::Union);
    let schema = user_schema();
    mapper.ensure_table(&store, &schema).unwrap();

    let record = json!({"name": "Test", "age": 18}).as_object().cloned().unwrap();
    mapper.insert_record(&store, &schema, &record).unwrap();

    assert_eq!(
        store.rows_of("users").unwrap(),
        vec![vec![serde_json::Value::Null, json!("Test"), json!(18)]]
    );
}

// =============================================================================
// Failure Propagation Tests
// =============================================================================

/// A generic backend failure during the header read is never treated as
/// "table absent": nothing is created and the error surfaces unchanged.
#[test]
fn test_backend_failure_is_not_create_signal() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    let result = TableMapper::new().ensure_table(&store, &user_schema());

    assert!(matches!(
        result,
        Err(MapperError::Store(StoreError::BackendUnavailable(_)))
    ));

    store.set_unavailable(false);
    assert_eq!(store.table_count(), 0);
}
