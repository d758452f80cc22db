use chrono::NaiveDate;
use rusqlite::Connection;
use sweepbook_core::db::migrations::latest_version;
use sweepbook_core::db::{open_db, open_db_in_memory, DbError};
use sweepbook_core::seed::SeedData;
use sweepbook_core::store::{CUSTOMERS_KEY, INVENTORY_KEY};
use sweepbook_core::{
    AppState, KeyValueStore, NewCustomer, NewInventoryItem, PersistentStore,
    SqliteKeyValueStore, StoreError, StoreResult,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
}

#[test]
fn open_db_in_memory_creates_kv_table() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sqlite_put_replaces_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get("invoices").unwrap(), None);
    store.put("invoices", "[]").unwrap();
    store.put("invoices", "[1]").unwrap();
    store.put("appointments", "[]").unwrap();

    assert_eq!(store.get("invoices").unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.keys().unwrap(), vec!["appointments", "invoices"]);
}

#[test]
fn collections_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweepbook.db");
    let seed = SeedData::fixtures(today());

    {
        let conn = open_db(&path).unwrap();
        let mut state = AppState::load(SqliteKeyValueStore::new(&conn), seed);
        state.add_inventory_item(NewInventoryItem::new("Sponges", 12, 4));
        state.delete_customer("cust2");
    }

    let conn = open_db(&path).unwrap();
    let reopened = AppState::load(SqliteKeyValueStore::new(&conn), SeedData::empty());

    let names: Vec<&str> = reopened
        .inventory()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "All-Purpose Cleaner",
            "Glass Cleaner",
            "Microfiber Cloths",
            "Trash Bags (Large)",
            "Sponges"
        ]
    );
    let customer_ids: Vec<&str> = reopened.customers().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(customer_ids, vec!["cust1", "cust3"]);

    // Never-written keys fall back to the (empty) seed on reopen.
    assert!(reopened.appointments().is_empty());
    assert!(reopened.invoices().is_empty());
}

#[test]
fn saved_collection_round_trips_structurally() {
    let conn = open_db_in_memory().unwrap();
    let store = PersistentStore::new(SqliteKeyValueStore::new(&conn));
    let customers = SeedData::fixtures(today()).customers;

    store.save(CUSTOMERS_KEY, &customers);
    let loaded: Vec<sweepbook_core::Customer> = store.load(CUSTOMERS_KEY, Vec::new());

    assert_eq!(loaded, customers);
}

#[test]
fn malformed_stored_document_falls_back_to_seed() {
    let conn = open_db_in_memory().unwrap();
    let backend = SqliteKeyValueStore::new(&conn);
    backend.put(INVENTORY_KEY, "{\"broken\": ").unwrap();

    let state = AppState::load(&backend, SeedData::fixtures(today()));
    assert_eq!(state.inventory().len(), 4);
}

/// Backend whose reads and writes always fail.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)))
    }

    fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)))
    }
}

#[test]
fn failing_backend_reads_fall_back_and_writes_keep_memory_state() {
    let mut state = AppState::load(UnavailableStore, SeedData::fixtures(today()));
    assert_eq!(state.customers().len(), 3);
    assert_eq!(state.inventory().len(), 4);

    let id = state.add_customer(NewCustomer::new("Offline Household"));
    assert_eq!(state.customers().len(), 4);
    assert_eq!(state.customer(&id).unwrap().household_name, "Offline Household");

    assert!(state.adjust_inventory_quantity("inv2", 5));
    assert_eq!(state.inventory_item("inv2").unwrap().quantity, 7);
}

#[test]
fn try_forms_surface_backend_errors() {
    let store = PersistentStore::new(UnavailableStore);

    assert!(matches!(
        store.try_load::<Vec<u32>>(CUSTOMERS_KEY),
        Err(StoreError::Db(_))
    ));
    assert!(matches!(
        store.try_save(CUSTOMERS_KEY, &[1, 2]),
        Err(StoreError::Db(_))
    ));
    assert_eq!(store.load(CUSTOMERS_KEY, vec![9_u32]), vec![9]);
    store.save(CUSTOMERS_KEY, &[1, 2]);
}
