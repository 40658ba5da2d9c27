#![cfg(feature = "sqlite")]

use sql_facade::prelude::*;

fn text(s: &str) -> RowValues {
    RowValues::Text(s.to_string())
}

fn open_db() -> Database<SqliteAdapter> {
    let mut db = Database::new(SqliteAdapter::in_memory());
    db.connect().expect("in-memory connect");
    db
}

fn create_users_table(db: &mut Database<SqliteAdapter>) {
    db.run(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT UNIQUE,
            age INTEGER,
            balance REAL,
            active INTEGER
        )",
        &NamedParams::new(),
    )
    .expect("create table");
}

#[test]
fn insert_then_get_row_where_round_trip() {
    let mut db = open_db();
    create_users_table(&mut db);

    let id = db
        .insert_row(
            "users",
            &NamedParams::new()
                .with("name", text("Alice"))
                .with("email", text("alice@example.org"))
                .with("age", RowValues::Int(30))
                .with("balance", RowValues::Float(12.5))
                .with("active", RowValues::Bool(true)),
            false,
        )
        .unwrap();
    assert_eq!(id, 1);

    let rows = db.get_row_where("users", "name", text("Alice")).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows.rows[0];
    assert_eq!(row.get("name").unwrap().as_text().unwrap(), "Alice");
    assert_eq!(*row.get("id").unwrap().as_int().unwrap(), 1);
    assert_eq!(*row.get("age").unwrap().as_int().unwrap(), 30);
    assert_eq!(row.get("balance").unwrap().as_float().unwrap(), 12.5);
    assert!(*row.get("active").unwrap().as_bool().unwrap());
}

#[test]
fn get_row_where_array_matches_multiple_conditions() {
    let mut db = open_db();
    create_users_table(&mut db);

    for (name, age) in [("a", 20), ("b", 20), ("c", 30)] {
        db.insert_row(
            "users",
            &NamedParams::new()
                .with("name", text(name))
                .with("age", RowValues::Int(age)),
            false,
        )
        .unwrap();
    }

    let rows = db
        .get_row_where_array(
            "users",
            &NamedParams::new()
                .with("age", RowValues::Int(20))
                .with("name", text("b")),
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows[0].get("name").unwrap().as_text().unwrap(), "b");
}

#[test]
fn get_row_where_on_missing_row_returns_empty_set() {
    let mut db = open_db();
    create_users_table(&mut db);

    let rows = db.get_row_where("users", "id", RowValues::Int(99)).unwrap();
    assert!(rows.is_empty());
    assert_eq!(rows.len(), 0);
}

#[test]
fn empty_where_mapping_is_a_caller_error() {
    let mut db = open_db();
    create_users_table(&mut db);

    let err = db
        .get_row_where_array("users", &NamedParams::new())
        .unwrap_err();
    assert!(matches!(err, SqlFacadeError::ParameterError(_)));

    let err = db
        .delete_where_array("users", &NamedParams::new())
        .unwrap_err();
    assert!(matches!(err, SqlFacadeError::ParameterError(_)));
}

#[test]
fn insert_ignore_suppresses_duplicate_key_failure() {
    let mut db = open_db();
    create_users_table(&mut db);

    db.insert_row(
        "users",
        &NamedParams::new()
            .with("name", text("Alice"))
            .with("email", text("alice@example.org")),
        false,
    )
    .unwrap();

    // Same unique email: a plain insert fails...
    let err = db
        .insert_row(
            "users",
            &NamedParams::new()
                .with("name", text("Alice2"))
                .with("email", text("alice@example.org")),
            false,
        )
        .unwrap_err();
    assert!(matches!(err, SqlFacadeError::QueryError(_)));

    // ...while ignore_duplicate swallows it.
    db.insert_row(
        "users",
        &NamedParams::new()
            .with("name", text("Alice2"))
            .with("email", text("alice@example.org")),
        true,
    )
    .unwrap();

    let rows = db
        .get_row_where("users", "email", text("alice@example.org"))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows[0].get("name").unwrap().as_text().unwrap(), "Alice");
}

#[test]
fn batch_insert_inlines_empty_strings_and_binds_the_rest() {
    let mut db = open_db();
    db.run(
        "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT, a INTEGER, b TEXT)",
        &NamedParams::new(),
    )
    .unwrap();

    let rows = vec![
        NamedParams::new()
            .with("a", RowValues::Int(1))
            .with("b", text("")),
        NamedParams::new()
            .with("a", RowValues::Int(2))
            .with("b", text("x")),
    ];
    let last_id = db.insert_row_batch("t", &rows, false).unwrap();
    assert_eq!(last_id, 2);

    let first = db.get_row_where("t", "a", RowValues::Int(1)).unwrap();
    assert_eq!(first.rows[0].get("b").unwrap().as_text().unwrap(), "");

    let second = db.get_row_where("t", "a", RowValues::Int(2)).unwrap();
    assert_eq!(second.rows[0].get("b").unwrap().as_text().unwrap(), "x");
}

#[test]
fn batch_insert_rejects_ragged_rows() {
    let mut db = open_db();
    db.run("CREATE TABLE t (a INTEGER, b TEXT)", &NamedParams::new())
        .unwrap();

    let rows = vec![
        NamedParams::new()
            .with("a", RowValues::Int(1))
            .with("b", text("x")),
        NamedParams::single("a", RowValues::Int(2)),
    ];
    let err = db.insert_row_batch("t", &rows, false).unwrap_err();
    assert!(matches!(err, SqlFacadeError::ParameterError(_)));
}

#[test]
fn update_with_column_in_both_mappings_does_not_collide() {
    let mut db = open_db();
    create_users_table(&mut db);

    db.insert_row(
        "users",
        &NamedParams::new()
            .with("name", text("Alice"))
            .with("age", RowValues::Int(30)),
        false,
    )
    .unwrap();

    // `id` appears in both the SET and WHERE mappings with different values.
    let outcome = db
        .update_row_where_array(
            "users",
            &NamedParams::new()
                .with("id", RowValues::Int(7))
                .with("name", text("Bob")),
            &NamedParams::single("id", RowValues::Int(1)),
        )
        .unwrap();
    assert_eq!(outcome.rows_affected, 1);

    assert!(db.get_row_where("users", "id", RowValues::Int(1)).unwrap().is_empty());
    let rows = db.get_row_where("users", "id", RowValues::Int(7)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows[0].get("name").unwrap().as_text().unwrap(), "Bob");
}

#[test]
fn update_row_where_short_form_updates_matching_rows() {
    let mut db = open_db();
    create_users_table(&mut db);

    for name in ["a", "b"] {
        db.insert_row(
            "users",
            &NamedParams::new()
                .with("name", text(name))
                .with("age", RowValues::Int(20)),
            false,
        )
        .unwrap();
    }

    let outcome = db
        .update_row_where(
            "users",
            &NamedParams::single("age", RowValues::Int(21)),
            "age",
            RowValues::Int(20),
        )
        .unwrap();
    assert_eq!(outcome.rows_affected, 2);
}

#[test]
fn delete_where_then_get_row_where_finds_nothing() {
    let mut db = open_db();
    create_users_table(&mut db);

    db.insert_row("users", &NamedParams::single("name", text("Alice")), false)
        .unwrap();

    let outcome = db.delete_where("users", "id", RowValues::Int(1)).unwrap();
    assert_eq!(outcome.rows_affected, 1);

    let rows = db.get_row_where("users", "id", RowValues::Int(1)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn failed_run_leaves_the_connection_usable() {
    let mut db = open_db();
    create_users_table(&mut db);

    let err = db.run("NOT VALID SQL", &NamedParams::new()).unwrap_err();
    assert!(matches!(err, SqlFacadeError::QueryError(_)));

    // The session survives the failure.
    let id = db
        .insert_row("users", &NamedParams::single("name", text("ok")), false)
        .unwrap();
    assert_eq!(id, 1);
}

#[test]
fn transaction_commit_persists_and_rollback_discards() {
    let mut db = open_db();
    create_users_table(&mut db);

    db.begin_transaction().unwrap();
    db.insert_row("users", &NamedParams::single("name", text("kept")), false)
        .unwrap();
    db.commit().unwrap();

    db.begin_transaction().unwrap();
    db.insert_row(
        "users",
        &NamedParams::single("name", text("discarded")),
        false,
    )
    .unwrap();
    db.roll_back().unwrap();

    assert_eq!(db.get_row_where("users", "name", text("kept")).unwrap().len(), 1);
    assert!(db
        .get_row_where("users", "name", text("discarded"))
        .unwrap()
        .is_empty());
}

#[test]
fn null_values_round_trip() {
    let mut db = open_db();
    create_users_table(&mut db);

    db.insert_row(
        "users",
        &NamedParams::new()
            .with("name", text("nobody"))
            .with("email", RowValues::Null),
        false,
    )
    .unwrap();

    let rows = db.get_row_where("users", "name", text("nobody")).unwrap();
    assert!(rows.rows[0].get("email").unwrap().is_null());
}

#[test]
fn file_backed_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db").to_string_lossy().into_owned();

    {
        let mut db = Database::new(SqliteAdapter::new(DbConfig::sqlite_path(path.clone())));
        db.connect().unwrap();
        db.run(
            "CREATE TABLE notes (id INTEGER PRIMARY KEY AUTOINCREMENT, body TEXT)",
            &NamedParams::new(),
        )
        .unwrap();
        db.insert_row("notes", &NamedParams::single("body", text("hello")), false)
            .unwrap();
    }

    let mut db = Database::new(SqliteAdapter::new(DbConfig::sqlite_path(path)));
    db.connect().unwrap();
    let rows = db.get_row_where("notes", "body", text("hello")).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn facade_works_over_a_boxed_adapter() {
    let adapter: Box<dyn DatabaseAdapter> = Box::new(SqliteAdapter::in_memory());
    let mut db = Database::new(adapter);
    db.connect().unwrap();
    db.run("CREATE TABLE t (a INTEGER)", &NamedParams::new())
        .unwrap();
    db.insert_row("t", &NamedParams::single("a", RowValues::Int(1)), false)
        .unwrap();
    assert_eq!(db.get_row_where("t", "a", RowValues::Int(1)).unwrap().len(), 1);
}
