use foodshare_db::*;

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Providers (Provider_ID, Name, Type, Address, City, Contact) VALUES
             (1, 'A', 'Restaurant', '12 Main St', 'Springfield', 'x'),
             (2, 'B', 'Grocery', NULL, 'Shelbyville', 'y');",
    )
    .unwrap();
    conn
}

#[test]
fn select_returns_columns_and_rows() {
    let conn = setup_db();
    let out = run_query(&conn, "SELECT Provider_ID, Name FROM Providers ORDER BY Provider_ID")
        .unwrap();
    assert_eq!(out.columns, vec!["Provider_ID", "Name"]);
    assert_eq!(out.rows.len(), 2);
    assert_eq!(out.rows[0], vec!["1", "A"]);
}

#[test]
fn null_renders_as_empty_cell() {
    let conn = setup_db();
    let out = run_query(&conn, "SELECT Address FROM Providers WHERE Provider_ID = 2").unwrap();
    assert_eq!(out.rows[0][0], "");
}

#[test]
fn empty_result_is_not_an_error() {
    let conn = setup_db();
    let out = run_query(&conn, "SELECT * FROM Claims").unwrap();
    assert!(out.is_empty());
    assert!(!out.columns.is_empty());
}

#[test]
fn malformed_sql_is_reported() {
    let conn = setup_db();
    assert!(run_query(&conn, "SELEKT * FROM Providers").is_err());
}

#[test]
fn unknown_table_is_reported() {
    let conn = setup_db();
    assert!(run_query(&conn, "SELECT * FROM Donations").is_err());
}

#[test]
fn read_only_console_rejects_writes() {
    let conn = setup_db();
    set_read_only(&conn).unwrap();

    let err = run_query(&conn, "DELETE FROM Providers").unwrap_err();
    assert!(matches!(err, OperationError::Sqlite(_)));

    // Nothing was deleted.
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Providers", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn writable_console_executes_writes() {
    let conn = setup_db();
    run_query(&conn, "DELETE FROM Providers WHERE Provider_ID = 2").unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Providers", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
