use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

use crate::error::{YaError, YaResult};

pub const RECORD_TABLE: &str = "ZABCDRECORD";
pub const PHONE_TABLE: &str = "ZABCDPHONENUMBER";
pub const EMAIL_TABLE: &str = "ZABCDEMAILADDRESS";

/// Tables owned by the address book application. Never created here.
pub const ADDRESS_BOOK_TABLES: [&str; 3] = [RECORD_TABLE, PHONE_TABLE, EMAIL_TABLE];

/// Open an existing address book database read-write.
/// Never creates the file: a missing database is an error, not an empty book.
/// SQLite opens lazily, so a first read is forced here to reject files that
/// exist but are not databases.
pub fn open(path: &Path) -> YaResult<Connection> {
    if !path.is_file() {
        return Err(YaError::DatabaseNotFound {
            path: path.to_path_buf(),
        });
    }
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let unopenable = |source| YaError::Connectivity {
        path: path.to_path_buf(),
        source,
    };
    let conn = Connection::open_with_flags(path, flags).map_err(unopenable)?;
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
        .map_err(unopenable)?;
    debug!(path = %path.display(), "opened address book");
    Ok(conn)
}

/// Fail with a schema error unless every address book table is present.
pub fn verify(conn: &Connection) -> YaResult<()> {
    for table in ADDRESS_BOOK_TABLES {
        if !table_exists(conn, table)? {
            return Err(YaError::MissingTable {
                table: table.to_string(),
            });
        }
    }
    Ok(())
}

pub fn table_exists(conn: &Connection, table: &str) -> YaResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE",
        params![table],
        |row| row.get(0),
    )?;
    Ok(found > 0)
}

/// Create the exclude list if it doesn't exist. Safe to call on every start.
///
/// Older databases may carry `uid data_type PRIMARY KEY`; that column is
/// NUMERIC with a unique key, which behaves the same for integer ids.
pub fn initialize(conn: &Connection) -> YaResult<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS exclude_list (uid INTEGER PRIMARY KEY NOT NULL);")
        .map_err(YaError::Storage)?;
    Ok(())
}

/// Open, check and prepare a database in one go.
pub fn connect(path: &Path) -> YaResult<Connection> {
    let conn = open(path)?;
    verify(&conn)?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create the address book tables the tool reads from. Only used to build
/// fixtures; real databases are owned by the address book application.
pub fn create_address_book_tables(conn: &Connection) -> YaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS ZABCDRECORD (
            Z_PK INTEGER PRIMARY KEY,
            ZLASTNAME VARCHAR,
            ZFIRSTNAME VARCHAR
        );

        CREATE TABLE IF NOT EXISTS ZABCDPHONENUMBER (
            Z_PK INTEGER PRIMARY KEY,
            ZOWNER INTEGER,
            ZFULLNUMBER VARCHAR
        );

        CREATE TABLE IF NOT EXISTS ZABCDEMAILADDRESS (
            Z_PK INTEGER PRIMARY KEY,
            ZOWNER INTEGER,
            ZADDRESS VARCHAR
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory address book for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    create_address_book_tables(&conn).unwrap();
    initialize(&conn).unwrap();
    conn
}
