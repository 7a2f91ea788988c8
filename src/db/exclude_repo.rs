use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{YaError, YaResult};
use crate::model::ContactId;

/// Add a contact to the exclude list. Returns `true` if it was not already
/// there. A single statement, so concurrent runs cannot insert it twice.
pub fn insert(conn: &Connection, contact_id: ContactId) -> YaResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO exclude_list (uid) VALUES (?1)",
            params![contact_id],
        )
        .map_err(YaError::Storage)?;

    if inserted > 0 {
        info!(%contact_id, "contact added to exclude list");
    } else {
        debug!(%contact_id, "contact already excluded");
    }
    Ok(inserted > 0)
}

pub fn contains(conn: &Connection, contact_id: ContactId) -> YaResult<bool> {
    let found = conn
        .query_row(
            "SELECT uid FROM exclude_list WHERE uid = ?1",
            params![contact_id],
            |row| row.get::<_, ContactId>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn count(conn: &Connection) -> YaResult<usize> {
    let cnt: i64 = conn.query_row("SELECT count(*) FROM exclude_list", [], |row| row.get(0))?;
    Ok(cnt as usize)
}
