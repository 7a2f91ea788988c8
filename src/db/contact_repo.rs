use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::YaResult;
use crate::model::{ContactId, ContactRow, InclusionMode, SearchSpec};

const SELECT_ROWS: &str = "SELECT r.Z_PK, r.ZLASTNAME, r.ZFIRSTNAME, p.ZFULLNUMBER, a.ZADDRESS
     FROM ZABCDRECORD r
         LEFT JOIN ZABCDPHONENUMBER p ON r.Z_PK = p.ZOWNER
         LEFT JOIN ZABCDEMAILADDRESS a ON r.Z_PK = a.ZOWNER";

/// Rows whose last name (and optionally first name) matches the search
/// pattern, sorted by last name then first name.
pub fn find_rows(conn: &Connection, search: &SearchSpec, mode: InclusionMode) -> YaResult<Vec<ContactRow>> {
    let exclusion = match mode {
        InclusionMode::ExcludeKnown => "AND r.Z_PK NOT IN (SELECT uid FROM exclude_list)",
        InclusionMode::IncludeKnown => "",
    };
    let sql = format!(
        "{SELECT_ROWS}
         WHERE (IFNULL(r.ZLASTNAME, '') LIKE ?1
                OR (?2 AND IFNULL(r.ZFIRSTNAME, '') LIKE ?1))
           {exclusion}
         ORDER BY r.ZLASTNAME, r.ZFIRSTNAME, r.Z_PK"
    );
    debug!(pattern = %search.pattern, first_name = search.match_first_name, ?mode, "searching contacts");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![search.pattern, search.match_first_name], row_to_contact_row)?
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "contact rows fetched");
    Ok(rows)
}

/// Every row for one contact, whether or not it is excluded.
pub fn find_rows_by_id(conn: &Connection, contact_id: ContactId) -> YaResult<Vec<ContactRow>> {
    let sql = format!("{SELECT_ROWS} WHERE r.Z_PK = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![contact_id], row_to_contact_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count(conn: &Connection, mode: InclusionMode) -> YaResult<usize> {
    let sql = match mode {
        InclusionMode::IncludeKnown => "SELECT count(*) FROM ZABCDRECORD",
        InclusionMode::ExcludeKnown => {
            "SELECT count(*) FROM ZABCDRECORD WHERE Z_PK NOT IN (SELECT uid FROM exclude_list)"
        }
    };
    let cnt: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(cnt as usize)
}

pub fn insert_contact(
    conn: &Connection,
    contact_id: ContactId,
    last_name: Option<&str>,
    first_name: Option<&str>,
) -> YaResult<()> {
    conn.execute(
        "INSERT INTO ZABCDRECORD (Z_PK, ZLASTNAME, ZFIRSTNAME) VALUES (?1, ?2, ?3)",
        params![contact_id, last_name, first_name],
    )?;
    Ok(())
}

pub fn insert_phone(conn: &Connection, owner: ContactId, number: &str) -> YaResult<()> {
    conn.execute(
        "INSERT INTO ZABCDPHONENUMBER (ZOWNER, ZFULLNUMBER) VALUES (?1, ?2)",
        params![owner, number],
    )?;
    Ok(())
}

pub fn insert_email(conn: &Connection, owner: ContactId, address: &str) -> YaResult<()> {
    conn.execute(
        "INSERT INTO ZABCDEMAILADDRESS (ZOWNER, ZADDRESS) VALUES (?1, ?2)",
        params![owner, address],
    )?;
    Ok(())
}

fn row_to_contact_row(row: &rusqlite::Row) -> rusqlite::Result<ContactRow> {
    Ok(ContactRow {
        contact_id: row.get(0)?,
        last_name: row.get(1)?,
        first_name: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
    })
}
