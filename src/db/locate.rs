//! Finding the address book database on disk.
//!
//! The address book keeps one database per account source under
//! `~/Library/Application Support/AddressBook/Sources/<uuid>/`, plus a
//! top-level one for "On My Mac" contacts.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{YaError, YaResult};
use crate::validation::trim_optional;

pub const DATABASE_FILE: &str = "AddressBook-v22.abcddb";
const ADDRESS_BOOK_DIR: [&str; 3] = ["Library", "Application Support", "AddressBook"];

/// The database a run operates on, and whose address book it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbLocation {
    pub path: PathBuf,
    pub user: String,
}

/// Resolve the database path. An explicit path always wins; otherwise the
/// user's address book directory is searched.
pub fn resolve(explicit: Option<&Path>, user: Option<&str>) -> YaResult<DbLocation> {
    let user = trim_optional(user).unwrap_or_else(current_user);

    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit database path");
        return Ok(DbLocation {
            path: path.to_path_buf(),
            user,
        });
    }

    let home = home_for(&user)?;
    let dir = ADDRESS_BOOK_DIR.iter().fold(home, |acc, part| acc.join(part));
    let path = find_in(&dir)?;
    debug!(path = %path.display(), %user, "discovered address book");
    Ok(DbLocation { path, user })
}

/// First database found under an AddressBook directory: source databases in
/// lexical order, then the top-level one.
pub fn find_in(address_book_dir: &Path) -> YaResult<PathBuf> {
    let sources = address_book_dir.join("Sources");
    let mut candidates = Vec::new();

    match std::fs::read_dir(&sources) {
        Ok(entries) => {
            for entry in entries {
                let candidate = entry?.path().join(DATABASE_FILE);
                if candidate.is_file() {
                    candidates.push(candidate);
                }
            }
        }
        Err(e) => warn!(dir = %sources.display(), error = %e, "cannot read address book sources"),
    }
    candidates.sort();

    let top_level = address_book_dir.join(DATABASE_FILE);
    if top_level.is_file() {
        candidates.push(top_level);
    }

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| YaError::NoAddressBook {
            searched: address_book_dir.to_path_buf(),
        })
}

/// Login name of the invoking user, from the usual environment variables.
pub fn current_user() -> String {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default()
}

fn home_for(user: &str) -> YaResult<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| YaError::NoHomeDirectory {
        user: user.to_string(),
    })?;
    if user.is_empty() || user == current_user() {
        return Ok(home);
    }
    // Other users live next to us, e.g. /Users/<name>.
    home.parent()
        .map(|parent| parent.join(user))
        .ok_or_else(|| YaError::NoHomeDirectory {
            user: user.to_string(),
        })
}
