use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum YaError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid contact id '{value}': expected an integer")]
    InvalidContactId { value: String },

    #[error("Address book database not found: {}", path.display())]
    DatabaseNotFound { path: PathBuf },

    #[error("Cannot open address book database {}: {source}", path.display())]
    Connectivity {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Address book schema is missing table {table}")]
    MissingTable { table: String },

    #[error("No address book found under {}", searched.display())]
    NoAddressBook { searched: PathBuf },

    #[error("Cannot determine the home directory for user {user}")]
    NoHomeDirectory { user: String },

    #[error("Failed to update exclude list: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type YaResult<T> = Result<T, YaError>;
