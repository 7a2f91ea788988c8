use rusqlite::Connection;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::db::locate::{self, DbLocation};
use crate::db::schema;
use crate::error::YaResult;

pub struct CLIContext {
    pub conn: Connection,
    pub location: DbLocation,
    pub debug: bool,
}

impl CLIContext {
    /// Resolve, open and check the database, and make sure the exclude list
    /// exists. Fails before anything is printed.
    pub fn open(db: Option<&Path>, user: Option<&str>, debug: bool) -> YaResult<Self> {
        let location = locate::resolve(db, user)?;
        let conn = schema::connect(&location.path)?;
        debug!(path = %location.path.display(), user = %location.user, "context ready");
        Ok(Self {
            conn,
            location,
            debug,
        })
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Ask a yes/no question. Anything but y/yes, including EOF, is a no.
    pub fn confirm(&self, question: &str) -> bool {
        self.read_line(&format!("{} [y/N] ", question))
            .map(|answer| is_yes(&answer))
            .unwrap_or(false)
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
