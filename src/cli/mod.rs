pub mod context;
pub mod contact_commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::YaResult;
use crate::ops::list_ops::ListQuery;
use context::CLIContext;

#[derive(Debug, Parser)]
#[command(name = "ya")]
#[command(about = "Search the address book and hide contacts from future results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// User whose address book is used (defaults to the current login).
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Address book database to use instead of discovering one.
    #[arg(long, env = "YA_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List address entries matching a last-name prefix.
    #[command(visible_alias = "ls")]
    List {
        /// Name prefix; use a leading % to match anywhere.
        spec: Option<String>,

        /// Ask after each entry whether to exclude it from future queries.
        #[arg(short, long, conflicts_with = "json")]
        query_exclude: bool,

        /// Include entries that were excluded earlier.
        #[arg(short, long)]
        include: bool,

        /// Match first names as well as last names.
        #[arg(short, long)]
        first_name: bool,

        #[arg(long)]
        json: bool,
    },

    /// Exclude the record with UID from future listings.
    Exclude { uid: String },

    /// Print simple stats.
    Info {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> YaResult<()> {
    let ctx = CLIContext::open(cli.db.as_deref(), cli.user.as_deref(), cli.debug)?;

    match cli.command {
        Commands::List {
            spec,
            query_exclude,
            include,
            first_name,
            json,
        } => {
            let query = ListQuery {
                spec,
                match_first_name: first_name,
                query_exclude,
                include_excluded: include,
            };
            contact_commands::list(&ctx, &query, json)
        }
        Commands::Exclude { uid } => contact_commands::exclude(&ctx, &uid),
        Commands::Info { json } => contact_commands::info(&ctx, json),
    }
}
