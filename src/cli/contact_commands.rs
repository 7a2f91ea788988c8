use std::io::{self, Write};

use crate::cli::context::CLIContext;
use crate::error::YaResult;
use crate::model::ContactRecord;
use crate::ops::exclude_ops;
use crate::ops::list_ops::{self, ListEvent, ListQuery};
use crate::queries::stats_queries::{self, AddressBookStats};
use crate::validation;

pub fn list(ctx: &CLIContext, query: &ListQuery, json: bool) -> YaResult<()> {
    let stdout = io::stdout();

    if json {
        let mut shown: Vec<ContactRecord> = Vec::new();
        list_ops::list_contacts(
            &ctx.conn,
            &ctx.conn,
            query,
            |_| Ok(false),
            |event| {
                if let ListEvent::Contact(record) = event {
                    shown.push(record.clone());
                }
                Ok(())
            },
        )?;
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &shown)?;
        writeln!(out)?;
        return Ok(());
    }

    list_ops::list_contacts(
        &ctx.conn,
        &ctx.conn,
        query,
        |_| Ok(ctx.confirm("Exclude from future queries?")),
        |event| {
            let mut out = stdout.lock();
            match event {
                ListEvent::Contact(record) => write_contact(&mut out, record)?,
                ListEvent::Excluded(id) => writeln!(out, "Excluding this address in future: {}", id)?,
            }
            out.flush()?;
            Ok(())
        },
    )?;
    Ok(())
}

pub fn exclude(ctx: &CLIContext, uid: &str) -> YaResult<()> {
    let contact_id = validation::contact_id(uid)?;
    let record = exclude_ops::exclude_contact(&ctx.conn, &ctx.conn, contact_id)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Excluded: ")?;
    if let Some(record) = record {
        write_contact(&mut out, &record)?;
    }
    Ok(())
}

pub fn info(ctx: &CLIContext, json: bool) -> YaResult<()> {
    let stats = stats_queries::stats(&ctx.conn, &ctx.conn, ctx.location.path.clone())?;
    let mut out = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &stats)?;
        writeln!(out)?;
        return Ok(());
    }

    write_stats(&mut out, &stats)?;
    if ctx.debug {
        writeln!(out, "User: {}", ctx.location.user)?;
    }
    Ok(())
}

/// `Name [id]` followed by one indented line per phone, then per email.
/// Absent values are skipped.
pub fn write_contact<W: Write>(out: &mut W, record: &ContactRecord) -> io::Result<()> {
    writeln!(out, "{} [{}]", record.full_name, record.contact_id)?;
    for phone in record.present_phones() {
        writeln!(out, "\t{}", phone)?;
    }
    for email in record.present_emails() {
        writeln!(out, "\t{}", email)?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &AddressBookStats) -> io::Result<()> {
    writeln!(out, "Total records not excluded: {}", stats.not_excluded)?;
    writeln!(out, "Total records excluded: {}", stats.excluded)?;
    writeln!(out, "Database: {}", stats.database.display())
}
