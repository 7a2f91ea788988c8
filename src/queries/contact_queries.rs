use std::collections::HashMap;

use crate::db::RowSource;
use crate::error::YaResult;
use crate::model::{ContactId, ContactRecord, ContactRow, InclusionMode, SearchSpec};

/// Fold joined rows into one record per contact, in the order contacts are
/// first seen. Phones and emails are deduplicated by exact value.
pub fn aggregate<I>(rows: I) -> Vec<ContactRecord>
where
    I: IntoIterator<Item = ContactRow>,
{
    let mut records: Vec<ContactRecord> = Vec::new();
    let mut index: HashMap<ContactId, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.contact_id).or_insert_with(|| {
            records.push(ContactRecord::from_row(&row));
            records.len() - 1
        });
        records[slot].absorb(row);
    }

    records
}

pub fn search<R: RowSource + ?Sized>(
    source: &R,
    search: &SearchSpec,
    mode: InclusionMode,
) -> YaResult<Vec<ContactRecord>> {
    Ok(aggregate(source.find_rows(search, mode)?))
}

/// The aggregated record for one contact, if the address book has it.
pub fn find_contact<R: RowSource + ?Sized>(
    source: &R,
    contact_id: ContactId,
) -> YaResult<Option<ContactRecord>> {
    Ok(aggregate(source.rows_for_contact(contact_id)?).into_iter().next())
}
