use crate::db::{ExclusionStore, RowSource};
use crate::error::YaResult;
use crate::model::{ContactId, ContactRecord};
use crate::queries::contact_queries;

/// Hide a contact from future listings and return what it looked like.
///
/// Unknown ids are excluded too (returning `None`), so a contact can be
/// hidden before it ever shows up in the address book.
pub fn exclude_contact<R, X>(
    source: &R,
    store: &X,
    contact_id: ContactId,
) -> YaResult<Option<ContactRecord>>
where
    R: RowSource + ?Sized,
    X: ExclusionStore + ?Sized,
{
    let record = contact_queries::find_contact(source, contact_id)?;
    store.add(contact_id)?;
    Ok(record)
}
