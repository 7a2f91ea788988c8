use tracing::debug;

use crate::db::{ExclusionStore, RowSource};
use crate::error::YaResult;
use crate::model::{ContactId, ContactRecord, InclusionMode, SearchSpec};
use crate::queries::contact_queries;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Name prefix; `None` lists everyone.
    pub spec: Option<String>,
    pub match_first_name: bool,
    /// Ask after each contact whether to exclude it from future listings.
    pub query_exclude: bool,
    /// Also list contacts already on the exclude list.
    pub include_excluded: bool,
}

impl ListQuery {
    pub fn search(&self) -> SearchSpec {
        if self.match_first_name {
            SearchSpec::any_name(self.spec.as_deref())
        } else {
            SearchSpec::last_name(self.spec.as_deref())
        }
    }

    pub fn mode(&self) -> InclusionMode {
        InclusionMode::from_include_flag(self.include_excluded)
    }
}

/// What `list_contacts` reports back, in order, while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent<'a> {
    Contact(&'a ContactRecord),
    Excluded(ContactId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    /// Ids the user chose to exclude during this listing.
    pub excluded: Vec<ContactId>,
}

/// List matching contacts. Each record is handed to `display`; when the query
/// asks for it, `confirm` is consulted right after and a `true` answer adds
/// the contact to the exclude list before the next record is shown.
pub fn list_contacts<R, X, C, D>(
    source: &R,
    store: &X,
    query: &ListQuery,
    mut confirm: C,
    mut display: D,
) -> YaResult<ListSummary>
where
    R: RowSource + ?Sized,
    X: ExclusionStore + ?Sized,
    C: FnMut(&ContactRecord) -> YaResult<bool>,
    D: FnMut(ListEvent<'_>) -> YaResult<()>,
{
    let records = contact_queries::search(source, &query.search(), query.mode())?;
    debug!(contacts = records.len(), "contacts aggregated");

    let mut summary = ListSummary::default();
    for record in &records {
        display(ListEvent::Contact(record))?;
        summary.shown += 1;

        if query.query_exclude && confirm(record)? {
            store.add(record.contact_id)?;
            summary.excluded.push(record.contact_id);
            display(ListEvent::Excluded(record.contact_id))?;
        }
    }

    Ok(summary)
}
