pub mod schema;
pub mod contact_repo;
pub mod exclude_repo;
pub mod locate;

use rusqlite::Connection;

use crate::error::YaResult;
use crate::model::{ContactId, ContactRow, InclusionMode, SearchSpec};

/// Where contact rows come from. Rows are the flat contact/phone/email join,
/// ordered by last name then first name.
pub trait RowSource {
    fn find_rows(&self, search: &SearchSpec, mode: InclusionMode) -> YaResult<Vec<ContactRow>>;

    /// All rows for a single contact, ignoring the exclude list.
    fn rows_for_contact(&self, contact_id: ContactId) -> YaResult<Vec<ContactRow>>;

    fn count_contacts(&self, mode: InclusionMode) -> YaResult<usize>;
}

/// The persisted set of contacts hidden from listings.
pub trait ExclusionStore {
    fn ensure_schema(&self) -> YaResult<()>;

    fn contains(&self, contact_id: ContactId) -> YaResult<bool>;

    /// Idempotent. Returns `true` when the id was newly added.
    fn add(&self, contact_id: ContactId) -> YaResult<bool>;

    fn count_excluded(&self) -> YaResult<usize>;
}

impl RowSource for Connection {
    fn find_rows(&self, search: &SearchSpec, mode: InclusionMode) -> YaResult<Vec<ContactRow>> {
        contact_repo::find_rows(self, search, mode)
    }

    fn rows_for_contact(&self, contact_id: ContactId) -> YaResult<Vec<ContactRow>> {
        contact_repo::find_rows_by_id(self, contact_id)
    }

    fn count_contacts(&self, mode: InclusionMode) -> YaResult<usize> {
        contact_repo::count(self, mode)
    }
}

impl ExclusionStore for Connection {
    fn ensure_schema(&self) -> YaResult<()> {
        schema::initialize(self)
    }

    fn contains(&self, contact_id: ContactId) -> YaResult<bool> {
        exclude_repo::contains(self, contact_id)
    }

    fn add(&self, contact_id: ContactId) -> YaResult<bool> {
        exclude_repo::insert(self, contact_id)
    }

    fn count_excluded(&self) -> YaResult<usize> {
        exclude_repo::count(self)
    }
}
