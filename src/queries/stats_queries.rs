use serde::Serialize;
use std::path::PathBuf;

use crate::db::{ExclusionStore, RowSource};
use crate::error::YaResult;
use crate::model::InclusionMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBookStats {
    /// Every contact in the address book.
    pub total: usize,
    /// Contacts not on the exclude list.
    pub not_excluded: usize,
    /// Size of the exclude list, which may name ids the book doesn't have.
    pub excluded: usize,
    pub database: PathBuf,
}

pub fn stats<R, X>(source: &R, store: &X, database: PathBuf) -> YaResult<AddressBookStats>
where
    R: RowSource + ?Sized,
    X: ExclusionStore + ?Sized,
{
    Ok(AddressBookStats {
        total: source.count_contacts(InclusionMode::IncludeKnown)?,
        not_excluded: source.count_contacts(InclusionMode::ExcludeKnown)?,
        excluded: store.count_excluded()?,
        database,
    })
}
