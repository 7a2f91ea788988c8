use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

use super::ids::ContactId;

/// One row of the contact/phone/email join. A contact with several phones and
/// several emails appears once per (phone, email) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub contact_id: ContactId,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactRow {
    pub fn new(contact_id: i64) -> Self {
        Self {
            contact_id: ContactId::new(contact_id),
            last_name: None,
            first_name: None,
            phone: None,
            email: None,
        }
    }

    pub fn named(mut self, last_name: &str, first_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// `"{last}, {first}"`, with a missing part rendered as an empty string.
    pub fn full_name(&self) -> String {
        format!(
            "{}, {}",
            self.last_name.as_deref().unwrap_or_default(),
            self.first_name.as_deref().unwrap_or_default()
        )
    }
}

/// All rows of one contact folded together.
///
/// `None` inside `phones`/`emails` records that at least one joined row had no
/// value for that field. It is kept so callers can tell "no phone" apart from
/// "has a phone", and is skipped when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    #[serde(rename = "id")]
    pub contact_id: ContactId,
    pub full_name: String,
    #[serde(serialize_with = "present_only")]
    pub phones: BTreeSet<Option<String>>,
    #[serde(serialize_with = "present_only")]
    pub emails: BTreeSet<Option<String>>,
}

impl ContactRecord {
    /// Starts a record from the first row seen for a contact.
    pub fn from_row(row: &ContactRow) -> Self {
        Self {
            contact_id: row.contact_id,
            full_name: row.full_name(),
            phones: BTreeSet::new(),
            emails: BTreeSet::new(),
        }
    }

    pub fn absorb(&mut self, row: ContactRow) {
        self.phones.insert(row.phone);
        self.emails.insert(row.email);
    }

    pub fn present_phones(&self) -> impl Iterator<Item = &str> {
        self.phones.iter().flatten().map(String::as_str)
    }

    pub fn present_emails(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().flatten().map(String::as_str)
    }

    pub fn has_missing_phone(&self) -> bool {
        self.phones.contains(&None)
    }

    pub fn has_missing_email(&self) -> bool {
        self.emails.contains(&None)
    }
}

fn present_only<S: Serializer>(values: &BTreeSet<Option<String>>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().flatten())
}
