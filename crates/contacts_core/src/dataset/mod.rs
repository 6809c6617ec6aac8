//! Contacts dataset loading.
//!
//! # Responsibility
//! - Parse the static contacts dataset from JSON.
//! - Enforce id uniqueness before any store is seeded from it.
//!
//! # Invariants
//! - Returned datasets keep source order; the store relies on it to split
//!   visible/reserve.
//! - A dataset with duplicate ids is rejected, never silently deduplicated.

use crate::model::contact::{Contact, ContactId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const SAMPLE_CONTACTS_JSON: &str = include_str!("../../data/contacts.json");

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error for dataset read/parse failures.
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    DuplicateId(ContactId),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid contacts dataset: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate contact id in dataset: {id}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a JSON array of contact objects.
///
/// # Errors
/// - `Parse` when the payload is not an array of contacts.
/// - `DuplicateId` when two entries share an id.
pub fn parse_contacts(json: &str) -> DatasetResult<Vec<Contact>> {
    let contacts: Vec<Contact> = serde_json::from_str(json)?;
    ensure_unique_ids(&contacts)?;
    Ok(contacts)
}

/// Reads and parses a contacts dataset file.
pub fn load_contacts(path: impl AsRef<Path>) -> DatasetResult<Vec<Contact>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let contacts = parse_contacts(&raw)?;
    log::info!(
        "event=dataset_load module=dataset status=ok count={}",
        contacts.len()
    );
    Ok(contacts)
}

/// Returns the bundled sample dataset.
///
/// # Errors
/// Only fails if the embedded file is malformed.
pub fn sample_contacts() -> DatasetResult<Vec<Contact>> {
    parse_contacts(SAMPLE_CONTACTS_JSON)
}

fn ensure_unique_ids(contacts: &[Contact]) -> DatasetResult<()> {
    let mut seen = HashSet::with_capacity(contacts.len());
    for contact in contacts {
        if !seen.insert(&contact.id) {
            return Err(DatasetError::DuplicateId(contact.id.clone()));
        }
    }
    Ok(())
}
