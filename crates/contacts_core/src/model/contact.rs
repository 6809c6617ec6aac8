//! Contact record.
//!
//! # Responsibility
//! - Define the record loaded from the contacts dataset.
//! - Keep external JSON field naming (`pictureUrl`, `wonOscar`, ...) at the
//!   serde boundary.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - Numeric and text ids never compare equal, even when they print alike.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a contact.
///
/// Datasets use either JSON numbers or strings; both are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(i64),
    Text(String),
}

impl ContactId {
    /// Generates a fresh random text id.
    pub fn generate() -> Self {
        Self::Text(Uuid::new_v4().to_string())
    }

    /// Reads an id typed by a user: integers become `Number`, anything else
    /// `Text`.
    pub fn parse_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => f.pad(&number.to_string()),
            Self::Text(text) => f.pad(text),
        }
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for ContactId {
    fn from(value: Uuid) -> Self {
        Self::Text(value.to_string())
    }
}

/// One entry of the contacts dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    /// Display name; sorted with locale-aware collation.
    pub name: String,
    /// Popularity score; higher ranks first.
    pub popularity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub won_oscar: bool,
    #[serde(default)]
    pub won_emmy: bool,
}

impl Contact {
    /// Creates a contact with a generated id and no display extras.
    pub fn new(name: impl Into<String>, popularity: f64) -> Self {
        Self::with_id(ContactId::generate(), name, popularity)
    }

    /// Creates a contact with a caller-provided id.
    ///
    /// Used by dataset import and tests where identity already exists.
    pub fn with_id(id: impl Into<ContactId>, name: impl Into<String>, popularity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            popularity,
            picture_url: None,
            won_oscar: false,
            won_emmy: false,
        }
    }

    /// Returns whether the contact has won any tracked award.
    pub fn has_award(&self) -> bool {
        self.won_oscar || self.won_emmy
    }
}
