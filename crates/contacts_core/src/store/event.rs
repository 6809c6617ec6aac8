//! Store change notifications.

use crate::model::contact::ContactId;

/// User-facing notice for an exhausted reserve pool.
pub const NO_MORE_CONTACTS_NOTICE: &str = "No more contacts to add!";

/// Event delivered to store listeners after an operation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A reserve contact was appended to the visible list.
    ContactAdded { id: ContactId },
    /// Add was requested but the reserve pool is empty; state unchanged.
    ReserveExhausted,
    SortedByName,
    SortedByPopularity,
    /// Delete was requested; `removed` is zero when no visible contact matched.
    ContactDeleted { id: ContactId, removed: usize },
}

impl StoreEvent {
    /// Returns the user-visible notice for reported conditions, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::ReserveExhausted => Some(NO_MORE_CONTACTS_NOTICE),
            _ => None,
        }
    }
}

/// Listener callback registered through `ContactStore::subscribe`.
pub type StoreListener = Box<dyn FnMut(&StoreEvent)>;
