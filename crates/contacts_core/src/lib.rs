//! Core domain logic for the contacts demo.
//! This crate owns the contact store and its invariants; shells only read
//! state and invoke store actions.

pub mod collation;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod store;

pub use collation::compare_names;
pub use dataset::{load_contacts, parse_contacts, sample_contacts, DatasetError, DatasetResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId};
pub use store::contact_store::{AddOutcome, ContactStore, INITIAL_VISIBLE_COUNT};
pub use store::event::{StoreEvent, StoreListener, NO_MORE_CONTACTS_NOTICE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
