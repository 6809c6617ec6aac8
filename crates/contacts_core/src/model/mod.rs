//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by store and shell.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Contacts are immutable values once loaded; the store only moves or
//!   removes them.

pub mod contact;
