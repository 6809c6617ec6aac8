//! In-memory contact store.
//!
//! # Responsibility
//! - Hold the visible/reserve partition seeded from a dataset.
//! - Provide the only sanctioned mutation paths and notify observers.
//!
//! # Invariants
//! - A contact is in at most one of `visible`/`reserve`.
//! - `reserve` never grows after initialization.

pub mod contact_store;
pub mod event;
