//! Contact store state and actions.
//!
//! # Responsibility
//! - Split the dataset into visible and reserve lists.
//! - Implement add-random, sort-by-name, sort-by-popularity and delete.
//! - Notify listeners and bump the revision counter after state changes.
//!
//! # Invariants
//! - Every action is synchronous; listeners run only after the state
//!   change is complete.
//! - Sorts are stable and touch only `visible`.
//! - Deleted contacts are dropped, never returned to `reserve`.
//! - Exhausted reserve is a reported condition, not an error.

use crate::collation;
use crate::model::contact::{Contact, ContactId};
use crate::store::event::{StoreEvent, StoreListener, NO_MORE_CONTACTS_NOTICE};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// Number of dataset entries seeded into the visible list.
pub const INITIAL_VISIBLE_COUNT: usize = 5;

/// Result of `ContactStore::add_random_contact`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum AddOutcome {
    /// The drawn contact, now last in the visible list.
    Added(Contact),
    /// Reserve pool is empty; nothing changed.
    ReserveExhausted,
}

impl AddOutcome {
    /// Returns the user-visible notice for a no-op add, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Added(_) => None,
            Self::ReserveExhausted => Some(NO_MORE_CONTACTS_NOTICE),
        }
    }
}

/// In-memory contact store owned by one application session.
///
/// The random source is injected so callers can make draws reproducible.
pub struct ContactStore<R: Rng = StdRng> {
    visible: Vec<Contact>,
    reserve: Vec<Contact>,
    rng: R,
    listeners: Vec<StoreListener>,
    revision: u64,
}

impl ContactStore<StdRng> {
    /// Creates a store seeded from `dataset` with an entropy-seeded RNG.
    pub fn new(dataset: Vec<Contact>) -> Self {
        Self::with_rng(dataset, StdRng::from_entropy())
    }

    /// Creates a store whose random draws are determined by `seed`.
    pub fn with_seed(dataset: Vec<Contact>, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContactStore<R> {
    /// Creates a store seeded from `dataset` using the provided RNG.
    ///
    /// The first `INITIAL_VISIBLE_COUNT` entries become visible; the rest
    /// form the reserve pool. Both keep dataset order.
    pub fn with_rng(dataset: Vec<Contact>, rng: R) -> Self {
        let mut visible = dataset;
        let reserve = if visible.len() > INITIAL_VISIBLE_COUNT {
            visible.split_off(INITIAL_VISIBLE_COUNT)
        } else {
            Vec::new()
        };

        info!(
            "event=store_init module=store status=ok visible={} reserve={}",
            visible.len(),
            reserve.len()
        );

        Self {
            visible,
            reserve,
            rng,
            listeners: Vec::new(),
            revision: 0,
        }
    }

    /// Contacts currently displayed, in display order.
    pub fn visible(&self) -> &[Contact] {
        &self.visible
    }

    /// Contacts not yet displayed, in dataset order.
    pub fn reserve(&self) -> &[Contact] {
        &self.reserve
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    pub fn is_reserve_empty(&self) -> bool {
        self.reserve.is_empty()
    }

    /// Looks up a visible contact by id.
    pub fn find_visible(&self, id: &ContactId) -> Option<&Contact> {
        self.visible.iter().find(|contact| &contact.id == id)
    }

    /// Monotonic counter bumped by every state-changing action.
    ///
    /// Renderers can poll it instead of subscribing.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener called after every action.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Moves one uniformly drawn reserve contact to the end of `visible`.
    ///
    /// Returns `AddOutcome::ReserveExhausted` without touching state when
    /// the reserve pool is empty.
    pub fn add_random_contact(&mut self) -> AddOutcome {
        if self.reserve.is_empty() {
            warn!(
                "event=reserve_exhausted module=store status=noop visible={}",
                self.visible.len()
            );
            self.emit(StoreEvent::ReserveExhausted);
            return AddOutcome::ReserveExhausted;
        }

        let index = self.rng.gen_range(0..self.reserve.len());
        let contact = self.reserve.remove(index);
        self.visible.push(contact.clone());
        self.revision += 1;

        info!(
            "event=contact_added module=store status=ok visible={} reserve={}",
            self.visible.len(),
            self.reserve.len()
        );
        self.emit(StoreEvent::ContactAdded {
            id: contact.id.clone(),
        });
        AddOutcome::Added(contact)
    }

    /// Stable ascending sort of `visible` by locale-aware name order.
    pub fn sort_by_name(&mut self) {
        collation::sort_by_name(&mut self.visible, |contact| contact.name.as_str());
        self.revision += 1;

        info!(
            "event=contacts_sorted module=store status=ok key=name count={}",
            self.visible.len()
        );
        self.emit(StoreEvent::SortedByName);
    }

    /// Stable descending sort of `visible` by popularity.
    pub fn sort_by_popularity(&mut self) {
        self.visible
            .sort_by(|left, right| compare_popularity_desc(left.popularity, right.popularity));
        self.revision += 1;

        info!(
            "event=contacts_sorted module=store status=ok key=popularity count={}",
            self.visible.len()
        );
        self.emit(StoreEvent::SortedByPopularity);
    }

    /// Removes every visible contact with `id`.
    ///
    /// Returns the number of removed contacts; zero is not an error.
    pub fn delete_contact(&mut self, id: &ContactId) -> usize {
        let before = self.visible.len();
        self.visible.retain(|contact| &contact.id != id);
        let removed = before - self.visible.len();
        if removed > 0 {
            self.revision += 1;
        }

        info!(
            "event=contact_deleted module=store status={} removed={} visible={}",
            if removed > 0 { "ok" } else { "noop" },
            removed,
            self.visible.len()
        );
        self.emit(StoreEvent::ContactDeleted {
            id: id.clone(),
            removed,
        });
        removed
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl<R: Rng> Debug for ContactStore<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("visible", &self.visible)
            .field("reserve", &self.reserve)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

// NaN scores sort after every number so the ordering stays total.
fn compare_popularity_desc(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
    }
}
