//! The link store - single source of truth for payment link records
//!
//! The store exclusively owns every record. Callers receive clones, never
//! references into the map, so state changes are observable only through the
//! update operations here. One store-wide lock serializes mutation; both
//! finalization paths check-and-set under the same write guard, so "first
//! write wins" holds under concurrent settle/cancel races and readers never
//! observe a torn write.

use chrono::{DateTime, Utc};
use core_kernel::LinkId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::LinkError;
use crate::link::PaymentLink;

/// Durable in-process map of link id to payment link record
///
/// Cloning the store is cheap and yields a handle to the same underlying
/// state, so it can be shared across concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    links: Arc<RwLock<HashMap<LinkId, PaymentLink>>>,
}

impl LinkStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<LinkId, PaymentLink>> {
        self.links.read().expect("link store lock poisoned")
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<LinkId, PaymentLink>> {
        self.links.write().expect("link store lock poisoned")
    }

    /// Inserts a newly created record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if a record with this id already exists. With a
    /// random generator this must never happen, but the contract rejects the
    /// insert rather than overwrite.
    pub fn insert(&self, link: PaymentLink) -> Result<(), LinkError> {
        match self.write_guard().entry(link.id) {
            Entry::Occupied(_) => Err(LinkError::DuplicateId(link.id)),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(())
            }
        }
    }

    /// Returns a copy of the record with the given id
    pub fn get(&self, id: &LinkId) -> Option<PaymentLink> {
        self.read_guard().get(id).cloned()
    }

    /// Returns copies of all records, in unspecified order
    pub fn list_all(&self) -> Vec<PaymentLink> {
        self.read_guard().values().cloned().collect()
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Returns true if no records are stored
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Records a settlement on the link, write-once
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is absent
    /// - `AlreadyFinalized` if the link was already settled or cancelled;
    ///   the record is left unchanged
    pub fn record_settlement(
        &self,
        id: &LinkId,
        settled_at: DateTime<Utc>,
    ) -> Result<PaymentLink, LinkError> {
        let mut links = self.write_guard();
        let link = links.get_mut(id).ok_or(LinkError::NotFound(*id))?;
        if link.is_finalized() {
            return Err(LinkError::AlreadyFinalized(*id));
        }
        link.settled_at = Some(settled_at);
        Ok(link.clone())
    }

    /// Records an issuer cancellation on the link, write-once
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is absent
    /// - `AlreadyFinalized` if the link was already settled or cancelled;
    ///   the record is left unchanged
    pub fn record_cancellation(
        &self,
        id: &LinkId,
        cancelled_at: DateTime<Utc>,
    ) -> Result<PaymentLink, LinkError> {
        let mut links = self.write_guard();
        let link = links.get_mut(id).ok_or(LinkError::NotFound(*id))?;
        if link.is_finalized() {
            return Err(LinkError::AlreadyFinalized(*id));
        }
        link.cancelled_at = Some(cancelled_at);
        Ok(link.clone())
    }
}
