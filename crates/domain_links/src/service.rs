//! Lifecycle service - the public contract of the link domain
//!
//! Orchestrates creation, settlement events, issuer cancellation, and the
//! query surface. All failures are typed return values; the service performs
//! no retries, leaving retry policy to the transport layer.

use chrono::{DateTime, Utc};
use core_kernel::{Currency, DateRange, LinkId, Money};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::LinkError;
use crate::link::PaymentLink;
use crate::status::LinkStatus;
use crate::store::LinkStore;
use crate::validation::{self, CreateLinkRequest};

/// Optional criteria for listing links
///
/// Ranges are validated at construction ([`DateRange::new`] rejects inverted
/// bounds), so a filter that exists is a filter the service supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    /// Keep only links whose derived status matches
    pub status: Option<LinkStatus>,
    /// Keep only links created within this range
    pub created: Option<DateRange>,
}

impl ListFilter {
    pub fn with_status(mut self, status: LinkStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_created_range(mut self, range: DateRange) -> Self {
        self.created = Some(range);
        self
    }

    fn matches(&self, link: &PaymentLink, status: LinkStatus) -> bool {
        self.status.map_or(true, |wanted| wanted == status)
            && self.created.map_or(true, |range| range.contains(link.created_at))
    }
}

/// Dashboard aggregates over the whole store, derived on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    /// Sum of the amounts of all paid links
    pub total_collected: Money,
    pub total_links: usize,
    pub pending: usize,
    pub paid: usize,
    pub expired: usize,
    pub cancelled: usize,
    /// Share of finalizable links that ended paid, as a percentage;
    /// None while every link is still pending
    pub collection_rate: Option<Decimal>,
}

/// Orchestrates the payment link lifecycle
///
/// The service is cheap to clone; clones share the same underlying store and
/// may be used concurrently.
#[derive(Debug, Clone, Default)]
pub struct LifecycleService {
    store: LinkStore,
}

impl LifecycleService {
    /// Creates a service backed by an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service backed by an existing store
    pub fn with_store(store: LinkStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &LinkStore {
        &self.store
    }

    /// Validates a creation request and issues a new link
    ///
    /// # Errors
    ///
    /// - `Validation` carrying every field violation; nothing is inserted
    /// - `DuplicateId` if the generated id collides with an existing record,
    ///   which indicates a broken generator
    pub fn create(
        &self,
        request: &CreateLinkRequest,
        now: DateTime<Utc>,
    ) -> Result<PaymentLink, LinkError> {
        let validated = validation::validate(request, now).map_err(LinkError::Validation)?;
        let link = PaymentLink::new(LinkId::generate(), validated, now);

        if let Err(err) = self.store.insert(link.clone()) {
            tracing::error!(id = %link.id, %err, "link insert rejected");
            return Err(err);
        }

        tracing::info!(
            id = %link.id,
            amount = %link.amount,
            category = %link.category,
            due_at = %link.due_at,
            "payment link created"
        );
        Ok(link)
    }

    /// Accepts a settlement event from the payment processor
    ///
    /// Repeat attempts on an already-finalized link are reported as
    /// `AlreadyFinalized` rather than silently accepted: a double settlement
    /// usually means a processor retry bug upstream and must stay visible.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is unknown
    /// - `AlreadyFinalized` if the link was already settled or cancelled
    pub fn settle(
        &self,
        id: &LinkId,
        settled_at: DateTime<Utc>,
    ) -> Result<PaymentLink, LinkError> {
        match self.store.record_settlement(id, settled_at) {
            Ok(link) => {
                tracing::info!(%id, %settled_at, "payment link settled");
                Ok(link)
            }
            Err(err @ LinkError::AlreadyFinalized(_)) => {
                tracing::warn!(%id, "settlement attempt on finalized link");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Revokes a link before settlement
    ///
    /// # Errors
    ///
    /// Same contract as [`LifecycleService::settle`].
    pub fn cancel(
        &self,
        id: &LinkId,
        cancelled_at: DateTime<Utc>,
    ) -> Result<PaymentLink, LinkError> {
        match self.store.record_cancellation(id, cancelled_at) {
            Ok(link) => {
                tracing::info!(%id, %cancelled_at, "payment link cancelled");
                Ok(link)
            }
            Err(err @ LinkError::AlreadyFinalized(_)) => {
                tracing::warn!(%id, "cancellation attempt on finalized link");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns a link together with its status resolved at `now`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown.
    pub fn get(
        &self,
        id: &LinkId,
        now: DateTime<Utc>,
    ) -> Result<(PaymentLink, LinkStatus), LinkError> {
        let link = self.store.get(id).ok_or(LinkError::NotFound(*id))?;
        let status = LinkStatus::resolve(&link, now);
        Ok((link, status))
    }

    /// Lists links with status resolved per record at call time
    ///
    /// Status is never cached; each call re-derives it from the stored facts
    /// and `now`. Results come back newest first.
    pub fn list(
        &self,
        filter: &ListFilter,
        now: DateTime<Utc>,
    ) -> Vec<(PaymentLink, LinkStatus)> {
        let mut links = self.store.list_all();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        links
            .into_iter()
            .map(|link| {
                let status = LinkStatus::resolve(&link, now);
                (link, status)
            })
            .filter(|(link, status)| filter.matches(link, *status))
            .collect()
    }

    /// Computes dashboard aggregates across every stored link
    pub fn summary(&self, now: DateTime<Utc>) -> LinkSummary {
        let mut summary = LinkSummary {
            total_collected: Money::zero(Currency::USD),
            total_links: 0,
            pending: 0,
            paid: 0,
            expired: 0,
            cancelled: 0,
            collection_rate: None,
        };

        for link in self.store.list_all() {
            summary.total_links += 1;
            match LinkStatus::resolve(&link, now) {
                LinkStatus::Pending => summary.pending += 1,
                LinkStatus::Paid => {
                    summary.paid += 1;
                    match summary.total_collected.checked_add(&link.amount) {
                        Ok(total) => summary.total_collected = total,
                        Err(err) => {
                            tracing::warn!(id = %link.id, %err, "amount excluded from total");
                        }
                    }
                }
                LinkStatus::Expired => summary.expired += 1,
                LinkStatus::Cancelled => summary.cancelled += 1,
            }
        }

        let outcomes = summary.paid + summary.expired + summary.cancelled;
        if outcomes > 0 {
            let rate = Decimal::from(summary.paid as u64 * 100) / Decimal::from(outcomes as u64);
            summary.collection_rate = Some(rate.round_dp(1));
        }
        summary
    }
}
