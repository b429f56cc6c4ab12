//! The payment link record

use chrono::{DateTime, Utc};
use core_kernel::{LinkId, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::ValidatedRequest;

/// Closed set of payment categories a link can be issued for
///
/// Unknown categories are a validation error at the boundary, never a
/// silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentCategory {
    Rent,
    Deposit,
    Utilities,
    Maintenance,
}

impl PaymentCategory {
    /// Parses a category from its wire form, returning None for unknown values
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "rent" => Some(PaymentCategory::Rent),
            "deposit" => Some(PaymentCategory::Deposit),
            "utilities" => Some(PaymentCategory::Utilities),
            "maintenance" => Some(PaymentCategory::Maintenance),
            _ => None,
        }
    }

    /// Returns the wire form of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentCategory::Rent => "rent",
            PaymentCategory::Deposit => "deposit",
            PaymentCategory::Utilities => "utilities",
            PaymentCategory::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment collection link issued for a tenant
///
/// The record stores facts only. Status is derived from these facts and the
/// current time by [`crate::status::LinkStatus::resolve`]; it is never stored
/// here.
///
/// # Invariants
///
/// - `id`, `created_at`, and the payee fields are immutable after creation
/// - `settled_at` and `cancelled_at` are mutually exclusive and write-once;
///   only [`crate::store::LinkStore`] sets them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Unique opaque identifier, assigned at creation
    pub id: LinkId,
    /// Tenant name
    pub payee_name: String,
    /// Tenant email
    pub payee_email: String,
    /// Amount requested, in minor units
    pub amount: Money,
    /// When payment is due; strictly in the future at creation time
    pub due_at: DateTime<Utc>,
    /// Free-text descriptor of the subject property
    pub property_address: String,
    /// Payment category
    pub category: PaymentCategory,
    /// When the link was created
    pub created_at: DateTime<Utc>,
    /// Set exactly once when a settlement event is accepted
    pub settled_at: Option<DateTime<Utc>>,
    /// Set exactly once when the issuer revokes the link before settlement
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl PaymentLink {
    /// Builds a new record from a validated request
    pub fn new(id: LinkId, request: ValidatedRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            payee_name: request.payee_name,
            payee_email: request.payee_email,
            amount: request.amount,
            due_at: request.due_at,
            property_address: request.property_address,
            category: request.category,
            created_at,
            settled_at: None,
            cancelled_at: None,
        }
    }

    /// Returns true if the link has reached a terminal outcome
    pub fn is_finalized(&self) -> bool {
        self.settled_at.is_some() || self.cancelled_at.is_some()
    }
}
