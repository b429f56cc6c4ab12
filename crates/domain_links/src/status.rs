//! Derived link status
//!
//! Status is a pure function of the stored record and the current time. It is
//! computed on every read and never cached, so a link's display can never
//! disagree with the facts in the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::link::PaymentLink;

/// The derived state of a payment link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    /// Awaiting settlement, due date not yet passed
    Pending,
    /// A settlement event was accepted
    Paid,
    /// Due date passed without settlement
    Expired,
    /// Revoked by the issuer before settlement
    Cancelled,
}

impl LinkStatus {
    /// Resolves the current status of a record
    ///
    /// Precedence, first match wins:
    /// 1. cancelled
    /// 2. paid
    /// 3. expired (now strictly past the due date)
    /// 4. pending
    ///
    /// A finalized outcome is permanent truth regardless of elapsed time, so
    /// expiry never overrides a settlement recorded after the due date.
    pub fn resolve(link: &PaymentLink, now: DateTime<Utc>) -> Self {
        if link.cancelled_at.is_some() {
            LinkStatus::Cancelled
        } else if link.settled_at.is_some() {
            LinkStatus::Paid
        } else if now > link.due_at {
            LinkStatus::Expired
        } else {
            LinkStatus::Pending
        }
    }

    /// Parses a status from its wire form, returning None for unknown values
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "pending" => Some(LinkStatus::Pending),
            "paid" => Some(LinkStatus::Paid),
            "expired" => Some(LinkStatus::Expired),
            "cancelled" => Some(LinkStatus::Cancelled),
            _ => None,
        }
    }

    /// Returns the wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Pending => "pending",
            LinkStatus::Paid => "paid",
            LinkStatus::Expired => "expired",
            LinkStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
