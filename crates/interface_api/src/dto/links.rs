//! Link DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_links::{CreateLinkRequest, LinkStatus, LinkSummary, PaymentLink};

/// Inbound creation request, mirroring the issuing form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkDto {
    pub payee_name: String,
    pub payee_email: String,
    /// Decimal amount string, e.g. "1000.00"
    pub amount: String,
    pub due_date: Option<DateTime<Utc>>,
    pub property_address: String,
    pub category: String,
}

impl CreateLinkDto {
    /// Converts the wire form into the domain request
    pub fn into_domain(self) -> CreateLinkRequest {
        CreateLinkRequest {
            payee_name: self.payee_name,
            payee_email: self.payee_email,
            amount: self.amount,
            due_at: self.due_date,
            property_address: self.property_address,
            category: self.category,
        }
    }
}

/// Inbound settlement event from the payment processor
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementEventDto {
    pub link_id: String,
    pub settled_at: DateTime<Utc>,
}

/// Outbound link representation for display
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub id: String,
    /// Shareable URL: the configured base path plus the opaque id
    pub url: String,
    pub payee_name: String,
    /// Decimal amount string, e.g. "1000.00"
    pub amount: String,
    pub due_date: DateTime<Utc>,
    pub status: LinkStatus,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: PaymentLink, status: LinkStatus, url: String) -> Self {
        Self {
            id: link.id.to_string(),
            url,
            payee_name: link.payee_name,
            amount: link.amount.to_decimal_string(),
            due_date: link.due_at,
            status,
            created_at: link.created_at,
        }
    }
}

/// Outbound list of links
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
    pub total: usize,
}

/// Optional list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

/// Outbound dashboard aggregates
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Decimal amount string of everything collected
    pub total_collected: String,
    pub total_links: usize,
    pub pending: usize,
    pub paid: usize,
    pub expired: usize,
    pub cancelled: usize,
    /// Percentage string like "66.7", absent while nothing has finalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_rate: Option<String>,
}

impl From<LinkSummary> for SummaryResponse {
    fn from(summary: LinkSummary) -> Self {
        Self {
            total_collected: summary.total_collected.to_decimal_string(),
            total_links: summary.total_links,
            pending: summary.pending,
            paid: summary.paid,
            expired: summary.expired,
            cancelled: summary.cancelled,
            collection_rate: summary.collection_rate.map(|r| format!("{r:.1}")),
        }
    }
}
