//! Payment Link Domain - Lifecycle of landlord payment-collection links
//!
//! This crate implements the payment link lifecycle: a landlord issues a
//! shareable link for a tenant, the link is settled by a payment processor
//! callback or revoked by the issuer, and its status is derived from stored
//! facts plus the current time.
//!
//! # Lifecycle
//!
//! - A link is created only through [`LifecycleService::create`]
//! - It is mutated only by [`LifecycleService::settle`] and
//!   [`LifecycleService::cancel`], each at most once, first writer wins
//! - It is never deleted; status (`pending`, `paid`, `expired`, `cancelled`)
//!   is computed on every read, never stored, so the store and the display
//!   can never disagree
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_links::{LifecycleService, CreateLinkRequest};
//!
//! let service = LifecycleService::new();
//! let link = service.create(&request, Utc::now())?;
//! let settled = service.settle(&link.id, Utc::now())?;
//! ```

pub mod error;
pub mod link;
pub mod service;
pub mod status;
pub mod store;
pub mod validation;

pub use error::LinkError;
pub use link::{PaymentCategory, PaymentLink};
pub use service::{LifecycleService, LinkSummary, ListFilter};
pub use status::LinkStatus;
pub use store::LinkStore;
pub use validation::{CreateLinkRequest, ValidatedRequest, ValidationError};
