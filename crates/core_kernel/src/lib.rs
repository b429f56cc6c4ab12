//! Core Kernel - Foundational types for the rentpay system
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Money amounts stored as integer minor units with precise decimal parsing
//! - Temporal range types for time-based queries
//! - The opaque, collision-resistant link identifier

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::LinkId;
pub use money::{Currency, Money, MoneyError};
pub use temporal::{DateRange, TemporalError};
