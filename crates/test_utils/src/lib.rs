//! Shared test utilities for the rentpay test suite

pub mod builders;

pub use builders::CreateLinkRequestBuilder;
