//! Test data builders
//!
//! Builder patterns for constructing test requests with sensible defaults.
//! Tests specify only the fields they care about; payee details default to
//! realistic fake data.

use chrono::{DateTime, Duration, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use domain_links::CreateLinkRequest;

/// Builder for link creation requests
pub struct CreateLinkRequestBuilder {
    payee_name: String,
    payee_email: String,
    amount: String,
    due_at: Option<DateTime<Utc>>,
    property_address: String,
    category: String,
}

impl Default for CreateLinkRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateLinkRequestBuilder {
    /// Creates a builder with valid defaults: a fake payee, $1000.00 rent
    /// due a week from now
    pub fn new() -> Self {
        Self {
            payee_name: Name().fake(),
            payee_email: SafeEmail().fake(),
            amount: "1000.00".to_string(),
            due_at: Some(Utc::now() + Duration::days(7)),
            property_address: "123 Main St, Springfield".to_string(),
            category: "rent".to_string(),
        }
    }

    /// Sets the payee name
    pub fn with_payee_name(mut self, name: impl Into<String>) -> Self {
        self.payee_name = name.into();
        self
    }

    /// Sets the payee email
    pub fn with_payee_email(mut self, email: impl Into<String>) -> Self {
        self.payee_email = email.into();
        self
    }

    /// Sets the decimal amount string
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Sets the due date
    pub fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the due date relative to now
    pub fn due_in_days(mut self, days: i64) -> Self {
        self.due_at = Some(Utc::now() + Duration::days(days));
        self
    }

    /// Clears the due date
    pub fn without_due_date(mut self) -> Self {
        self.due_at = None;
        self
    }

    /// Sets the property address
    pub fn with_property_address(mut self, address: impl Into<String>) -> Self {
        self.property_address = address.into();
        self
    }

    /// Sets the category wire value
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds the domain request
    pub fn build(self) -> CreateLinkRequest {
        CreateLinkRequest {
            payee_name: self.payee_name,
            payee_email: self.payee_email,
            amount: self.amount,
            due_at: self.due_at,
            property_address: self.property_address,
            category: self.category,
        }
    }

    /// Builds the JSON body the HTTP API expects
    pub fn build_json(self) -> Value {
        json!({
            "payee_name": self.payee_name,
            "payee_email": self.payee_email,
            "amount": self.amount,
            "due_date": self.due_at,
            "property_address": self.property_address,
            "category": self.category,
        })
    }
}
