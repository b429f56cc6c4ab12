//! Creation request validation
//!
//! Every field rule is evaluated, never short-circuited, so the caller
//! receives all violations at once and can correct the whole form in one
//! round trip. Validation is a pure function of the request and the current
//! time; it touches no shared state.

use chrono::{DateTime, Utc};
use core_kernel::{Currency, Money};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

use crate::link::PaymentCategory;

/// Minimum payee name length after trimming
const MIN_NAME_CHARS: usize = 2;
/// Minimum property address length after trimming
const MIN_ADDRESS_CHARS: usize = 5;

/// An unvalidated link creation request, mirroring the issuing form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    pub payee_name: String,
    pub payee_email: String,
    /// Decimal amount string, e.g. "1000.00"
    pub amount: String,
    pub due_at: Option<DateTime<Utc>>,
    pub property_address: String,
    /// Wire form of the payment category
    pub category: String,
}

/// A creation request that passed all field rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub payee_name: String,
    pub payee_email: String,
    pub amount: Money,
    pub due_at: DateTime<Utc>,
    pub property_address: String,
    pub category: PaymentCategory,
}

/// A single field rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Payee name must be at least 2 characters")]
    PayeeNameTooShort,

    #[error("Payee email is not a valid address")]
    PayeeEmailInvalid,

    #[error("Amount must be a decimal number with at most two fraction digits")]
    AmountMalformed,

    #[error("Amount must be greater than zero")]
    AmountNotPositive,

    #[error("Due date is required")]
    DueDateMissing,

    #[error("Due date must be in the future")]
    DueDateNotInFuture,

    #[error("Property address must be at least 5 characters")]
    PropertyAddressTooShort,

    #[error("Unknown payment category: {0}")]
    UnknownCategory(String),
}

impl ValidationError {
    /// Returns the form field this violation refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::PayeeNameTooShort => "payee_name",
            ValidationError::PayeeEmailInvalid => "payee_email",
            ValidationError::AmountMalformed | ValidationError::AmountNotPositive => "amount",
            ValidationError::DueDateMissing | ValidationError::DueDateNotInFuture => "due_date",
            ValidationError::PropertyAddressTooShort => "property_address",
            ValidationError::UnknownCategory(_) => "category",
        }
    }
}

/// Validates a creation request against all field rules
///
/// # Arguments
///
/// * `request` - The raw request as received at the boundary
/// * `now` - The current time; the due date must be strictly later
///
/// # Returns
///
/// The typed, validated request, or every rule violation found
pub fn validate(
    request: &CreateLinkRequest,
    now: DateTime<Utc>,
) -> Result<ValidatedRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let payee_name = request.payee_name.trim();
    if payee_name.chars().count() < MIN_NAME_CHARS {
        errors.push(ValidationError::PayeeNameTooShort);
    }

    let payee_email = request.payee_email.trim();
    if !payee_email.validate_email() {
        errors.push(ValidationError::PayeeEmailInvalid);
    }

    // Conversion to minor units happens here, at the boundary, so nothing
    // downstream ever handles a floating amount
    let amount = match Money::parse(&request.amount, Currency::USD) {
        Ok(amount) if amount.is_positive() => Some(amount),
        Ok(_) => {
            errors.push(ValidationError::AmountNotPositive);
            None
        }
        Err(_) => {
            errors.push(ValidationError::AmountMalformed);
            None
        }
    };

    let due_at = match request.due_at {
        Some(due_at) if due_at > now => Some(due_at),
        Some(_) => {
            errors.push(ValidationError::DueDateNotInFuture);
            None
        }
        None => {
            errors.push(ValidationError::DueDateMissing);
            None
        }
    };

    let property_address = request.property_address.trim();
    if property_address.chars().count() < MIN_ADDRESS_CHARS {
        errors.push(ValidationError::PropertyAddressTooShort);
    }

    let category = match PaymentCategory::parse(&request.category) {
        Some(category) => Some(category),
        None => {
            errors.push(ValidationError::UnknownCategory(
                request.category.trim().to_string(),
            ));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All four unwraps are guarded by the empty error list
    Ok(ValidatedRequest {
        payee_name: payee_name.to_string(),
        payee_email: payee_email.to_string(),
        amount: amount.expect("amount validated"),
        due_at: due_at.expect("due date validated"),
        property_address: property_address.to_string(),
        category: category.expect("category validated"),
    })
}
