//! Money stored as integer minor units
//!
//! Amounts are parsed from decimal strings with rust_decimal and stored as an
//! integer count of the currency's smallest unit (e.g. cents). Floating point
//! never enters the picture, so settlement reconciliation cannot drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount {0} has more fraction digits than the currency allows")]
    PrecisionLoss(String),

    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount held as integer minor units with its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            minor_units: 0,
            currency,
        }
    }

    /// Parses a decimal string like "1000.00" into minor units
    ///
    /// The string must be a plain decimal number with at most the currency's
    /// number of fraction digits. Anything that would lose precision during
    /// conversion is rejected rather than truncated.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` for strings that are not a plain decimal number
    /// - `PrecisionLoss` when there are more fraction digits than the
    ///   currency supports
    /// - `Overflow` when the value does not fit in 64-bit minor units
    pub fn parse(input: &str, currency: Currency) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::InvalidAmount(trimmed.to_string()))?;

        if amount.is_sign_negative() {
            return Err(MoneyError::InvalidAmount(trimmed.to_string()));
        }

        let places = currency.decimal_places();
        // normalize() strips trailing zeros, so "1.50" and "1.5000" both
        // report their true scale
        if amount.normalize().scale() > places {
            return Err(MoneyError::PrecisionLoss(trimmed.to_string()));
        }

        let scaled = amount
            .checked_mul(Decimal::from(10_i64.pow(places)))
            .ok_or(MoneyError::Overflow)?;
        let minor_units = scaled.to_i64().ok_or(MoneyError::Overflow)?;

        Ok(Self {
            minor_units,
            currency,
        })
    }

    /// Returns the amount in minor units
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }

    /// Returns the amount as a Decimal in major units
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.decimal_places())
    }

    /// Formats the amount as a plain decimal string, e.g. "1000.00"
    pub fn to_decimal_string(&self) -> String {
        format!(
            "{:.dp$}",
            self.to_decimal(),
            dp = self.currency.decimal_places() as usize
        )
    }

    /// Checked addition that returns an error on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        let minor_units = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            minor_units,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.to_decimal_string())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}
