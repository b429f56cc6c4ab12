//! Temporal range types for time-based queries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange { start: String, end: String },
}

/// An inclusive UTC time range
///
/// Used by list filters to select links by creation time. Either bound may be
/// open; construction rejects inverted ranges instead of returning silently
/// empty results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the range (inclusive), None means unbounded
    pub start: Option<DateTime<Utc>>,
    /// End of the range (inclusive), None means unbounded
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Creates a range, validating that start does not come after end
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, TemporalError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(TemporalError::InvalidRange {
                    start: s.to_rfc3339(),
                    end: e.to_rfc3339(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates a fully bounded range
    pub fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        Self::new(Some(start), Some(end))
    }

    /// Creates an unbounded range starting at the given time
    pub fn from(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Returns true if this range contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| timestamp >= s)
            && self.end.map_or(true, |e| timestamp <= e)
    }
}
