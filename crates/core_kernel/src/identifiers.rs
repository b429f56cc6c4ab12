//! The opaque payment link identifier
//!
//! A link id doubles as the capability to view and pay an invoice, so it must
//! be unguessable. Ids are random UUIDs drawn from the operating system's
//! CSPRNG; if that source is unavailable the process aborts rather than
//! degrading to a weaker generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const LINK_ID_PREFIX: &str = "LNK";

/// Unique identifier for a payment link
///
/// The display form is URL-safe (`LNK-<uuid>`) and encodes nothing about the
/// payee or any other link. Equality and hashing go through the underlying
/// UUID, so the prefix is purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(Uuid);

impl LinkId {
    /// Generates a new random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", LINK_ID_PREFIX, self.0)
    }
}

impl FromStr for LinkId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the prefixed display form and a bare UUID
        let uuid_str = s
            .strip_prefix(LINK_ID_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for LinkId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<LinkId> for Uuid {
    fn from(id: LinkId) -> Uuid {
        id.0
    }
}
