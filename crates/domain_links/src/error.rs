//! Link domain errors

use core_kernel::LinkId;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur in the link domain
///
/// Every operation returns its failure as a typed value; nothing is thrown
/// out of band and nothing is retried inside the domain. Retry policy belongs
/// to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The creation request violated one or more field rules
    #[error("Creation request failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// No link exists with the given id
    #[error("Link not found: {0}")]
    NotFound(LinkId),

    /// The link has already been settled or cancelled
    #[error("Link already finalized: {0}")]
    AlreadyFinalized(LinkId),

    /// An insert collided with an existing id
    ///
    /// This should never happen given a random id generator; if it surfaces,
    /// the generator is broken and the caller should treat it as fatal.
    #[error("Duplicate link id: {0}")]
    DuplicateId(LinkId),
}

impl From<Vec<ValidationError>> for LinkError {
    fn from(errors: Vec<ValidationError>) -> Self {
        LinkError::Validation(errors)
    }
}
