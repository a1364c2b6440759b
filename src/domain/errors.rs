use thiserror::Error;

use super::listing::ListingStatus;
use super::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Listing not found")]
    NotFound,
    #[error("Caller does not own this listing")]
    NotOwner,
    #[error("Listing already handled (current status {0})")]
    Conflict(ListingStatus),
    #[error("A rejection reason is required")]
    MissingReason,
    #[error("Validation failed")]
    Validation(ValidationErrors),
    #[error("Internal error: {0}")]
    Internal(String),
}
