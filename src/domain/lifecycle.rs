//! Listing state machine: PENDING → APPROVED / REJECTED, with every edit
//! routing back through PENDING.
//!
//! These functions compute the next state from the *stored* state; they never
//! assume the caller is the only writer. Storage applies the result with a
//! compare-and-swap so a concurrent admin loses with a conflict instead of
//! overwriting.

use super::listing::ListingStatus;

/// Outcome of an admin review attempt against a stale precondition: the
/// listing was no longer PENDING, and this is what it was instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyHandled(pub ListingStatus);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectError {
    AlreadyHandled(ListingStatus),
    MissingReason,
}

/// Status every new submission starts in, regardless of caller input.
pub fn initial_status() -> ListingStatus {
    ListingStatus::Pending
}

/// Admin approval. Only a PENDING listing can be approved.
pub fn approve(current: ListingStatus) -> Result<ListingStatus, AlreadyHandled> {
    match current {
        ListingStatus::Pending => Ok(ListingStatus::Approved),
        other => Err(AlreadyHandled(other)),
    }
}

/// Admin rejection. Requires a PENDING listing and a non-empty reason; the
/// trimmed reason is what gets stored.
pub fn reject(current: ListingStatus, reason: &str) -> Result<(ListingStatus, String), RejectError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(RejectError::MissingReason);
    }
    match current {
        ListingStatus::Pending => Ok((ListingStatus::Rejected, reason.to_string())),
        other => Err(RejectError::AlreadyHandled(other)),
    }
}

/// Status after a seller edit-and-resubmit. Legal from every status and
/// always lands back in PENDING with any rejection reason cleared.
pub fn resubmitted_status() -> ListingStatus {
    ListingStatus::Pending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_submissions_start_pending() {
        assert_eq!(initial_status(), ListingStatus::Pending);
    }

    #[test]
    fn only_pending_can_be_approved() {
        assert_eq!(approve(ListingStatus::Pending), Ok(ListingStatus::Approved));
        assert_eq!(
            approve(ListingStatus::Approved),
            Err(AlreadyHandled(ListingStatus::Approved))
        );
        assert_eq!(
            approve(ListingStatus::Rejected),
            Err(AlreadyHandled(ListingStatus::Rejected))
        );
    }

    #[test]
    fn only_pending_can_be_rejected() {
        assert_eq!(
            reject(ListingStatus::Pending, "low quality images"),
            Ok((ListingStatus::Rejected, "low quality images".to_string()))
        );
        assert_eq!(
            reject(ListingStatus::Approved, "reason"),
            Err(RejectError::AlreadyHandled(ListingStatus::Approved))
        );
        assert_eq!(
            reject(ListingStatus::Rejected, "reason"),
            Err(RejectError::AlreadyHandled(ListingStatus::Rejected))
        );
    }

    #[test]
    fn reject_requires_a_non_empty_reason() {
        assert_eq!(
            reject(ListingStatus::Pending, ""),
            Err(RejectError::MissingReason)
        );
        assert_eq!(
            reject(ListingStatus::Pending, "   "),
            Err(RejectError::MissingReason)
        );
    }

    #[test]
    fn rejection_reason_is_trimmed() {
        assert_eq!(
            reject(ListingStatus::Pending, "  blurry photos  "),
            Ok((ListingStatus::Rejected, "blurry photos".to_string()))
        );
    }

    #[test]
    fn edits_always_route_back_through_pending() {
        assert_eq!(resubmitted_status(), ListingStatus::Pending);
    }
}
