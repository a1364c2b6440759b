use uuid::Uuid;

use super::errors::DomainError;
use super::listing::{CatalogFilter, ListingStatus, ListingView, ValidListing};

/// Storage port for listings. Implementations own atomicity: status changes
/// guarded by a PENDING precondition must be applied as a compare-and-swap so
/// concurrent reviewers cannot both win.
pub trait ListingRepository: Send + Sync + 'static {
    fn create(&self, seller_id: Uuid, listing: ValidListing) -> Result<ListingView, DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<ListingView>, DomainError>;

    /// Replace the seller-editable fields, force status back to PENDING and
    /// clear any rejection reason. The image set is replaced wholesale.
    fn resubmit(&self, id: Uuid, listing: ValidListing) -> Result<ListingView, DomainError>;

    fn delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Apply an admin review outcome if and only if the stored status is
    /// still PENDING. Fails with `Conflict(current)` when another reviewer
    /// got there first.
    fn apply_review_if_pending(
        &self,
        id: Uuid,
        next: ListingStatus,
        rejection_reason: Option<String>,
    ) -> Result<ListingView, DomainError>;

    fn list_public(&self, filter: &CatalogFilter) -> Result<Vec<ListingView>, DomainError>;

    fn list_by_seller(
        &self,
        seller_id: Uuid,
        status: Option<ListingStatus>,
    ) -> Result<Vec<ListingView>, DomainError>;

    fn list_pending(&self) -> Result<Vec<ListingView>, DomainError>;
}
