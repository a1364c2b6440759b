use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::lifecycle::{self, RejectError};
use crate::domain::listing::{CatalogFilter, ListingDraft, ListingStatus, ListingView};
use crate::domain::ports::ListingRepository;
use crate::domain::validation;

/// Orchestrates the validation gate, the lifecycle rules and the storage
/// port. Holds no state of its own; safe to share across request handlers.
pub struct ListingService<R> {
    repo: R,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Seller submits a new listing. Status is forced to PENDING no matter
    /// what the caller sends; there is simply no status input to honor.
    pub fn create_listing(
        &self,
        seller_id: Uuid,
        draft: ListingDraft,
    ) -> Result<ListingView, DomainError> {
        let listing = validation::validate_draft(draft).map_err(DomainError::Validation)?;
        self.repo.create(seller_id, listing)
    }

    /// Fetch one listing. Approved listings are public; anything else is
    /// visible only to the owning seller and reads as absent to everyone
    /// else.
    pub fn get_listing(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<ListingView, DomainError> {
        let listing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        if listing.status == ListingStatus::Approved || viewer == Some(listing.seller_id) {
            Ok(listing)
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// Seller edits and resubmits. Runs the full validation gate again and
    /// routes the listing back through PENDING, clearing any rejection
    /// reason.
    pub fn update_listing(
        &self,
        id: Uuid,
        seller_id: Uuid,
        draft: ListingDraft,
    ) -> Result<ListingView, DomainError> {
        let existing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        if existing.seller_id != seller_id {
            return Err(DomainError::NotOwner);
        }
        let listing = validation::validate_draft(draft).map_err(DomainError::Validation)?;
        self.repo.resubmit(id, listing)
    }

    /// Seller deletes their own listing; legal from any status.
    pub fn delete_listing(&self, id: Uuid, seller_id: Uuid) -> Result<(), DomainError> {
        let existing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        if existing.seller_id != seller_id {
            return Err(DomainError::NotOwner);
        }
        self.repo.delete(id)
    }

    /// Admin removal; no ownership check.
    pub fn remove_listing(&self, id: Uuid) -> Result<(), DomainError> {
        let existing = self.repo.find_by_id(id)?;
        if existing.is_none() {
            return Err(DomainError::NotFound);
        }
        self.repo.delete(id)
    }

    /// Admin approval. The lifecycle check against the freshly read status
    /// catches a stale review queue early; the repository re-checks with a
    /// compare-and-swap so a concurrent reviewer still cannot slip through.
    pub fn approve_listing(&self, id: Uuid) -> Result<ListingView, DomainError> {
        let existing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        let next = lifecycle::approve(existing.status)
            .map_err(|conflict| DomainError::Conflict(conflict.0))?;
        self.repo.apply_review_if_pending(id, next, None)
    }

    /// Admin rejection with a mandatory, non-empty reason.
    pub fn reject_listing(&self, id: Uuid, reason: &str) -> Result<ListingView, DomainError> {
        let existing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        let (next, reason) = lifecycle::reject(existing.status, reason).map_err(|e| match e {
            RejectError::MissingReason => DomainError::MissingReason,
            RejectError::AlreadyHandled(current) => DomainError::Conflict(current),
        })?;
        self.repo.apply_review_if_pending(id, next, Some(reason))
    }

    /// Buyer-facing catalog: approved listings only.
    pub fn list_public_listings(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<ListingView>, DomainError> {
        self.repo.list_public(filter)
    }

    /// Seller dashboard: own listings, optionally narrowed to one status.
    pub fn list_seller_listings(
        &self,
        seller_id: Uuid,
        status: Option<ListingStatus>,
    ) -> Result<Vec<ListingView>, DomainError> {
        self.repo.list_by_seller(seller_id, status)
    }

    /// Admin review queue.
    pub fn list_pending_listings(&self) -> Result<Vec<ListingView>, DomainError> {
        self.repo.list_pending()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;
    use chrono::Utc;

    use super::*;
    use crate::domain::listing::{Category, Condition, ValidListing};

    /// Hash-map listing store with the same compare-and-swap contract as the
    /// real repository.
    #[derive(Default)]
    struct InMemoryRepo {
        listings: Mutex<HashMap<Uuid, ListingView>>,
    }

    impl ListingRepository for InMemoryRepo {
        fn create(
            &self,
            seller_id: Uuid,
            listing: ValidListing,
        ) -> Result<ListingView, DomainError> {
            let now = Utc::now();
            let view = ListingView {
                id: Uuid::new_v4(),
                seller_id,
                title: listing.title,
                description: listing.description,
                category: listing.category,
                condition: listing.condition,
                original_price: listing.original_price,
                age_in_months: listing.age_in_months,
                listed_price: listing.listed_price,
                images: listing.images,
                status: lifecycle::initial_status(),
                rejection_reason: None,
                created_at: now,
                updated_at: now,
            };
            let mut listings = self.listings.lock().expect("lock poisoned");
            listings.insert(view.id, view.clone());
            Ok(view)
        }

        fn find_by_id(&self, id: Uuid) -> Result<Option<ListingView>, DomainError> {
            let listings = self.listings.lock().expect("lock poisoned");
            Ok(listings.get(&id).cloned())
        }

        fn resubmit(&self, id: Uuid, listing: ValidListing) -> Result<ListingView, DomainError> {
            let mut listings = self.listings.lock().expect("lock poisoned");
            let view = listings.get_mut(&id).ok_or(DomainError::NotFound)?;
            view.title = listing.title;
            view.description = listing.description;
            view.category = listing.category;
            view.condition = listing.condition;
            view.original_price = listing.original_price;
            view.age_in_months = listing.age_in_months;
            view.listed_price = listing.listed_price;
            view.images = listing.images;
            view.status = lifecycle::resubmitted_status();
            view.rejection_reason = None;
            view.updated_at = Utc::now();
            Ok(view.clone())
        }

        fn delete(&self, id: Uuid) -> Result<(), DomainError> {
            let mut listings = self.listings.lock().expect("lock poisoned");
            listings.remove(&id).map(|_| ()).ok_or(DomainError::NotFound)
        }

        fn apply_review_if_pending(
            &self,
            id: Uuid,
            next: ListingStatus,
            rejection_reason: Option<String>,
        ) -> Result<ListingView, DomainError> {
            let mut listings = self.listings.lock().expect("lock poisoned");
            let view = listings.get_mut(&id).ok_or(DomainError::NotFound)?;
            if view.status != ListingStatus::Pending {
                return Err(DomainError::Conflict(view.status));
            }
            view.status = next;
            view.rejection_reason = rejection_reason;
            view.updated_at = Utc::now();
            Ok(view.clone())
        }

        fn list_public(&self, filter: &CatalogFilter) -> Result<Vec<ListingView>, DomainError> {
            let listings = self.listings.lock().expect("lock poisoned");
            Ok(listings
                .values()
                .filter(|l| l.status == ListingStatus::Approved)
                .filter(|l| filter.category.map_or(true, |c| l.category == c))
                .filter(|l| {
                    filter.search.as_ref().map_or(true, |s| {
                        l.title.to_lowercase().contains(&s.to_lowercase())
                    })
                })
                .cloned()
                .collect())
        }

        fn list_by_seller(
            &self,
            seller_id: Uuid,
            status: Option<ListingStatus>,
        ) -> Result<Vec<ListingView>, DomainError> {
            let listings = self.listings.lock().expect("lock poisoned");
            Ok(listings
                .values()
                .filter(|l| l.seller_id == seller_id)
                .filter(|l| status.map_or(true, |s| l.status == s))
                .cloned()
                .collect())
        }

        fn list_pending(&self) -> Result<Vec<ListingView>, DomainError> {
            let listings = self.listings.lock().expect("lock poisoned");
            Ok(listings
                .values()
                .filter(|l| l.status == ListingStatus::Pending)
                .cloned()
                .collect())
        }
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn service() -> ListingService<InMemoryRepo> {
        ListingService::new(InMemoryRepo::default())
    }

    fn valid_draft() -> ListingDraft {
        ListingDraft {
            title: "Casio FX-991 calculator".to_string(),
            description: "Scientific calculator in working order, barely used."
                .to_string(),
            category: Some(Category::Calculators),
            condition: Some(Condition::LikeNew),
            original_price: Some(dec("50")),
            age_in_months: Some(3),
            listed_price: Some(dec("45")),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        }
    }

    #[test]
    fn new_listings_are_always_pending() {
        let svc = service();
        let listing = svc
            .create_listing(Uuid::new_v4(), valid_draft())
            .expect("create failed");
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(listing.rejection_reason.is_none());
    }

    #[test]
    fn invalid_draft_reports_every_field() {
        let svc = service();
        let draft = ListingDraft {
            title: String::new(),
            description: "short".to_string(),
            category: None,
            condition: Some(Condition::Used),
            original_price: Some(dec("10")),
            age_in_months: Some(3),
            listed_price: Some(dec("9")),
            images: vec!["a.jpg".to_string()],
        };
        match svc.create_listing(Uuid::new_v4(), draft) {
            Err(DomainError::Validation(errors)) => {
                assert!(errors.message("title").is_some());
                assert!(errors.message("description").is_some());
                assert!(errors.message("category").is_some());
                assert!(errors.message("images").is_some());
                assert_eq!(errors.len(), 4);
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn only_the_owner_may_edit() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");

        let result = svc.update_listing(listing.id, Uuid::new_v4(), valid_draft());
        assert!(matches!(result, Err(DomainError::NotOwner)));
    }

    #[test]
    fn editing_a_rejected_listing_resets_it_to_pending() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");
        let rejected = svc
            .reject_listing(listing.id, "low quality images")
            .expect("reject");
        assert_eq!(rejected.status, ListingStatus::Rejected);
        assert_eq!(
            rejected.rejection_reason.as_deref(),
            Some("low quality images")
        );

        let mut draft = valid_draft();
        draft.title = "Casio FX-991EX calculator".to_string();
        let edited = svc
            .update_listing(listing.id, seller, draft)
            .expect("update");
        assert_eq!(edited.status, ListingStatus::Pending);
        assert!(edited.rejection_reason.is_none());
        assert_eq!(edited.title, "Casio FX-991EX calculator");
    }

    #[test]
    fn editing_an_approved_listing_resets_it_to_pending() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");
        svc.approve_listing(listing.id).expect("approve");

        let edited = svc
            .update_listing(listing.id, seller, valid_draft())
            .expect("update");
        assert_eq!(edited.status, ListingStatus::Pending);
    }

    #[test]
    fn approving_twice_yields_conflict() {
        let svc = service();
        let listing = svc
            .create_listing(Uuid::new_v4(), valid_draft())
            .expect("create");
        let approved = svc.approve_listing(listing.id).expect("approve");
        assert_eq!(approved.status, ListingStatus::Approved);

        match svc.approve_listing(listing.id) {
            Err(DomainError::Conflict(current)) => {
                assert_eq!(current, ListingStatus::Approved);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn rejecting_an_approved_listing_yields_conflict_and_no_mutation() {
        let svc = service();
        let listing = svc
            .create_listing(Uuid::new_v4(), valid_draft())
            .expect("create");
        svc.approve_listing(listing.id).expect("approve");

        let result = svc.reject_listing(listing.id, "reason");
        assert!(matches!(result, Err(DomainError::Conflict(_))));

        let unchanged = svc.get_listing(listing.id, None).expect("get");
        assert_eq!(unchanged.status, ListingStatus::Approved);
        assert!(unchanged.rejection_reason.is_none());
    }

    #[test]
    fn rejecting_without_a_reason_does_not_transition() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");

        let result = svc.reject_listing(listing.id, "   ");
        assert!(matches!(result, Err(DomainError::MissingReason)));

        let unchanged = svc.get_listing(listing.id, Some(seller)).expect("get");
        assert_eq!(unchanged.status, ListingStatus::Pending);
    }

    #[test]
    fn pending_listings_are_hidden_from_the_public() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");

        assert!(matches!(
            svc.get_listing(listing.id, None),
            Err(DomainError::NotFound)
        ));
        assert!(svc.get_listing(listing.id, Some(seller)).is_ok());

        svc.approve_listing(listing.id).expect("approve");
        assert!(svc.get_listing(listing.id, None).is_ok());
    }

    #[test]
    fn catalog_lists_only_approved_listings() {
        let svc = service();
        let seller = Uuid::new_v4();
        let first = svc.create_listing(seller, valid_draft()).expect("create");
        let _second = svc.create_listing(seller, valid_draft()).expect("create");
        svc.approve_listing(first.id).expect("approve");

        let catalog = svc
            .list_public_listings(&CatalogFilter::default())
            .expect("list");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, first.id);
    }

    #[test]
    fn seller_dashboard_filters_by_status() {
        let svc = service();
        let seller = Uuid::new_v4();
        let first = svc.create_listing(seller, valid_draft()).expect("create");
        let _second = svc.create_listing(seller, valid_draft()).expect("create");
        svc.approve_listing(first.id).expect("approve");

        let all = svc.list_seller_listings(seller, None).expect("list");
        assert_eq!(all.len(), 2);

        let pending = svc
            .list_seller_listings(seller, Some(ListingStatus::Pending))
            .expect("list");
        assert_eq!(pending.len(), 1);

        let approved = svc
            .list_seller_listings(seller, Some(ListingStatus::Approved))
            .expect("list");
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, first.id);
    }

    #[test]
    fn delete_respects_ownership() {
        let svc = service();
        let seller = Uuid::new_v4();
        let listing = svc.create_listing(seller, valid_draft()).expect("create");

        assert!(matches!(
            svc.delete_listing(listing.id, Uuid::new_v4()),
            Err(DomainError::NotOwner)
        ));
        svc.delete_listing(listing.id, seller).expect("delete");
        assert!(matches!(
            svc.delete_listing(listing.id, seller),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn admin_removal_works_from_any_status() {
        let svc = service();
        let listing = svc
            .create_listing(Uuid::new_v4(), valid_draft())
            .expect("create");
        svc.approve_listing(listing.id).expect("approve");

        svc.remove_listing(listing.id).expect("remove");
        assert!(matches!(
            svc.remove_listing(listing.id),
            Err(DomainError::NotFound)
        ));
    }
}
