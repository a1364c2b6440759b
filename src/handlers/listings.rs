use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::listing::{CatalogFilter, ListingDraft, ListingStatus, ListingView};
use crate::domain::pricing;
use crate::domain::validation::ValidationErrors;
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Seller submission for create and edit. Enum-ish and decimal fields arrive
/// as strings; anything unparseable surfaces as a field error from the
/// validation gate instead of a blunt deserialization failure, so a bad form
/// still gets a complete field-by-field report.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListingPayload {
    pub seller_id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of BOOKS, ELECTRONICS, NOTES_STUDY_MATERIAL, ACCESSORIES,
    /// CALCULATORS, OTHERS.
    #[serde(default)]
    pub category: String,
    /// One of NEW, LIKE_NEW, USED, OLD.
    #[serde(default)]
    pub condition: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "49.99"
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub age_in_months: Option<i32>,
    /// Decimal price as a string, must fall inside the advisor's band.
    #[serde(default)]
    pub listed_price: String,
    /// Ordered image references; 2 to 5 for a submittable listing.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ListingPayload {
    fn into_parts(self) -> (Uuid, ListingDraft) {
        let draft = ListingDraft {
            title: self.title,
            description: self.description,
            category: self.category.parse().ok(),
            condition: self.condition.parse().ok(),
            original_price: BigDecimal::from_str(&self.original_price).ok(),
            age_in_months: self.age_in_months,
            listed_price: BigDecimal::from_str(&self.listed_price).ok(),
            images: self.images,
        };
        (self.seller_id, draft)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingResponse {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub original_price: String,
    pub age_in_months: i32,
    pub listed_price: String,
    pub images: Vec<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ListingView> for ListingResponse {
    fn from(view: ListingView) -> Self {
        ListingResponse {
            id: view.id,
            seller_id: view.seller_id,
            title: view.title,
            description: view.description,
            category: view.category.as_str().to_string(),
            condition: view.condition.as_str().to_string(),
            original_price: pricing::display_price(&view.original_price).to_string(),
            age_in_months: view.age_in_months,
            listed_price: pricing::display_price(&view.listed_price).to_string(),
            images: view.images,
            status: view.status.as_str().to_string(),
            rejection_reason: view.rejection_reason,
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewerParams {
    pub seller_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OwnerParams {
    pub seller_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SellerListParams {
    pub status: Option<String>,
}

fn single_field_error(field: &str, message: &str) -> AppError {
    let mut errors = ValidationErrors::default();
    errors.add(field, message);
    AppError::Validation(errors)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /listings
///
/// Seller submits a new listing. The submission runs through the full
/// validation gate (including the pricing advisor's band check) and, on
/// success, is stored with status PENDING awaiting admin review.
#[utoipa::path(
    post,
    path = "/listings",
    request_body = ListingPayload,
    responses(
        (status = 201, description = "Listing created, pending review", body = ListingResponse),
        (status = 422, description = "One or more fields failed validation"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn create_listing(
    svc: web::Data<AppService>,
    body: web::Json<ListingPayload>,
) -> Result<HttpResponse, AppError> {
    let (seller_id, draft) = body.into_inner().into_parts();

    let listing = web::block(move || svc.create_listing(seller_id, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("seller {} created listing {}", seller_id, listing.id);
    Ok(HttpResponse::Created().json(ListingResponse::from(listing)))
}

/// GET /listings
///
/// Public catalog: approved listings only, with optional category filter and
/// case-insensitive title search.
#[utoipa::path(
    get,
    path = "/listings",
    params(
        ("category" = Option<String>, Query, description = "Category filter, e.g. BOOKS"),
        ("search" = Option<String>, Query, description = "Case-insensitive title search"),
    ),
    responses(
        (status = 200, description = "Approved listings", body = [ListingResponse]),
        (status = 422, description = "Unknown category"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn list_public_listings(
    svc: web::Data<AppService>,
    query: web::Query<CatalogParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let category = match params.category.as_deref() {
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| single_field_error("category", "Unknown category"))?,
        ),
        None => None,
    };
    let filter = CatalogFilter {
        category,
        search: params.search,
    };

    let listings = web::block(move || svc.list_public_listings(&filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<ListingResponse> = listings.into_iter().map(ListingResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /listings/{id}
///
/// Detail view. Approved listings are public; a pending or rejected listing
/// is only returned when `seller_id` identifies its owner, and reads as 404
/// to anyone else.
#[utoipa::path(
    get,
    path = "/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
        ("seller_id" = Option<Uuid>, Query, description = "Viewer identity, for sellers fetching their own listing"),
    ),
    responses(
        (status = 200, description = "Listing found", body = ListingResponse),
        (status = 404, description = "Listing not found or not visible"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn get_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    query: web::Query<ViewerParams>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let viewer = query.into_inner().seller_id;

    let listing = web::block(move || svc.get_listing(listing_id, viewer))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListingResponse::from(listing)))
}

/// PUT /listings/{id}
///
/// Seller edits and resubmits. Runs the full validation gate again; on
/// success the listing goes back to PENDING and any rejection reason is
/// cleared, whatever status it was in before.
#[utoipa::path(
    put,
    path = "/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
    ),
    request_body = ListingPayload,
    responses(
        (status = 200, description = "Listing updated, pending review again", body = ListingResponse),
        (status = 403, description = "Caller does not own this listing"),
        (status = 404, description = "Listing not found"),
        (status = 422, description = "One or more fields failed validation"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn update_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<ListingPayload>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let (seller_id, draft) = body.into_inner().into_parts();

    let listing = web::block(move || svc.update_listing(listing_id, seller_id, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("seller {} resubmitted listing {}", seller_id, listing_id);
    Ok(HttpResponse::Ok().json(ListingResponse::from(listing)))
}

/// DELETE /listings/{id}
///
/// Seller deletes their own listing; allowed from any status.
#[utoipa::path(
    delete,
    path = "/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
        ("seller_id" = Uuid, Query, description = "Owning seller identity"),
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 403, description = "Caller does not own this listing"),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn delete_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    query: web::Query<OwnerParams>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let seller_id = query.into_inner().seller_id;

    web::block(move || svc.delete_listing(listing_id, seller_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("seller {} deleted listing {}", seller_id, listing_id);
    Ok(HttpResponse::NoContent().finish())
}

/// GET /sellers/{seller_id}/listings
///
/// Seller dashboard: all of the seller's own listings, optionally narrowed
/// to a single status.
#[utoipa::path(
    get,
    path = "/sellers/{seller_id}/listings",
    params(
        ("seller_id" = Uuid, Path, description = "Seller UUID"),
        ("status" = Option<String>, Query, description = "PENDING, APPROVED or REJECTED"),
    ),
    responses(
        (status = 200, description = "The seller's listings", body = [ListingResponse]),
        (status = 422, description = "Unknown status value"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "listings"
)]
pub async fn list_seller_listings(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    query: web::Query<SellerListParams>,
) -> Result<HttpResponse, AppError> {
    let seller_id = path.into_inner();
    let status = match query.into_inner().status.as_deref() {
        Some(raw) => Some(
            raw.parse::<ListingStatus>()
                .map_err(|_| single_field_error("status", "Unknown status"))?,
        ),
        None => None,
    };

    let listings = web::block(move || svc.list_seller_listings(seller_id, status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<ListingResponse> = listings.into_iter().map(ListingResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}
