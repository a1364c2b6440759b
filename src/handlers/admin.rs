use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::handlers::listings::ListingResponse;
use crate::AppService;

// Admin identity is established by the auth layer in front of this service;
// it is carried here only for the audit log.

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApproveRequest {
    pub admin_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectRequest {
    pub admin_id: Uuid,
    /// Required, non-empty explanation shown to the seller.
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminParams {
    pub admin_id: Uuid,
}

/// GET /admin/listings/pending
///
/// Review queue, oldest submissions first. The queue is a snapshot: by the
/// time an admin acts, another admin may already have handled an entry, which
/// the approve/reject endpoints surface as 409.
#[utoipa::path(
    get,
    path = "/admin/listings/pending",
    responses(
        (status = 200, description = "Listings awaiting review", body = [ListingResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn list_pending_listings(svc: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let listings = web::block(move || svc.list_pending_listings())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<ListingResponse> = listings.into_iter().map(ListingResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// POST /admin/listings/{id}/approve
///
/// Publish a pending listing to the catalog. A listing that is no longer
/// PENDING was already handled by another admin and yields 409 with the
/// stored status.
#[utoipa::path(
    post,
    path = "/admin/listings/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
    ),
    request_body = ApproveRequest,
    responses(
        (status = 200, description = "Listing approved", body = ListingResponse),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Listing already handled"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn approve_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<ApproveRequest>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let admin_id = body.into_inner().admin_id;

    let listing = web::block(move || svc.approve_listing(listing_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("admin {} approved listing {}", admin_id, listing_id);
    Ok(HttpResponse::Ok().json(ListingResponse::from(listing)))
}

/// POST /admin/listings/{id}/reject
///
/// Reject a pending listing with a mandatory reason the seller will see.
#[utoipa::path(
    post,
    path = "/admin/listings/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
    ),
    request_body = RejectRequest,
    responses(
        (status = 200, description = "Listing rejected", body = ListingResponse),
        (status = 400, description = "Missing rejection reason"),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Listing already handled"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn reject_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<RejectRequest>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let request = body.into_inner();

    let listing = web::block(move || svc.reject_listing(listing_id, &request.reason))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("admin {} rejected listing {}", request.admin_id, listing_id);
    Ok(HttpResponse::Ok().json(ListingResponse::from(listing)))
}

/// DELETE /admin/listings/{id}
///
/// Admin removal of a listing in any status.
#[utoipa::path(
    delete,
    path = "/admin/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing UUID"),
        ("admin_id" = Uuid, Query, description = "Acting admin identity"),
    ),
    responses(
        (status = 204, description = "Listing removed"),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn remove_listing(
    svc: web::Data<AppService>,
    path: web::Path<Uuid>,
    query: web::Query<AdminParams>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let admin_id = query.into_inner().admin_id;

    web::block(move || svc.remove_listing(listing_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("admin {} removed listing {}", admin_id, listing_id);
    Ok(HttpResponse::NoContent().finish())
}
