use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::listing::ListingStatus;
use crate::domain::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    NotOwner,

    #[error("Conflict: listing already handled")]
    Conflict(ListingStatus),

    #[error("A rejection reason is required")]
    MissingReason,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::NotFound => AppError::NotFound,
            DomainError::NotOwner => AppError::NotOwner,
            DomainError::Conflict(current) => AppError::Conflict(current),
            DomainError::MissingReason => AppError::MissingReason,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": "Validation failed",
                    "fields": errors
                }))
            }
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::NotOwner => HttpResponse::Forbidden().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Conflict(current) => HttpResponse::Conflict().json(serde_json::json!({
                "error": "Listing already handled",
                "current_status": current.as_str()
            })),
            AppError::MissingReason => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
