use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::pricing;
use crate::errors::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteParams {
    /// MRP as a decimal string, e.g. "50".
    #[serde(default)]
    pub original_price: String,
    pub age_in_months: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    /// "0.00" means no suggestion yet (incomplete or non-positive inputs).
    pub suggested_price: String,
    pub min_price: String,
    pub max_price: String,
}

/// GET /pricing/quote
///
/// Suggested resale price plus the acceptable band for given MRP and age.
/// Clients use this to pre-fill the price field while the seller is still
/// typing, so incomplete input is answered with a zero quote, not an error.
#[utoipa::path(
    get,
    path = "/pricing/quote",
    params(
        ("original_price" = Option<String>, Query, description = "MRP as a decimal string"),
        ("age_in_months" = Option<i32>, Query, description = "Item age in months"),
    ),
    responses(
        (status = 200, description = "Price suggestion and band", body = QuoteResponse),
    ),
    tag = "pricing"
)]
pub async fn price_quote(query: web::Query<QuoteParams>) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let mrp = BigDecimal::from_str(&params.original_price).unwrap_or_else(|_| BigDecimal::zero());
    let age = params.age_in_months.unwrap_or(0);

    let suggested = pricing::suggested_price(&mrp, age);
    let band = pricing::price_band(&suggested);

    Ok(HttpResponse::Ok().json(QuoteResponse {
        suggested_price: pricing::display_price(&suggested).to_string(),
        min_price: pricing::display_price(&band.min).to_string(),
        max_price: pricing::display_price(&band.max).to_string(),
    }))
}
