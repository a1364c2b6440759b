use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{listing_images, listings};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListingRow {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub original_price: BigDecimal,
    pub age_in_months: i32,
    pub listed_price: BigDecimal,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = listings)]
pub struct NewListingRow {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub original_price: BigDecimal,
    pub age_in_months: i32,
    pub listed_price: BigDecimal,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = listing_images)]
#[diesel(belongs_to(ListingRow, foreign_key = listing_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListingImageRow {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub position: i32,
    pub url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = listing_images)]
pub struct NewListingImageRow {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub position: i32,
    pub url: String,
}
