pub mod listing_repo;
pub mod models;
