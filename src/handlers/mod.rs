pub mod admin;
pub mod listings;
pub mod pricing;
