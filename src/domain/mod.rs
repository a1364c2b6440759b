pub mod errors;
pub mod lifecycle;
pub mod listing;
pub mod ports;
pub mod pricing;
pub mod validation;
