//! Submission validation gate shared by create and edit.
//!
//! Every rule runs; all violated fields are reported together so the caller
//! can render field-level feedback in one pass.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;

use super::listing::{ListingDraft, ValidListing, AGE_OPTIONS};
use super::pricing::{self, PriceCheck};

pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_IMAGES: usize = 2;
pub const MAX_IMAGES: usize = 5;

/// Field name → message, ordered so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let _ = self.0.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Run the full gate over a draft. On success the returned [`ValidListing`]
/// carries every field as a present, in-range value.
pub fn validate_draft(draft: ListingDraft) -> Result<ValidListing, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = draft.title.trim().to_string();
    if title.is_empty() {
        errors.add("title", "Product title is required");
    }

    if draft.category.is_none() {
        errors.add("category", "Please select a valid category");
    }

    if draft.condition.is_none() {
        errors.add("condition", "Please select a valid condition");
    }

    let description = draft.description.trim().to_string();
    if description.is_empty() {
        errors.add("description", "Description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.add(
            "description",
            format!("Description must be at least {MIN_DESCRIPTION_LEN} characters"),
        );
    }

    match draft.original_price.as_ref() {
        None => errors.add("original_price", "Original MRP is required"),
        Some(mrp) if mrp <= &BigDecimal::zero() => {
            errors.add("original_price", "Original MRP must be greater than 0");
        }
        Some(_) => {}
    }

    match draft.age_in_months {
        None => errors.add("age_in_months", "Please select the age of the product"),
        Some(age) if !AGE_OPTIONS.contains(&age) => {
            errors.add(
                "age_in_months",
                "Age must be one of 1, 3, 6, 12, 24 or 36 months",
            );
        }
        Some(_) => {}
    }

    let image_count = draft.images.len();
    if image_count < MIN_IMAGES {
        errors.add("images", format!("At least {MIN_IMAGES} images are required"));
    } else if image_count > MAX_IMAGES {
        errors.add("images", format!("Maximum {MAX_IMAGES} images allowed"));
    }

    match draft.listed_price.as_ref() {
        None => errors.add("listed_price", "Price is required"),
        Some(listed) => {
            // The band is only meaningful once MRP and age are themselves
            // valid; otherwise those fields already carry an error.
            if errors.message("original_price").is_none()
                && errors.message("age_in_months").is_none()
            {
                if let (Some(mrp), Some(age)) =
                    (draft.original_price.as_ref(), draft.age_in_months)
                {
                    if let PriceCheck::OutOfBand { min, max } =
                        pricing::validate_price(listed, mrp, age)
                    {
                        errors.add(
                            "listed_price",
                            format!(
                                "Price should be between {} and {}",
                                pricing::display_price(&min),
                                pricing::display_price(&max)
                            ),
                        );
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Options were checked above; a missing value would have errored out.
    match (
        draft.category,
        draft.condition,
        draft.original_price,
        draft.age_in_months,
        draft.listed_price,
    ) {
        (Some(category), Some(condition), Some(original_price), Some(age), Some(listed_price)) => {
            Ok(ValidListing {
                title,
                description,
                category,
                condition,
                original_price,
                age_in_months: age,
                listed_price,
                images: draft.images,
            })
        }
        _ => {
            let mut errors = ValidationErrors::default();
            errors.add("form", "Submission is incomplete");
            Err(errors)
        }
    }
}
