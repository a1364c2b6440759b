use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ages a seller may declare for an item, in months. 36 stands for the
/// open-ended "2+ years" bracket.
pub const AGE_OPTIONS: &[i32] = &[1, 3, 6, 12, 24, 36];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "PENDING",
            ListingStatus::Approved => "APPROVED",
            ListingStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ListingStatus::Pending),
            "APPROVED" => Ok(ListingStatus::Approved),
            "REJECTED" => Ok(ListingStatus::Rejected),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Books,
    Electronics,
    NotesStudyMaterial,
    Accessories,
    Calculators,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Books => "BOOKS",
            Category::Electronics => "ELECTRONICS",
            Category::NotesStudyMaterial => "NOTES_STUDY_MATERIAL",
            Category::Accessories => "ACCESSORIES",
            Category::Calculators => "CALCULATORS",
            Category::Others => "OTHERS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOKS" => Ok(Category::Books),
            "ELECTRONICS" => Ok(Category::Electronics),
            "NOTES_STUDY_MATERIAL" => Ok(Category::NotesStudyMaterial),
            "ACCESSORIES" => Ok(Category::Accessories),
            "CALCULATORS" => Ok(Category::Calculators),
            "OTHERS" => Ok(Category::Others),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    LikeNew,
    Used,
    Old,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::LikeNew => "LIKE_NEW",
            Condition::Used => "USED",
            Condition::Old => "OLD",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Condition::New),
            "LIKE_NEW" => Ok(Condition::LikeNew),
            "USED" => Ok(Condition::Used),
            "OLD" => Ok(Condition::Old),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Failed parse of a stored or submitted enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

/// Raw seller submission, before validation. Optional fields are those the
/// boundary may fail to parse (bad decimal strings, unknown enum values);
/// validation reports them alongside every other violated field.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub original_price: Option<BigDecimal>,
    pub age_in_months: Option<i32>,
    pub listed_price: Option<BigDecimal>,
    pub images: Vec<String>,
}

/// A draft that passed the full validation gate. Field types carry the
/// guarantees: every value is present and inside its allowed set.
#[derive(Debug, Clone)]
pub struct ValidListing {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub original_price: BigDecimal,
    pub age_in_months: i32,
    pub listed_price: BigDecimal,
    pub images: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ListingView {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub original_price: BigDecimal,
    pub age_in_months: i32,
    pub listed_price: BigDecimal,
    pub images: Vec<String>,
    pub status: ListingStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public catalog filter. Status is implicitly Approved.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_str() {
        for status in [
            ListingStatus::Pending,
            ListingStatus::Approved,
            ListingStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ListingStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("SOLD".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn category_roundtrips_through_str() {
        for category in [
            Category::Books,
            Category::Electronics,
            Category::NotesStudyMaterial,
            Category::Accessories,
            Category::Calculators,
            Category::Others,
        ] {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn condition_roundtrips_through_str() {
        for condition in [
            Condition::New,
            Condition::LikeNew,
            Condition::Used,
            Condition::Old,
        ] {
            assert_eq!(condition.as_str().parse::<Condition>(), Ok(condition));
        }
    }
}
