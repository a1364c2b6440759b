//! Pricing advisor: suggested resale price and acceptance band.
//!
//! Pure and reentrant; everything here is plain arithmetic on owned values,
//! safe to call from any number of concurrent request handlers.

use bigdecimal::{BigDecimal, RoundingMode, Zero};

/// Depreciation schedule as data: (inclusive upper age bound in months,
/// multiplier digits, multiplier scale). Evaluated in order, first match wins.
const DEPRECIATION_BRACKETS: &[(i32, i64, i64)] = &[
    (3, 90, 2),  // ≤ 3 months: 0.90
    (6, 80, 2),  // ≤ 6 months: 0.80
    (12, 65, 2), // ≤ 12 months: 0.65
    (24, 50, 2), // ≤ 24 months: 0.50
];

/// Multiplier for anything older than the last bracket: 0.40.
const OLDEST_MULTIPLIER: (i64, i64) = (40, 2);

/// Band half-width around the suggestion: listed price must stay within ±10%.
const BAND_LOWER: (i64, i64) = (90, 2); // 0.90
const BAND_UPPER: (i64, i64) = (110, 2); // 1.10

fn decimal(digits: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(digits.into(), scale)
}

fn age_multiplier(age_in_months: i32) -> BigDecimal {
    for &(upper, digits, scale) in DEPRECIATION_BRACKETS {
        if age_in_months <= upper {
            return decimal(digits, scale);
        }
    }
    decimal(OLDEST_MULTIPLIER.0, OLDEST_MULTIPLIER.1)
}

/// Depreciation-adjusted price suggestion from MRP and age.
///
/// Non-positive inputs mean the seller has not filled both fields in yet, so
/// the result is zero ("no suggestion"), not an error.
pub fn suggested_price(original_price: &BigDecimal, age_in_months: i32) -> BigDecimal {
    if age_in_months <= 0 || original_price <= &BigDecimal::zero() {
        return BigDecimal::zero();
    }
    original_price * age_multiplier(age_in_months)
}

/// Inclusive acceptance range around a suggested price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBand {
    pub min: BigDecimal,
    pub max: BigDecimal,
}

pub fn price_band(suggested: &BigDecimal) -> PriceBand {
    PriceBand {
        min: suggested * decimal(BAND_LOWER.0, BAND_LOWER.1),
        max: suggested * decimal(BAND_UPPER.0, BAND_UPPER.1),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceCheck {
    Ok,
    OutOfBand { min: BigDecimal, max: BigDecimal },
}

/// Validate a submitted price against the band derived from MRP and age.
/// Bounds are inclusive and compared at full precision; rounding happens only
/// when the band is shown to a caller.
pub fn validate_price(
    listed_price: &BigDecimal,
    original_price: &BigDecimal,
    age_in_months: i32,
) -> PriceCheck {
    let suggested = suggested_price(original_price, age_in_months);
    let band = price_band(&suggested);
    if listed_price < &band.min || listed_price > &band.max {
        PriceCheck::OutOfBand {
            min: band.min,
            max: band.max,
        }
    } else {
        PriceCheck::Ok
    }
}

/// Round a price to two decimal places for display. Comparisons elsewhere in
/// this module always use the unrounded value.
pub fn display_price(price: &BigDecimal) -> BigDecimal {
    price.with_scale_round(2, RoundingMode::HalfUp)
}
