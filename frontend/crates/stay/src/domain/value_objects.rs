//! Domain Value Objects
//!
//! Immutable value types for prices and stay quotes.

use chrono::NaiveDate;

/// Nightly price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Parse a decimal string such as `"120.00"`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .map(Self)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Inclusive price bounds for the catalog slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    /// Ceiling used when no listing price is known
    pub const DEFAULT_CEILING: f64 = 1000.0;

    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    /// `[0, ceiling]`
    pub fn up_to(ceiling: f64) -> Self {
        Self::new(0.0, ceiling)
    }

    pub fn contains(&self, price: Price) -> bool {
        (self.low..=self.high).contains(&price.amount())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(Self::DEFAULT_CEILING)
    }
}

/// Nights and total for a date pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: i64,
    pub total: f64,
}

impl StayQuote {
    /// Quote for `check_in..check_out`; `None` unless check-out is later
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, price: Price) -> Option<Self> {
        let nights = nights_between(check_in, check_out)?;
        Some(Self {
            nights,
            total: nights as f64 * price.amount(),
        })
    }

    /// "1 night", "3 nights"
    pub fn nights_label(&self) -> String {
        nights_label(self.nights)
    }
}

/// Whole nights between two dates, if check-out is after check-in
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Option<i64> {
    let nights = (check_out - check_in).num_days();
    (nights > 0).then_some(nights)
}

pub fn nights_label(nights: i64) -> String {
    if nights == 1 {
        "1 night".to_string()
    } else {
        format!("{} nights", nights)
    }
}
