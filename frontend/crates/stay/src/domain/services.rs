//! Domain Services
//!
//! Pure catalog logic: the price slider bounds and the filters applied on
//! top of what the backend returned.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::Listing;
use crate::domain::value_objects::PriceRange;

/// Slider bounds for a result set: `[0, ceil(max price)]`
///
/// Listings with unparseable prices are ignored; with no usable price the
/// default `[0, 1000]` applies.
pub fn price_range(listings: &[Listing]) -> PriceRange {
    listings
        .iter()
        .filter_map(Listing::price)
        .map(|price| price.amount())
        .reduce(f64::max)
        .map(|max| PriceRange::up_to(max.ceil()))
        .unwrap_or_default()
}

/// Client-side filter state
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring; blank means no city filter
    pub city: String,
    pub price: PriceRange,
}

impl ListingFilter {
    pub fn new(city: impl Into<String>, price: PriceRange) -> Self {
        Self {
            city: city.into(),
            price,
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        // Trimmed before matching, so " porto" still finds "Porto"
        let needle = self.city.trim().to_lowercase();
        let city_ok = needle.is_empty() || listing.city.to_lowercase().contains(&needle);
        let price_ok = listing
            .price()
            .is_some_and(|price| self.price.contains(price));
        city_ok && price_ok
    }
}

/// Listings passing `filter`, in backend order
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|listing| filter.matches(listing)).collect()
}

/// Today's date, used as the earliest bookable check-in
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
