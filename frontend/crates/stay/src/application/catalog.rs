//! Catalog View
//!
//! State behind the listings page. Dates are sent to the backend, which
//! knows availability; city and price are applied locally to whatever the
//! last load returned.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::StayConfig;
use crate::application::fetch_listings::FetchListingsUseCase;
use crate::application::notice::Notice;
use crate::domain::entities::{Listing, ListingsQuery};
use crate::domain::gateway::StayGateway;
use crate::domain::services::{ListingFilter, filter_listings};
use crate::domain::value_objects::{PriceRange, nights_between};

pub const NO_AVAILABILITY: &str = "No properties available for selected dates";

/// Listings page state
pub struct CatalogView<G>
where
    G: StayGateway,
{
    fetch: FetchListingsUseCase<G>,
    listings: Vec<Listing>,
    city: String,
    price: PriceRange,
    /// Upper slider bound for the current result set
    max_price: f64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl<G> CatalogView<G>
where
    G: StayGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<StayConfig>) -> Self {
        let price = PriceRange::default();
        Self {
            fetch: FetchListingsUseCase::new(gateway, config),
            listings: Vec::new(),
            city: String::new(),
            price,
            max_price: price.high,
            check_in: None,
            check_out: None,
        }
    }

    /// Unfiltered load, as on first render
    pub async fn load(&mut self) -> Option<Notice> {
        self.reload(ListingsQuery::all()).await
    }

    pub async fn set_check_in(&mut self, check_in: Option<NaiveDate>) -> Option<Notice> {
        self.check_in = check_in;
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                self.check_out = None;
            }
        }
        self.dates_changed().await
    }

    pub async fn set_check_out(&mut self, check_out: Option<NaiveDate>) -> Option<Notice> {
        self.check_out = check_out;
        self.dates_changed().await
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Clamped to `[0, max_price]`, the bounds of the slider
    pub fn set_price_range(&mut self, low: f64, high: f64) {
        let clamp = |value: f64| value.clamp(0.0, self.max_price);
        self.price = PriceRange::new(clamp(low), clamp(high));
    }

    /// Reset every filter; reloads only if dates were set
    pub async fn clear_filters(&mut self) -> Option<Notice> {
        let had_dates = self.check_in.is_some() || self.check_out.is_some();

        self.city.clear();
        self.price = PriceRange::up_to(self.max_price);
        self.check_in = None;
        self.check_out = None;

        if had_dates { self.load().await } else { None }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.city.trim().is_empty()
            || self.price.low != 0.0
            || self.price.high != self.max_price
            || self.check_in.is_some()
            || self.check_out.is_some()
    }

    /// Listings after the city and price filters
    pub fn visible(&self) -> Vec<&Listing> {
        filter_listings(&self.listings, &ListingFilter::new(self.city.as_str(), self.price))
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn price_range(&self) -> PriceRange {
        self.price
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    pub fn dates(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.check_in, self.check_out)
    }

    /// Nights between the selected dates
    pub fn nights(&self) -> Option<i64> {
        nights_between(self.check_in?, self.check_out?)
    }

    /// A half-selected date pair waits for the other date
    async fn dates_changed(&mut self) -> Option<Notice> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                self.reload(ListingsQuery::available_between(check_in, check_out))
                    .await
            }
            (None, None) => self.load().await,
            _ => None,
        }
    }

    async fn reload(&mut self, query: ListingsQuery) -> Option<Notice> {
        let date_filtered = query.is_date_filtered();

        match self.fetch.execute(query).await {
            Ok(page) => {
                self.listings = page.listings;
                self.max_price = page.price_range.high;
                self.price = page.price_range;

                (date_filtered && self.listings.is_empty()).then(|| Notice::info(NO_AVAILABILITY))
            }
            Err(e) => {
                e.log();
                Some(Notice::from_error(&e, "load listings"))
            }
        }
    }
}
