//! Domain Entities
//!
//! Read-only listing data as served by the backend, and the booking request
//! the client submits.

use chrono::NaiveDate;
use kernel::id::{ListingId, UserId};
use serde::Deserialize;

use crate::domain::value_objects::Price;

/// Rental property as shown in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Decimal string, e.g. `"120.00"`
    pub price_per_night: String,
    pub city: String,
    /// Photo URLs, cover first
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "host__first_name", default)]
    pub host_first_name: String,
    #[serde(rename = "host__last_name", default)]
    pub host_last_name: String,
    #[serde(rename = "host__email", default)]
    pub host_email: String,
    pub created_at: String,
    pub updated_at: String,
    pub max_guests: u32,
}

impl Listing {
    /// Parsed nightly price; `None` when the backend sent something odd
    pub fn price(&self) -> Option<Price> {
        Price::parse(&self.price_per_night)
    }

    pub fn host_name(&self) -> String {
        format!("{} {}", self.host_first_name, self.host_last_name)
            .trim()
            .to_string()
    }

    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Up to four photos after the cover
    pub fn gallery(&self) -> &[String] {
        let end = self.photos.len().min(5);
        self.photos.get(1..end).unwrap_or(&[])
    }
}

/// Listing detail page data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(default)]
    pub total_bookings: u32,
}

/// Catalog search sent to the backend
///
/// Dates only travel as a pair; the backend filters by availability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingsQuery {
    pub city: Option<String>,
    pub dates: Option<(NaiveDate, NaiveDate)>,
    pub count: Option<u32>,
}

impl ListingsQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn available_between(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            dates: Some((check_in, check_out)),
            ..Default::default()
        }
    }

    pub fn is_date_filtered(&self) -> bool {
        self.dates.is_some()
    }
}

/// Validated booking ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub listing_id: ListingId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    pub user: UserId,
}
