//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{BookingRequest, ListingsQuery};

// ============================================================================
// Listings
// ============================================================================

/// Listings search body: `{}` or `{filters?: {...}, count?}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ListingFiltersBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingFiltersBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
}

impl<'a> From<&'a ListingsQuery> for ListingsRequest<'a> {
    fn from(query: &'a ListingsQuery) -> Self {
        let city = query
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty());

        let filters = (city.is_some() || query.dates.is_some()).then(|| ListingFiltersBody {
            city,
            check_in: query.dates.map(|(check_in, _)| check_in),
            check_out: query.dates.map(|(_, check_out)| check_out),
        });

        Self {
            filters,
            count: query.count,
        }
    }
}

// ============================================================================
// Listing Detail
// ============================================================================

/// Listing detail body
#[derive(Debug, Clone, Serialize)]
pub struct GetListingRequest<'a> {
    pub id: &'a str,
}

// ============================================================================
// Bookings
// ============================================================================

/// Booking creation body
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingBody<'a> {
    pub listing_id: &'a str,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    pub user: &'a str,
}

impl<'a> From<&'a BookingRequest> for CreateBookingBody<'a> {
    fn from(booking: &'a BookingRequest) -> Self {
        Self {
            listing_id: booking.listing_id.as_str(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.number_of_guests,
            user: booking.user.as_str(),
        }
    }
}
