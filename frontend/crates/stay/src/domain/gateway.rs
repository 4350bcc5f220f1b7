//! Gateway Traits
//!
//! Interface to the stay endpoints. Implementation is in the infrastructure
//! layer.

use kernel::id::ListingId;

use crate::domain::entities::{BookingRequest, Listing, ListingDetail, ListingsQuery};
use crate::error::StayResult;

/// Stay gateway trait
#[trait_variant::make(StayGateway: Send)]
pub trait LocalStayGateway {
    /// Search listings; date-filtered queries return only available ones
    async fn listings(&self, query: &ListingsQuery) -> StayResult<Vec<Listing>>;

    /// Fetch one listing with its booking count
    async fn listing_detail(&self, id: &ListingId) -> StayResult<ListingDetail>;

    /// Submit a booking; returns the backend's confirmation message
    async fn create_booking(&self, booking: &BookingRequest) -> StayResult<String>;
}
