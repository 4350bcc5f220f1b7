//! Stay API
//!
//! [`StayGateway`] over the `/stay/` endpoints. Every call goes through the
//! authenticated request wrapper, so an expired session is refreshed
//! transparently.

use std::sync::Arc;

use kernel::id::ListingId;
use platform::client::{ApiRequest, HttpTransport};
use platform::cookie::CookieSource;
use session::ReauthClient;

use crate::application::config::StayConfig;
use crate::domain::entities::{BookingRequest, Listing, ListingDetail, ListingsQuery};
use crate::domain::gateway::StayGateway;
use crate::error::{StayError, StayResult};
use crate::presentation::dto::{CreateBookingBody, GetListingRequest, ListingsRequest};

/// Stay endpoints of the booking backend
pub struct StayApi<T, C> {
    client: Arc<ReauthClient<T, C>>,
    config: Arc<StayConfig>,
}

impl<T, C> StayApi<T, C> {
    pub fn new(client: Arc<ReauthClient<T, C>>, config: Arc<StayConfig>) -> Self {
        Self { client, config }
    }
}

impl<T, C> StayGateway for StayApi<T, C>
where
    T: HttpTransport + Sync,
    C: CookieSource,
{
    async fn listings(&self, query: &ListingsQuery) -> StayResult<Vec<Listing>> {
        let body = ListingsRequest::from(query);
        let request = ApiRequest::post(self.config.listings_endpoint.as_str())
            .json(&body)
            .map_err(session::SessionError::from)?;

        let envelope = self.client.send_json::<Vec<Listing>>(request).await?;
        let listings = envelope.data.unwrap_or_default();

        tracing::debug!(
            count = listings.len(),
            date_filtered = query.is_date_filtered(),
            "Listings loaded"
        );
        Ok(listings)
    }

    async fn listing_detail(&self, id: &ListingId) -> StayResult<ListingDetail> {
        if id.is_blank() {
            return Err(StayError::NotFound);
        }

        let body = GetListingRequest { id: id.as_str() };
        let request = ApiRequest::post(self.config.listing_detail_endpoint.as_str())
            .json(&body)
            .map_err(session::SessionError::from)?;

        let envelope = self.client.send_json::<ListingDetail>(request).await?;
        envelope.data.ok_or(StayError::Rejected(envelope.message))
    }

    async fn create_booking(&self, booking: &BookingRequest) -> StayResult<String> {
        let body = CreateBookingBody::from(booking);
        let request = ApiRequest::post(self.config.bookings_endpoint.as_str())
            .json(&body)
            .map_err(session::SessionError::from)?;

        let envelope = self.client.send_json::<serde_json::Value>(request).await?;
        tracing::info!(
            listing_id = %booking.listing_id,
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            "Booking created"
        );
        Ok(envelope.message)
    }
}
