//! Create Booking Use Case
//!
//! Checks the session and the form, then submits. Overlaps and availability
//! are the backend's call; its rejection message is passed through.

use std::sync::Arc;

use chrono::NaiveDate;
use session::SessionStore;

use crate::application::notice::Notice;
use crate::domain::booking::BookingForm;
use crate::domain::entities::{BookingRequest, Listing};
use crate::domain::gateway::StayGateway;
use crate::error::{StayError, StayResult};

pub const BOOKING_CREATED: &str = "Booking created successfully!";

/// Create Booking Use Case
pub struct CreateBookingUseCase<G>
where
    G: StayGateway,
{
    gateway: Arc<G>,
    store: Arc<SessionStore>,
}

impl<G> CreateBookingUseCase<G>
where
    G: StayGateway,
{
    pub fn new(gateway: Arc<G>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(
        &self,
        listing: &Listing,
        form: &BookingForm,
        today: NaiveDate,
    ) -> StayResult<Notice> {
        let session = self.store.snapshot();
        if !session.is_authenticated {
            return Err(StayError::LoginRequired);
        }

        let valid = form
            .validate(today, listing.max_guests)
            .map_err(StayError::Validation)?;

        let user = session
            .user_id()
            .filter(|id| !id.is_blank())
            .cloned()
            .ok_or(StayError::MissingUser)?;

        let request = BookingRequest {
            listing_id: listing.id.clone(),
            check_in: valid.check_in,
            check_out: valid.check_out,
            number_of_guests: valid.number_of_guests,
            user,
        };
        self.gateway.create_booking(&request).await?;

        Ok(Notice::success(BOOKING_CREATED))
    }
}
