//! Listing Detail Use Case

use std::sync::Arc;

use kernel::id::ListingId;

use crate::domain::entities::ListingDetail;
use crate::domain::gateway::StayGateway;
use crate::error::{StayError, StayResult};

/// Listing Detail Use Case
pub struct ListingDetailUseCase<G>
where
    G: StayGateway,
{
    gateway: Arc<G>,
}

impl<G> ListingDetailUseCase<G>
where
    G: StayGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Load the listing behind a `/listing/<id>` path segment
    pub async fn execute(&self, id: &str) -> StayResult<ListingDetail> {
        let id = ListingId::new(id.trim());
        if id.is_blank() {
            return Err(StayError::NotFound);
        }

        self.gateway.listing_detail(&id).await
    }
}
