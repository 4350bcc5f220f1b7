//! Fetch Listings Use Case

use std::sync::Arc;

use crate::application::config::StayConfig;
use crate::domain::entities::{Listing, ListingsQuery};
use crate::domain::gateway::StayGateway;
use crate::domain::services::price_range;
use crate::domain::value_objects::PriceRange;
use crate::error::StayResult;

/// Output DTO for fetch listings
#[derive(Debug, Clone)]
pub struct ListingsPage {
    pub listings: Vec<Listing>,
    /// Slider bounds for these listings
    pub price_range: PriceRange,
}

/// Fetch Listings Use Case
pub struct FetchListingsUseCase<G>
where
    G: StayGateway,
{
    gateway: Arc<G>,
    config: Arc<StayConfig>,
}

impl<G> FetchListingsUseCase<G>
where
    G: StayGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<StayConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, mut query: ListingsQuery) -> StayResult<ListingsPage> {
        if query.count.is_none() {
            query.count = self.config.page_size;
        }

        let listings = self.gateway.listings(&query).await?;
        let price_range = price_range(&listings);

        Ok(ListingsPage {
            listings,
            price_range,
        })
    }
}
