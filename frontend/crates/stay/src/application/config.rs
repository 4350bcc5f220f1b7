//! Application Configuration
//!
//! Configuration for the stay application layer.

/// Stay application configuration
#[derive(Debug, Clone)]
pub struct StayConfig {
    pub listings_endpoint: String,
    pub listing_detail_endpoint: String,
    pub bookings_endpoint: String,
    /// `count` sent with catalog searches; `None` lets the backend decide
    pub page_size: Option<u32>,
}

impl Default for StayConfig {
    fn default() -> Self {
        Self {
            listings_endpoint: "/stay/listings/".to_string(),
            listing_detail_endpoint: "/stay/get_listing/".to_string(),
            bookings_endpoint: "/stay/bookings/".to_string(),
            page_size: None,
        }
    }
}

impl StayConfig {
    /// Config for local development (small catalog pages)
    pub fn development() -> Self {
        Self {
            page_size: Some(20),
            ..Default::default()
        }
    }
}
