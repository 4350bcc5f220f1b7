//! Application Layer - Use cases and page state

pub mod catalog;
pub mod config;
pub mod create_booking;
pub mod fetch_listings;
pub mod listing_detail;
pub mod notice;

pub use catalog::CatalogView;
pub use create_booking::CreateBookingUseCase;
pub use fetch_listings::{FetchListingsUseCase, ListingsPage};
pub use listing_detail::ListingDetailUseCase;
pub use notice::{Notice, NoticeLevel};
