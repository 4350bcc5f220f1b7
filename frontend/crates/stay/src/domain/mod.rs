//! Domain Layer - Listings and bookings
//!
//! This layer contains:
//! - Domain entities (Listing, ListingDetail, BookingRequest)
//! - Domain value objects (Price, PriceRange, StayQuote)
//! - Booking form validation
//! - Domain services (price range, client-side filtering)
//! - Gateway trait (interface to the stay endpoints)

pub mod booking;
pub mod entities;
pub mod gateway;
pub mod services;
pub mod value_objects;
