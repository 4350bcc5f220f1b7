//! Stay (Listings and Bookings) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Listings, booking form validation, catalog filters, gateway trait
//! - `application/` - Use cases, catalog page state, notices
//! - `infra/` - Stay endpoints over the authenticated request wrapper
//! - `presentation/` - Wire DTOs
//!
//! ## Responsibilities
//! - The backend owns availability, overlaps and pricing rules
//! - The client validates the booking form before submission and shows the
//!   backend's rejection message as-is
//! - City and price filters are applied locally; date filters go to the backend

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StayConfig;
pub use application::{CatalogView, Notice, NoticeLevel};
pub use error::{StayError, StayResult};
pub use infra::api::StayApi;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::booking::*;
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod services {
    pub use crate::domain::services::*;
}
