//! Infrastructure Layer
//!
//! Gateway implementation over the authenticated request wrapper.

pub mod api;

pub use api::StayApi;
