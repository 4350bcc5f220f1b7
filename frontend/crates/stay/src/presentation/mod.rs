//! Presentation Layer
//!
//! Wire DTOs for the stay endpoints.

pub mod dto;
