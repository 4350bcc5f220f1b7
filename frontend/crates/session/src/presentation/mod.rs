//! Presentation Layer
//!
//! Wire DTOs and the edge redirect middleware.

pub mod dto;
pub mod middleware;

pub use dto::{Envelope, MeResponse};
pub use middleware::{EdgeState, edge_redirect};
