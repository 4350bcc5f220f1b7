//! Domain Layer
//!
//! Session state, user, route classification and gateway traits.

pub mod entity;
pub mod gateway;
pub mod route;
pub mod value_object;

// Re-exports
pub use entity::{session::Session, user::User};
pub use gateway::AccountGateway;
pub use route::{EdgeDecision, RouteClass, RouteTable, SessionSignal};
