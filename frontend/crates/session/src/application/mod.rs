//! Application Layer
//!
//! Session store, refresh coordination, route guards and account use cases.

pub mod bootstrap;
pub mod config;
pub mod guard;
pub mod reauth_client;
pub mod refresh_gate;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod store;

#[cfg(test)]
pub(crate) mod fakes;

// Re-exports
pub use bootstrap::BootstrapSessionUseCase;
pub use config::SessionConfig;
pub use guard::{GuardDecision, require_auth, require_guest};
pub use reauth_client::ReauthClient;
pub use refresh_gate::{RefreshGate, RefreshOutcome, RefreshTicket};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use store::SessionStore;
