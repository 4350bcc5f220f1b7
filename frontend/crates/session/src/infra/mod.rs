//! Infrastructure Layer
//!
//! Gateway implementations over the authenticated request wrapper, and the
//! live client that wires them to `reqwest`.

pub mod accounts_api;
pub mod live;

pub use accounts_api::AccountsApi;
pub use live::{LiveClient, SessionClient};
