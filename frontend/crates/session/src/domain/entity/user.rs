//! User Entity
//!
//! The account the backend reports for the current session.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

/// Authenticated account as returned by the "who am I" endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// "First Last", falling back to the email when both names are blank
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}
