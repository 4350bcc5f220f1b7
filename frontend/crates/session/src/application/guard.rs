//! Route Guards
//!
//! Page-level counterparts of the edge filter, decided from the session
//! store rather than the cookie. While the initial lookup is running, pages
//! show a placeholder instead of flashing the wrong content.

use crate::application::config::SessionConfig;
use crate::domain::entity::session::Session;
use crate::domain::route::login_redirect;
use crate::domain::value_object::redirect_target::RedirectTarget;

/// What a guarded page should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading
    Placeholder,
    /// Navigate elsewhere
    Redirect(String),
    Render,
}

/// Guard for pages that need a logged-in visitor
pub fn require_auth(session: &Session, current_path: &str, config: &SessionConfig) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Placeholder;
    }
    if !session.is_authenticated {
        return GuardDecision::Redirect(login_redirect(&config.login_page, current_path));
    }
    GuardDecision::Render
}

/// Guard for pages only guests should see (login, register)
///
/// `redirect` is the raw `?redirect=` value; unsafe targets fall back to the
/// guest landing page.
pub fn require_guest(
    session: &Session,
    redirect: Option<&str>,
    config: &SessionConfig,
) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Placeholder;
    }
    if session.is_authenticated {
        let target = RedirectTarget::or_default(redirect, &config.guest_landing_page);
        return GuardDecision::Redirect(target.as_str().to_string());
    }
    GuardDecision::Render
}
