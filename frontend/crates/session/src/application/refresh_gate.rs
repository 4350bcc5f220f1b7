//! Refresh Gate
//!
//! Serializes session recovery. The gate keeps an *epoch*, the number of
//! refreshes completed so far. A request takes a ticket (the epoch) before it
//! is sent; when it comes back 401 it presents that ticket:
//!
//! - epoch unchanged: nobody has refreshed since the request left, so this
//!   caller refreshes while holding the lock;
//! - epoch advanced: a refresh already finished after the request left, so
//!   the caller reuses that outcome.
//!
//! Callers arriving while a refresh is running queue on the lock (FIFO) and
//! see the epoch advanced once they get in. At most one refresh is ever in
//! flight, and every request issued before a refresh completes observes the
//! same outcome.

use std::future::Future;

use tokio::sync::Mutex;

/// Result of one refresh attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New credentials were issued; replay the request
    Refreshed,
    /// The refresh credential was refused; the session is over
    Rejected,
}

/// Epoch observed before a request was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
struct GateState {
    epoch: u64,
    last: Option<RefreshOutcome>,
}

/// Mutual exclusion around the refresh call
#[derive(Debug, Default)]
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for any in-flight refresh to finish, then record the epoch
    pub async fn ticket(&self) -> RefreshTicket {
        RefreshTicket(self.state.lock().await.epoch)
    }

    /// Recover from a 401 observed by a request holding `ticket`
    ///
    /// `refresh` runs at most once per epoch, with the lock held.
    pub async fn recover<F, Fut>(&self, ticket: RefreshTicket, refresh: F) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshOutcome>,
    {
        let mut state = self.state.lock().await;

        if state.epoch != ticket.0 {
            if let Some(outcome) = state.last {
                tracing::debug!(epoch = state.epoch, ?outcome, "Reusing completed refresh");
                return outcome;
            }
        }

        let outcome = refresh().await;
        state.epoch += 1;
        state.last = Some(outcome);
        tracing::debug!(epoch = state.epoch, ?outcome, "Refresh completed");
        outcome
    }

    /// Number of refreshes completed so far
    pub async fn epoch(&self) -> u64 {
        self.state.lock().await.epoch
    }
}
