//! Agents store
//!
//! The store holds the single [`AgentsState`] of a UI session. Every change
//! goes through [`AgentsStore::dispatch`], which runs the pure [`reduce`]
//! function under the channel's lock and notifies subscribers only when the
//! state actually changed.
//!
//! # Example
//!
//! ```rust
//! use kodegen_gateway_agents::store::{AgentsEvent, AgentsStore, OperationKind};
//!
//! let store = AgentsStore::new();
//! // Not connected yet: the slot cannot be claimed.
//! assert!(!store.dispatch(AgentsEvent::Begin(OperationKind::Load)));
//!
//! store.dispatch(AgentsEvent::Connected);
//! assert!(store.dispatch(AgentsEvent::Begin(OperationKind::Load)));
//! // Second claim while in flight is a no-op.
//! assert!(!store.dispatch(AgentsEvent::Begin(OperationKind::Load)));
//! ```

mod event;
mod reducer;
mod state;

use tokio::sync::watch;

pub use event::AgentsEvent;
pub use reducer::{reconcile_selection, reduce};
pub use state::{AgentsState, OperationKind};

/// Observable container for the agents state
pub struct AgentsStore {
    tx: watch::Sender<AgentsState>,
}

impl AgentsStore {
    /// Create a store with the default (disconnected, empty) state
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AgentsState::default())
    }

    /// Create a store starting from `state`
    #[must_use]
    pub fn with_state(state: AgentsState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Apply an event; returns whether the state changed
    pub fn dispatch(&self, event: AgentsEvent) -> bool {
        log::trace!("dispatch {event:?}");
        self.tx.send_if_modified(|state| {
            let next = reduce(state.clone(), event);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Clone of the current state
    #[must_use]
    pub fn snapshot(&self) -> AgentsState {
        self.tx.borrow().clone()
    }

    /// Read the current state without cloning it
    ///
    /// `f` must not dispatch; the state is read-locked while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&AgentsState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver notified after every effective change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AgentsState> {
        self.tx.subscribe()
    }
}

impl Default for AgentsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Claimed in-flight slot of one operation kind
///
/// The slot is released when the guard drops, whichever way the operation
/// ends.
pub(crate) struct InFlight<'a> {
    store: &'a AgentsStore,
    kind: OperationKind,
}

impl<'a> InFlight<'a> {
    /// Claim the slot, or `None` when disconnected or already taken
    pub(crate) fn acquire(store: &'a AgentsStore, kind: OperationKind) -> Option<Self> {
        store
            .dispatch(AgentsEvent::Begin(kind))
            .then(|| Self { store, kind })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.store.dispatch(AgentsEvent::Settle(self.kind));
    }
}
