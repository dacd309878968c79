//! Core controller structure and connection lifecycle

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::client::{GatewayClient, request_as};
use crate::error::{GatewayError, Result};
use crate::store::{AgentsEvent, AgentsState, AgentsStore, OperationKind};

// ============================================================================
// AGENTS CONTROLLER CORE
// ============================================================================

/// Controller for the agents of one gateway session
///
/// Holds the injected gateway client and the observable [`AgentsState`].
/// Operations take `&self`, so different kinds can be awaited concurrently;
/// each kind runs at most once at a time.
///
/// The store is private to the controller: state changes only through the
/// controller's methods, so in-flight slots cannot be released from outside.
///
/// ```rust,compile_fail
/// use kodegen_gateway_agents::{AgentsController, FrameClient};
/// use kodegen_gateway_agents::store::{AgentsEvent, OperationKind};
///
/// fn release(controller: &AgentsController<FrameClient>) {
///     controller.store().dispatch(AgentsEvent::Settle(OperationKind::Load));
/// }
/// ```
pub struct AgentsController<C> {
    client: RwLock<Option<Arc<C>>>,
    pub(crate) store: AgentsStore,
}

impl<C> AgentsController<C> {
    /// Create a controller with no client and a disconnected state
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: RwLock::new(None),
            store: AgentsStore::new(),
        }
    }

    /// Create a controller already connected through `client`
    #[must_use]
    pub fn with_client(client: Arc<C>) -> Self {
        let controller = Self::new();
        controller.connect(client);
        controller
    }

    /// Attach a client and mark the state connected
    pub fn connect(&self, client: Arc<C>) {
        *self.client.write() = Some(client);
        self.store.dispatch(AgentsEvent::Connected);
        log::info!("Agents controller connected");
    }

    /// Detach the client and mark the state disconnected
    ///
    /// Operations already in flight keep their client and settle normally.
    pub fn disconnect(&self) -> Option<Arc<C>> {
        let client = self.client.write().take();
        self.store.dispatch(AgentsEvent::Disconnected);
        log::info!("Agents controller disconnected");
        client
    }

    /// Flip connectivity without touching the attached client
    pub fn set_connected(&self, connected: bool) {
        let event = if connected {
            AgentsEvent::Connected
        } else {
            AgentsEvent::Disconnected
        };
        if self.store.dispatch(event) {
            log::debug!("Gateway connectivity changed: connected={connected}");
        }
    }

    /// The attached client
    #[must_use]
    pub fn client(&self) -> Option<Arc<C>> {
        self.client.read().clone()
    }

    /// Clone of the current state
    #[must_use]
    pub fn snapshot(&self) -> AgentsState {
        self.store.snapshot()
    }

    /// Receiver notified on every state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AgentsState> {
        self.store.subscribe()
    }

    pub(crate) fn record_failure(&self, kind: OperationKind, err: &GatewayError) {
        log::warn!("{} failed: {}", kind.method(), err);
        self.store.dispatch(AgentsEvent::Failed(kind, err.to_string()));
    }
}

impl<C: GatewayClient> AgentsController<C> {
    /// Issue the method of `kind` with serialized `params`
    pub(crate) async fn call<P, T>(
        client: &C,
        kind: OperationKind,
        params: &P,
    ) -> Result<Option<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let params = serde_json::to_value(params)?;
        request_as(client, kind.method(), params).await
    }
}

impl<C> Default for AgentsController<C> {
    fn default() -> Self {
        Self::new()
    }
}
