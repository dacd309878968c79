//! Agent list loading

use crate::client::GatewayClient;
use crate::store::{AgentsEvent, InFlight, OperationKind};
use crate::types::agent::AgentsListResult;

use super::core::AgentsController;

impl<C: GatewayClient> AgentsController<C> {
    /// Fetch the agent list and reconcile the selection against it
    ///
    /// Does nothing when no client is attached, the state is disconnected, or
    /// a load is already in flight. Failures land in `agents_error`.
    pub async fn load_agents(&self) {
        let Some(client) = self.client() else {
            log::trace!("agents.list skipped: no client");
            return;
        };
        let Some(_slot) = InFlight::acquire(&self.store, OperationKind::Load) else {
            log::trace!("agents.list skipped: disconnected or already loading");
            return;
        };

        let params = serde_json::json!({});
        match Self::call::<_, AgentsListResult>(&client, OperationKind::Load, &params).await {
            Ok(result) => {
                if let Some(list) = &result {
                    log::debug!("Loaded {} agent(s)", list.agents.len());
                }
                self.store.dispatch(AgentsEvent::ListLoaded(result));
            }
            Err(e) => self.record_failure(OperationKind::Load, &e),
        }
    }
}
