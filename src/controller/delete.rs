//! Agent deletion

use crate::client::GatewayClient;
use crate::store::{AgentsEvent, InFlight, OperationKind};
use crate::types::agent::DeleteAgentParams;
use crate::types::identifiers::AgentId;

use super::core::AgentsController;

impl<C: GatewayClient> AgentsController<C> {
    /// Delete an agent and refresh the list
    ///
    /// A deleted selection is cleared before the refresh so the refresh picks
    /// a fresh one. On failure only `agent_delete_error` changes; the agent
    /// stays listed and selected.
    pub async fn delete_agent(&self, agent_id: &AgentId) {
        let Some(client) = self.client() else {
            log::trace!("agents.delete skipped: no client");
            return;
        };
        let Some(_slot) = InFlight::acquire(&self.store, OperationKind::Delete) else {
            log::trace!("agents.delete skipped: disconnected or already deleting");
            return;
        };

        let params = DeleteAgentParams {
            agent_id: agent_id.clone(),
        };
        // Result payload is not used
        match Self::call::<_, serde_json::Value>(&client, OperationKind::Delete, &params).await {
            Ok(_) => {
                log::info!("Deleted agent {agent_id}");
                self.store.dispatch(AgentsEvent::AgentDeleted(agent_id.clone()));
                self.load_agents().await;
            }
            Err(e) => self.record_failure(OperationKind::Delete, &e),
        }
    }
}
