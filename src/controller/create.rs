//! Agent creation

use crate::client::GatewayClient;
use crate::store::{AgentsEvent, InFlight, OperationKind};
use crate::types::agent::{CreateAgentParams, CreateAgentResult};

use super::core::AgentsController;

impl<C: GatewayClient> AgentsController<C> {
    /// Create an agent named `name`, select it, and refresh the list
    ///
    /// The new agent is selected as soon as the gateway returns its id. The
    /// refresh that follows keeps that selection only if the gateway lists the
    /// agent. Failures land in `agent_create_error` and leave everything else
    /// untouched.
    pub async fn create_agent(&self, name: &str) {
        let Some(client) = self.client() else {
            log::trace!("agents.create skipped: no client");
            return;
        };
        let Some(_slot) = InFlight::acquire(&self.store, OperationKind::Create) else {
            log::trace!("agents.create skipped: disconnected or already creating");
            return;
        };

        let params = CreateAgentParams {
            name: name.to_string(),
        };
        match Self::call::<_, CreateAgentResult>(&client, OperationKind::Create, &params).await {
            Ok(result) => {
                let Some(agent_id) = result.and_then(CreateAgentResult::into_agent_id) else {
                    log::debug!("agents.create returned no agent id");
                    return;
                };
                log::info!("Created agent {agent_id} ({name})");
                self.store.dispatch(AgentsEvent::AgentCreated(agent_id));
                self.load_agents().await;
            }
            Err(e) => self.record_failure(OperationKind::Create, &e),
        }
    }
}
