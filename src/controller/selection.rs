//! Manual selection

use crate::store::AgentsEvent;
use crate::types::agent::AgentRecord;
use crate::types::identifiers::AgentId;

use super::core::AgentsController;

impl<C> AgentsController<C> {
    /// Select an agent
    ///
    /// Accepted before the first fetch or when the agent is listed. Returns
    /// whether the selection changed.
    pub fn select_agent(&self, agent_id: &AgentId) -> bool {
        self.store.dispatch(AgentsEvent::AgentSelected(agent_id.clone()))
    }

    /// Clear the selection
    pub fn clear_selection(&self) -> bool {
        self.store.dispatch(AgentsEvent::SelectionCleared)
    }

    /// Record of the selected agent
    #[must_use]
    pub fn selected_agent(&self) -> Option<AgentRecord> {
        self.store.with(|state| state.selected_agent().cloned())
    }
}
