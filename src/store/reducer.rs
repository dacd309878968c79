//! Pure state transitions

use crate::types::agent::AgentsListResult;
use crate::types::identifiers::AgentId;

use super::event::AgentsEvent;
use super::state::AgentsState;

/// Apply one event to a state, producing the next state
///
/// Events that are not applicable (a `Begin` while disconnected or already in
/// flight, a selection of an unlisted agent) return the state unchanged.
#[must_use]
pub fn reduce(mut state: AgentsState, event: AgentsEvent) -> AgentsState {
    match event {
        AgentsEvent::Connected => state.connected = true,
        AgentsEvent::Disconnected => state.connected = false,
        AgentsEvent::Begin(kind) => {
            if !state.connected || state.is_in_flight(kind) {
                return state;
            }
            state.set_in_flight(kind, true);
            state.set_error(kind, None);
        }
        AgentsEvent::Settle(kind) => state.set_in_flight(kind, false),
        AgentsEvent::Failed(kind, message) => state.set_error(kind, Some(message)),
        AgentsEvent::ListLoaded(Some(result)) => {
            state.agents_selected_id = reconcile_selection(state.agents_selected_id.take(), &result);
            state.agents_list = Some(result);
        }
        AgentsEvent::ListLoaded(None) => {}
        AgentsEvent::AgentCreated(id) => state.agents_selected_id = Some(id),
        AgentsEvent::AgentDeleted(id) => {
            if state.agents_selected_id.as_ref() == Some(&id) {
                state.agents_selected_id = None;
            }
        }
        AgentsEvent::AgentSelected(id) => {
            let known = state
                .agents_list
                .as_ref()
                .is_none_or(|list| list.contains(&id));
            if known && !id.is_empty() {
                state.agents_selected_id = Some(id);
            }
        }
        AgentsEvent::SelectionCleared => state.agents_selected_id = None,
    }
    state
}

/// Selection to keep after a list fetch
///
/// A current selection that is listed survives. Otherwise the gateway's
/// default wins, then the first listed agent, then nothing.
///
/// The gateway's `default_id` is trusted as-is, even when it is not among
/// `agents`; manual selection through [`AgentsEvent::AgentSelected`] is
/// stricter and only accepts listed ids.
#[must_use]
pub fn reconcile_selection(current: Option<AgentId>, result: &AgentsListResult) -> Option<AgentId> {
    if let Some(current) = current
        && !current.is_empty()
        && result.contains(&current)
    {
        return Some(current);
    }
    result
        .default_id
        .clone()
        .or_else(|| result.agents.first().map(|agent| agent.id.clone()))
}
