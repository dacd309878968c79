//! Events dispatched to the agents store

use crate::types::agent::AgentsListResult;
use crate::types::identifiers::AgentId;

use super::state::OperationKind;

/// A state transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentsEvent {
    /// Gateway client became usable
    Connected,
    /// Gateway client became unusable
    Disconnected,
    /// Claim the in-flight slot of a kind and clear its stale error
    ///
    /// Ignored when not connected or when the slot is already taken. Within
    /// [`AgentsController`](crate::AgentsController) only its in-flight
    /// guards dispatch this.
    Begin(OperationKind),
    /// Release the in-flight slot of a kind
    ///
    /// Pairs with a successful [`AgentsEvent::Begin`]; a stray release lets a
    /// second operation of the kind start.
    Settle(OperationKind),
    /// Record a failure for a kind
    Failed(OperationKind, String),
    /// `agents.list` answered; `None` when the gateway sent no payload
    ListLoaded(Option<AgentsListResult>),
    /// `agents.create` returned the new agent's id
    AgentCreated(AgentId),
    /// `agents.delete` succeeded for this id
    AgentDeleted(AgentId),
    /// User picked an agent
    AgentSelected(AgentId),
    /// User cleared the selection
    SelectionCleared,
}
