//! The agents state record observed by the UI

use serde::Serialize;

use crate::types::agent::{AgentRecord, AgentsListResult};
use crate::types::identifiers::AgentId;

/// Kind of gateway operation; each kind has its own busy flag and error field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `agents.list`
    Load,
    /// `agents.create`
    Create,
    /// `agents.delete`
    Delete,
}

impl OperationKind {
    /// Gateway method issued by this kind of operation
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Load => crate::client::methods::AGENTS_LIST,
            Self::Create => crate::client::methods::AGENTS_CREATE,
            Self::Delete => crate::client::methods::AGENTS_DELETE,
        }
    }
}

/// Client-visible state of the agents view
///
/// Readers may observe it mid-operation, e.g. `agents_loading` set while
/// `agents_list` still holds the previous fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsState {
    /// Whether the gateway client is usable
    pub connected: bool,
    /// `agents.list` in flight
    pub agents_loading: bool,
    /// Last `agents.list` failure
    pub agents_error: Option<String>,
    /// Last successfully fetched list
    pub agents_list: Option<AgentsListResult>,
    /// Currently selected agent
    pub agents_selected_id: Option<AgentId>,
    /// `agents.create` in flight
    pub agent_creating: bool,
    /// Last `agents.create` failure
    pub agent_create_error: Option<String>,
    /// `agents.delete` in flight
    pub agent_deleting: bool,
    /// Last `agents.delete` failure
    pub agent_delete_error: Option<String>,
}

impl AgentsState {
    /// Whether an operation of this kind is in flight
    #[must_use]
    pub const fn is_in_flight(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::Load => self.agents_loading,
            OperationKind::Create => self.agent_creating,
            OperationKind::Delete => self.agent_deleting,
        }
    }

    /// Last failure recorded for this kind
    #[must_use]
    pub fn error(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Load => self.agents_error.as_deref(),
            OperationKind::Create => self.agent_create_error.as_deref(),
            OperationKind::Delete => self.agent_delete_error.as_deref(),
        }
    }

    /// Whether any operation is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.agents_loading || self.agent_creating || self.agent_deleting
    }

    /// The selected agent's record, if the list has been loaded
    #[must_use]
    pub fn selected_agent(&self) -> Option<&AgentRecord> {
        let selected = self.agents_selected_id.as_ref()?;
        self.agents_list.as_ref()?.get(selected)
    }

    /// Listed agents, empty before the first fetch
    #[must_use]
    pub fn agents(&self) -> &[AgentRecord] {
        match &self.agents_list {
            Some(list) => &list.agents,
            None => &[],
        }
    }

    pub(crate) fn set_in_flight(&mut self, kind: OperationKind, value: bool) {
        match kind {
            OperationKind::Load => self.agents_loading = value,
            OperationKind::Create => self.agent_creating = value,
            OperationKind::Delete => self.agent_deleting = value,
        }
    }

    pub(crate) fn set_error(&mut self, kind: OperationKind, error: Option<String>) {
        match kind {
            OperationKind::Load => self.agents_error = error,
            OperationKind::Create => self.agent_create_error = error,
            OperationKind::Delete => self.agent_delete_error = error,
        }
    }
}
