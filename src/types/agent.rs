//! Agent records and the payloads of the `agents.*` gateway methods

use serde::{Deserialize, Serialize};

use super::identifiers::AgentId;

// ============================================================================
// Agent Records
// ============================================================================

/// One agent as listed by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Agent identity
    pub id: AgentId,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining display attributes, kept verbatim
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl AgentRecord {
    /// Create a record with an id and a display name
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            attributes: serde_json::Map::new(),
        }
    }

    /// Name to show for this agent, falling back to its id
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.id.as_str(),
        }
    }
}

/// Result of `agents.list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsListResult {
    /// Agents in server order
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
    /// Agent the gateway suggests selecting when nothing valid is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_id: Option<AgentId>,
}

impl AgentsListResult {
    /// Whether an agent with this id is listed
    #[must_use]
    pub fn contains(&self, id: &AgentId) -> bool {
        self.agents.iter().any(|agent| &agent.id == id)
    }

    /// Look up a listed agent by id
    #[must_use]
    pub fn get(&self, id: &AgentId) -> Option<&AgentRecord> {
        self.agents.iter().find(|agent| &agent.id == id)
    }
}

// ============================================================================
// Method Payloads
// ============================================================================

/// Params of `agents.create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentParams {
    /// Name of the new agent
    pub name: String,
}

/// Result of `agents.create`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentResult {
    /// Identity of the created agent
    #[serde(default)]
    pub agent_id: Option<AgentId>,
}

impl CreateAgentResult {
    /// The created agent's id, if the gateway returned a usable one
    #[must_use]
    pub fn into_agent_id(self) -> Option<AgentId> {
        self.agent_id.filter(|id| !id.is_empty())
    }
}

/// Params of `agents.delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAgentParams {
    /// Agent to delete
    pub agent_id: AgentId,
}
