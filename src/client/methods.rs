//! Gateway method names consumed by the controller

/// List agents; params `{}`
pub const AGENTS_LIST: &str = "agents.list";

/// Create an agent; params `{ name }`
pub const AGENTS_CREATE: &str = "agents.create";

/// Delete an agent; params `{ agentId }`
pub const AGENTS_DELETE: &str = "agents.delete";
