//! Type definitions for the gateway agents controller
//!
//! - [`identifiers`] - Type-safe ID wrappers (`AgentId`, `RequestId`)
//! - [`agent`] - Agent records and `agents.*` method payloads
//! - [`options`] - Gateway client configuration

pub mod agent;
pub mod identifiers;
pub mod options;

// Re-export commonly used types
pub use agent::{
    AgentRecord, AgentsListResult, CreateAgentParams, CreateAgentResult, DeleteAgentParams,
};
pub use identifiers::{AgentId, RequestId};
pub use options::{GatewayOptions, GatewayOptionsBuilder};
