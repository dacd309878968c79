//! # Gateway Agents Controller
//!
//! Client-side state for the agents a gateway manages: fetching the list,
//! creating and deleting agents, per-operation loading and error fields, and a
//! current selection that always points at a listed agent.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use kodegen_gateway_agents::{AgentsController, FrameClient, GatewayOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (client, _outbound) = FrameClient::new(GatewayOptions::default())?;
//! let controller = AgentsController::with_client(Arc::new(client));
//!
//! // Pump `_outbound` into the gateway socket and feed its lines back
//! // through `FrameClient::handle_incoming`, then:
//! controller.load_agents().await;
//!
//! let state = controller.snapshot();
//! if let Some(error) = &state.agents_error {
//!     log::error!("Could not load agents: {error}");
//! }
//! for agent in state.agents() {
//!     log::info!("{} {}", agent.id, agent.display_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`store`]: [`AgentsState`], [`AgentsEvent`](store::AgentsEvent), the pure
//!   [`reduce`](store::reduce) function, and the observable [`AgentsStore`]
//! - [`controller`]: [`AgentsController`], the side-effecting operations
//!   `load_agents`, `create_agent`, `delete_agent`
//! - [`client`]: the [`GatewayClient`] capability the controller issues
//!   requests through
//! - [`protocol`]: [`FrameClient`], a `GatewayClient` over JSON frames
//! - [`types`]: agent records, method payloads, identifiers, options
//! - [`error`]: [`GatewayError`]
//!
//! ## Error Handling
//!
//! Controller operations never return errors. A failed request is logged and
//! its `Display` text stored in the operation's own field
//! (`agents_error`, `agent_create_error`, `agent_delete_error`), which is
//! cleared when the next attempt of the same kind starts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod store;
pub mod types;

// Re-export commonly used types for external API
pub use client::GatewayClient;
pub use controller::AgentsController;
pub use error::{GatewayError, Result};
pub use protocol::FrameClient;
pub use store::{AgentsState, AgentsStore};

pub use types::agent::{AgentRecord, AgentsListResult};
pub use types::identifiers::{AgentId, RequestId};
pub use types::options::{GatewayOptions, GatewayOptionsBuilder};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
