//! Agents controller
//!
//! Provides `AgentsController`, which issues the `agents.*` gateway methods
//! and turns their outcomes into [`AgentsEvent`](crate::store::AgentsEvent)s
//! on its store.
//!
//! # Module Structure
//!
//! - `core` - `AgentsController` struct, client slot, connection lifecycle
//! - `list` - `load_agents`
//! - `create` - `create_agent`
//! - `delete` - `delete_agent`
//! - `selection` - manual selection

mod core;
mod create;
mod delete;
mod list;
mod selection;

pub use self::core::AgentsController;
