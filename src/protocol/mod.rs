//! Gateway frame protocol
//!
//! Requests, responses, and events travel as one JSON object per line:
//!
//! ```text
//! {"type":"req","id":"…","method":"agents.list","params":{}}
//! {"type":"res","id":"…","ok":true,"payload":{"agents":[…]}}
//! {"type":"res","id":"…","ok":false,"error":{"code":"NOT_FOUND","message":"…"}}
//! {"type":"event","event":"presence","payload":{…},"seq":7}
//! ```
//!
//! # Example: Driving a `FrameClient`
//!
//! ```rust
//! use kodegen_gateway_agents::client::GatewayClient;
//! use kodegen_gateway_agents::{FrameClient, GatewayOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (client, mut outbound) = FrameClient::new(GatewayOptions::default())?;
//!
//! let (result, ()) = tokio::join!(
//!     client.request("agents.list", serde_json::json!({})),
//!     async {
//!         let line = outbound.recv().await.expect("request line");
//!         let req: serde_json::Value = serde_json::from_str(&line).expect("json");
//!         let res = serde_json::json!({
//!             "type": "res",
//!             "id": req["id"],
//!             "ok": true,
//!             "payload": { "agents": [] }
//!         });
//!         client.handle_incoming(&res.to_string()).expect("frame");
//!     }
//! );
//! assert!(result?.is_some());
//! # Ok(())
//! # }
//! ```

mod client;
mod frames;
mod handler;

// Re-export public types
pub use client::FrameClient;
pub use frames::{ErrorShape, EventFrame, InboundFrame, RequestFrame, ResponseFrame};
pub use handler::{ProtocolHandler, into_result};
