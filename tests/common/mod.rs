//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::sync::mpsc;

use kodegen_gateway_agents::client::GatewayClient;
use kodegen_gateway_agents::{FrameClient, GatewayError, GatewayOptions, Result};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build an `agents.list` payload from `(id, name)` pairs
pub fn list_payload(agents: &[(&str, &str)], default_id: Option<&str>) -> Value {
    let agents: Vec<Value> = agents
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    match default_id {
        Some(default_id) => json!({ "agents": agents, "defaultId": default_id }),
        None => json!({ "agents": agents }),
    }
}

// ============================================================================
// Scripted client
// ============================================================================

/// Client answering each method from a queue of canned replies
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<HashMap<String, VecDeque<Result<Option<Value>>>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, method: &str, reply: Result<Option<Value>>) {
        self.replies
            .lock()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply(&self, method: &str, payload: Value) {
        self.push(method, Ok(Some(payload)));
    }

    pub fn reply_empty(&self, method: &str) {
        self.push(method, Ok(None));
    }

    pub fn fail(&self, method: &str, code: &str, message: &str) {
        self.push(method, Err(GatewayError::request(method, code, message)));
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(method, _)| method.clone()).collect()
    }
}

impl GatewayClient for ScriptedClient {
    async fn request(&self, method: &str, params: Value) -> Result<Option<Value>> {
        self.calls.lock().push((method.to_string(), params));
        let reply = self
            .replies
            .lock()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        reply.unwrap_or_else(|| Err(GatewayError::request(method, "UNSCRIPTED", "no reply")))
    }
}

// ============================================================================
// Frame harness
// ============================================================================

/// A `FrameClient` whose gateway side is driven by the test
pub struct GatewayHarness {
    pub client: Arc<FrameClient>,
    outbound: mpsc::UnboundedReceiver<String>,
}

impl GatewayHarness {
    pub fn new() -> Self {
        Self::with_options(GatewayOptions::builder().client_label("test").build())
    }

    pub fn with_options(options: GatewayOptions) -> Self {
        let (client, outbound) = FrameClient::new(options).expect("valid options");
        Self {
            client: Arc::new(client),
            outbound,
        }
    }

    /// Wait for the next request line and parse it
    pub async fn next_request(&mut self) -> Value {
        let line = self.outbound.recv().await.expect("outbound open");
        assert!(line.ends_with('\n'));
        serde_json::from_str(&line).expect("request frame is JSON")
    }

    /// Whether no request line is waiting
    pub fn is_idle(&mut self) -> bool {
        self.outbound.try_recv().is_err()
    }

    pub async fn respond(&self, request: &Value, payload: Value) {
        let frame = json!({ "type": "res", "id": request["id"], "ok": true, "payload": payload });
        self.feed(frame).await;
    }

    pub async fn respond_error(&self, request: &Value, code: &str, message: &str) {
        let frame = json!({
            "type": "res",
            "id": request["id"],
            "ok": false,
            "error": { "code": code, "message": message }
        });
        self.feed(frame).await;
    }

    pub async fn feed(&self, frame: Value) {
        let event = self
            .client
            .handle_incoming(&frame.to_string())
            .expect("valid frame");
        assert!(event.is_none());
    }

    pub fn close(&mut self) {
        self.outbound.close();
    }
}
