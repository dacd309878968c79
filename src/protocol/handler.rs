//! Protocol handler correlating gateway responses with pending requests

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::{GatewayError, Result};
use crate::types::identifiers::RequestId;

use super::frames::{EventFrame, InboundFrame, RequestFrame, ResponseFrame};

/// Pending request awaiting response
struct PendingRequest {
    /// Method, kept for error reporting
    method: String,
    /// Response channel
    response_tx: oneshot::Sender<Result<ResponseFrame>>,
}

/// Protocol handler for the gateway frame protocol
pub struct ProtocolHandler {
    /// Pending requests awaiting responses
    pending_requests: Mutex<HashMap<RequestId, PendingRequest>>,
    /// Limit on `pending_requests`
    max_pending: usize,
}

impl ProtocolHandler {
    /// Create a new protocol handler
    #[must_use]
    pub fn new(max_pending: usize) -> Self {
        Self {
            pending_requests: Mutex::new(HashMap::new()),
            max_pending,
        }
    }

    /// Create a request frame with a fresh id
    #[must_use]
    pub fn create_request(
        &self,
        method: impl Into<String>,
        params: serde_json::Value,
    ) -> RequestFrame {
        RequestFrame {
            id: RequestId::generate(),
            method: method.into(),
            params,
        }
    }

    /// Register a request as pending and get the channel its response arrives on
    ///
    /// # Errors
    /// Returns error if the pending limit is reached
    pub fn register(
        &self,
        request: &RequestFrame,
    ) -> Result<oneshot::Receiver<Result<ResponseFrame>>> {
        let (response_tx, response_rx) = oneshot::channel();

        let mut pending_requests = self.pending_requests.lock();
        if pending_requests.len() >= self.max_pending {
            return Err(GatewayError::too_many_pending(self.max_pending));
        }
        pending_requests.insert(
            request.id.clone(),
            PendingRequest {
                method: request.method.clone(),
                response_tx,
            },
        );

        Ok(response_rx)
    }

    /// Drop a pending request without resolving it
    ///
    /// Returns whether the request was still pending.
    pub fn forget(&self, id: &RequestId) -> bool {
        self.pending_requests.lock().remove(id).is_some()
    }

    /// Number of requests awaiting a response
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending_requests.lock().len()
    }

    /// Handle one inbound frame
    ///
    /// Responses resolve their pending request; responses for unknown ids are
    /// ignored. Events are handed back to the caller.
    pub fn handle_frame(&self, frame: InboundFrame) -> Option<EventFrame> {
        match frame {
            InboundFrame::Response(response) => {
                let pending = self.pending_requests.lock().remove(&response.id);
                match pending {
                    Some(pending) => {
                        log::trace!("Response for {} ({})", response.id, pending.method);
                        let _ = pending.response_tx.send(Ok(response));
                    }
                    None => {
                        log::debug!("Ignoring response for unknown request {}", response.id);
                    }
                }
                None
            }
            InboundFrame::Event(event) => Some(event),
        }
    }

    /// Fail every pending request, e.g. after the connection dropped
    ///
    /// Returns the number of requests that were failed.
    pub fn fail_all(&self, reason: &str) -> usize {
        let drained: Vec<PendingRequest> = {
            let mut pending_requests = self.pending_requests.lock();
            pending_requests.drain().map(|(_, pending)| pending).collect()
        };

        let count = drained.len();
        for pending in drained {
            let _ = pending.response_tx.send(Err(GatewayError::connection(format!(
                "{}: {reason}",
                pending.method
            ))));
        }
        count
    }

    /// Serialize a request frame to a JSON line
    ///
    /// # Errors
    /// Returns error if JSON serialization fails
    pub fn serialize_request(&self, request: &RequestFrame) -> Result<String> {
        serde_json::to_string(request)
            .map(|s| format!("{s}\n"))
            .map_err(GatewayError::from)
    }

    /// Deserialize an inbound frame from a JSON line
    ///
    /// # Errors
    /// Returns error if the line is not a valid gateway frame
    pub fn deserialize_frame(&self, json: &str) -> Result<InboundFrame> {
        serde_json::from_str(json.trim())
            .map_err(|e| GatewayError::protocol(format!("Failed to deserialize frame: {e}")))
    }
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new(crate::types::options::DEFAULT_MAX_PENDING_REQUESTS)
    }
}

/// Turn a settled response into the request's result
///
/// # Errors
/// Returns a request error when the gateway reported failure
pub fn into_result(method: &str, response: ResponseFrame) -> Result<Option<serde_json::Value>> {
    if response.ok {
        return Ok(response.payload);
    }
    let error = response.error.unwrap_or_default();
    Err(GatewayError::request(method, error.code, error.message))
}
