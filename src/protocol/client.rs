//! `FrameClient`: a [`GatewayClient`] over newline-delimited JSON frames

use tokio::sync::mpsc;

use crate::client::GatewayClient;
use crate::error::{GatewayError, Result};
use crate::types::identifiers::RequestId;
use crate::types::options::GatewayOptions;

use super::frames::EventFrame;
use super::handler::{ProtocolHandler, into_result};

/// Gateway client that writes request lines to an outbound channel and is fed
/// response lines by whoever owns the connection
///
/// ```text
///   request() ──frame──▶ outbound mpsc ──▶ socket writer
///       ▲                                        │
///       └── oneshot ◀── handle_incoming() ◀── socket reader
/// ```
pub struct FrameClient {
    handler: ProtocolHandler,
    outbound: mpsc::UnboundedSender<String>,
    options: GatewayOptions,
}

impl FrameClient {
    /// Create a client and the receiver its outbound lines are written to
    ///
    /// # Errors
    /// Returns error if the options are invalid
    pub fn new(options: GatewayOptions) -> Result<(Self, mpsc::UnboundedReceiver<String>)> {
        options.validate()?;
        let (outbound, outbound_rx) = mpsc::unbounded_channel();
        let client = Self {
            handler: ProtocolHandler::new(options.max_pending_requests),
            outbound,
            options,
        };
        Ok((client, outbound_rx))
    }

    /// Feed one line received from the gateway
    ///
    /// Returns the event if the line was an event frame.
    ///
    /// # Errors
    /// Returns error if the line is not a valid frame
    pub fn handle_incoming(&self, line: &str) -> Result<Option<EventFrame>> {
        let frame = self.handler.deserialize_frame(line)?;
        Ok(self.handler.handle_frame(frame))
    }

    /// Fail every in-flight request because the connection went away
    pub fn connection_lost(&self, reason: &str) -> usize {
        let failed = self.handler.fail_all(reason);
        if failed > 0 {
            log::warn!(
                "[{}] connection lost, failed {} pending request(s): {}",
                self.options.label(),
                failed,
                reason
            );
        }
        failed
    }

    /// Whether the outbound side is still being read
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.outbound.is_closed()
    }

    /// Number of requests awaiting a response
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.handler.pending_count()
    }

    /// Options this client was built with
    #[must_use]
    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }
}

impl GatewayClient for FrameClient {
    async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Option<serde_json::Value>> {
        let frame = self.handler.create_request(method, params);
        let line = self.handler.serialize_request(&frame)?;
        let response_rx = self.handler.register(&frame)?;
        let _pending = PendingGuard {
            handler: &self.handler,
            id: &frame.id,
        };

        if self.outbound.send(line).is_err() {
            return Err(GatewayError::connection(format!(
                "{method}: outbound channel closed"
            )));
        }
        log::debug!("[{}] -> {} ({})", self.options.label(), method, frame.id);

        let response = response_rx.await.map_err(|_| {
            GatewayError::connection(format!("{method}: response channel dropped"))
        })??;
        into_result(method, response)
    }
}

/// Removes a registered request from the pending map when its caller goes
/// away, whether it returned or its future was dropped mid-wait
struct PendingGuard<'a> {
    handler: &'a ProtocolHandler,
    id: &'a RequestId,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.handler.forget(self.id) {
            log::trace!("Abandoned pending request {}", self.id);
        }
    }
}
