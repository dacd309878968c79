//! Gateway client options and configuration
//!
//! This module contains the configuration options for [`FrameClient`](crate::FrameClient),
//! including a builder pattern for easy configuration.

use crate::error::{GatewayError, Result};

/// Default limit on requests awaiting a response
pub const DEFAULT_MAX_PENDING_REQUESTS: usize = 64;

// ============================================================================
// Gateway Options
// ============================================================================

/// Options for the gateway frame client
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    /// Maximum number of requests awaiting a response at once
    pub max_pending_requests: usize,
    /// Label used to tell clients apart in log lines
    pub client_label: Option<String>,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            max_pending_requests: DEFAULT_MAX_PENDING_REQUESTS,
            client_label: None,
        }
    }
}

impl GatewayOptions {
    /// Create a new builder for `GatewayOptions`
    #[must_use]
    pub fn builder() -> GatewayOptionsBuilder {
        GatewayOptionsBuilder::default()
    }

    /// Check the options for values the client cannot run with
    ///
    /// # Errors
    /// Returns error if `max_pending_requests` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_pending_requests == 0 {
            return Err(GatewayError::invalid_config(
                "max_pending_requests must be at least 1",
            ));
        }
        Ok(())
    }

    /// Label for log lines
    #[must_use]
    pub fn label(&self) -> &str {
        self.client_label.as_deref().unwrap_or("gateway")
    }
}

// ============================================================================
// Builder for GatewayOptions
// ============================================================================

/// Builder for `GatewayOptions`
#[derive(Debug, Default)]
pub struct GatewayOptionsBuilder {
    options: GatewayOptions,
}

impl GatewayOptionsBuilder {
    /// Set the pending request limit
    #[must_use]
    pub const fn max_pending_requests(mut self, limit: usize) -> Self {
        self.options.max_pending_requests = limit;
        self
    }

    /// Set the log label
    #[must_use]
    pub fn client_label(mut self, label: impl Into<String>) -> Self {
        self.options.client_label = Some(label.into());
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> GatewayOptions {
        self.options
    }
}
