//! Gateway client abstraction
//!
//! The controller talks to the gateway through a single capability: issue a
//! named request with a JSON parameter object and wait for an optional JSON
//! result. How the request travels is up to the implementation.
//! [`FrameClient`](crate::FrameClient) is the in-crate implementation over
//! newline-delimited JSON frames.
//!
//! # Example: A custom client
//!
//! ```rust
//! use kodegen_gateway_agents::client::GatewayClient;
//! use kodegen_gateway_agents::Result;
//!
//! struct Offline;
//!
//! impl GatewayClient for Offline {
//!     async fn request(
//!         &self,
//!         method: &str,
//!         _params: serde_json::Value,
//!     ) -> Result<Option<serde_json::Value>> {
//!         Err(kodegen_gateway_agents::GatewayError::connection(format!(
//!             "{method}: offline"
//!         )))
//!     }
//! }
//! ```

pub mod methods;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Request/response capability of a gateway connection
pub trait GatewayClient: Send + Sync {
    /// Issue `method` with `params` and wait for its result
    ///
    /// `Ok(None)` means the gateway answered successfully without a payload.
    ///
    /// # Errors
    /// Returns error on transport failure or when the gateway rejects the request
    fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>>> + Send;
}

/// Issue a request and decode its result into `T`
///
/// A missing or `null` payload decodes to `None`.
///
/// # Errors
/// Returns error if the request fails or the payload does not match `T`
pub async fn request_as<C, T>(
    client: &C,
    method: &str,
    params: serde_json::Value,
) -> Result<Option<T>>
where
    C: GatewayClient,
    T: DeserializeOwned,
{
    match client.request(method, params).await? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(payload) => Ok(Some(serde_json::from_value(payload)?)),
    }
}
