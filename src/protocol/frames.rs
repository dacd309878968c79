//! Gateway frame types
//!
//! Every line on the wire is one JSON frame tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::types::identifiers::RequestId;

/// Request from client to gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "req")]
pub struct RequestFrame {
    /// Unique request identifier
    pub id: RequestId,
    /// Gateway method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Error body of a failed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorShape {
    /// Machine-readable error code
    #[serde(default = "ErrorShape::unknown_code")]
    pub code: String,
    /// Human-readable message
    #[serde(default = "ErrorShape::default_message")]
    pub message: String,
}

impl ErrorShape {
    fn unknown_code() -> String {
        "UNKNOWN".to_string()
    }

    fn default_message() -> String {
        "request failed".to_string()
    }
}

impl Default for ErrorShape {
    fn default() -> Self {
        Self {
            code: Self::unknown_code(),
            message: Self::default_message(),
        }
    }
}

/// Response from gateway to client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFrame {
    /// Request ID this responds to
    pub id: RequestId,
    /// Whether the request succeeded
    pub ok: bool,
    /// Result payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Error details when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorShape>,
}

impl ResponseFrame {
    /// Successful response
    #[must_use]
    pub fn success(id: RequestId, payload: Option<serde_json::Value>) -> Self {
        Self {
            id,
            ok: true,
            payload,
            error: None,
        }
    }

    /// Failed response
    pub fn failure(id: RequestId, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            ok: false,
            payload: None,
            error: Some(ErrorShape {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// Unsolicited event pushed by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFrame {
    /// Event name
    pub event: String,
    /// Event payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Gateway sequence number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

/// Any frame the gateway may send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundFrame {
    /// Response to a request
    #[serde(rename = "res")]
    Response(ResponseFrame),
    /// Pushed event
    #[serde(rename = "event")]
    Event(EventFrame),
}
