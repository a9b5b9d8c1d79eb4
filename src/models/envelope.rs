//! Result envelopes.
//!
//! Every operation resolves to one of two shapes: a normalized
//! `{code, message, data}` envelope produced by the client, or the
//! upstream error body passed through untouched.

use serde::{Deserialize, Serialize};

/// Normalized result envelope.
///
/// `code` mirrors the semantic outcome of the call. For locally detected
/// failures and message-only outcomes `data` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Semantic outcome code. Usually, but not always, the transport status.
    pub code: u16,
    /// Human-readable outcome message.
    pub message: String,
    /// Payload, when the outcome carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build an envelope with a payload.
    pub(crate) fn with_data(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a message-only envelope.
    pub(crate) fn message_only(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// A field-level validation problem reported by the upstream service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field name.
    pub field: String,
    /// Where the field was read from ("body", ...).
    pub location: String,
    /// Human-readable problem descriptions.
    pub messages: Vec<String>,
    /// Machine-readable problem tags ("any.empty", "string.email", ...).
    pub types: Vec<String>,
}

/// An upstream error body, passed through without rewrapping.
///
/// Unknown fields are retained so the body survives a round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamError {
    /// Upstream outcome code.
    #[serde(default)]
    pub code: u16,
    /// Upstream message.
    #[serde(default)]
    pub message: String,
    /// Field-level validation problems, when present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    /// Any remaining fields the upstream sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Outcome of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// Normalized envelope produced by the client.
    Envelope(Envelope<T>),
    /// Upstream error body returned as-is.
    Upstream(UpstreamError),
}

impl<T> ApiResponse<T> {
    /// The outcome code, from whichever shape was produced.
    pub fn code(&self) -> u16 {
        match self {
            ApiResponse::Envelope(e) => e.code,
            ApiResponse::Upstream(u) => u.code,
        }
    }

    /// The outcome message.
    pub fn message(&self) -> &str {
        match self {
            ApiResponse::Envelope(e) => &e.message,
            ApiResponse::Upstream(u) => &u.message,
        }
    }

    /// The normalized payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Envelope(e) => e.data.as_ref(),
            ApiResponse::Upstream(_) => None,
        }
    }

    /// Consume the response, keeping the envelope if that is what it was.
    pub fn into_envelope(self) -> Option<Envelope<T>> {
        match self {
            ApiResponse::Envelope(e) => Some(e),
            ApiResponse::Upstream(_) => None,
        }
    }

    /// Check if the upstream body was passed through.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ApiResponse::Upstream(_))
    }
}
