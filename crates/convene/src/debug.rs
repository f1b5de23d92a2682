//! Per-call observability records.
//!
//! A client can install a [`DebugHook`] to receive one [`DebugContext`]
//! per logical call: what was sent, what came back (or which transport
//! error occurred), and how long the exchange took. The hook is purely
//! observational — the pipeline ignores anything it does, and a hook
//! that panics is contained and logged rather than propagated.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

/// Callback invoked once per logical call.
pub type DebugHook = Arc<dyn Fn(&DebugContext) + Send + Sync>;

/// Snapshot of the request as it went on the wire.
#[derive(Debug, Clone)]
pub struct DebugRequest {
    pub method: Method,
    /// Fully resolved URL, query string included.
    pub url: String,
    pub headers: HashMap<String, String>,
    /// The JSON body, present only when one was actually sent.
    pub body: Option<Value>,
}

/// Snapshot of a received response, regardless of status code.
#[derive(Debug, Clone)]
pub struct DebugResponse {
    pub status: u16,
    /// Whether the status was in the 200-299 range.
    pub ok: bool,
    pub headers: HashMap<String, String>,
    /// The interpreted body: parsed JSON, raw text, or `Null`.
    pub body: Value,
}

/// How the exchange ended.
#[derive(Debug, Clone)]
pub enum DebugOutcome {
    /// A response with a 2xx status was received.
    Success { response: DebugResponse },
    /// A response was received but carried an error status.
    HttpError { response: DebugResponse },
    /// The request never completed (I/O failure or timeout).
    NetworkError { message: String },
}

/// The complete record handed to the hook.
#[derive(Debug, Clone)]
pub struct DebugContext {
    pub request: DebugRequest,
    pub outcome: DebugOutcome,
    pub duration_ms: u128,
}

impl DebugOutcome {
    /// The received response, when one exists.
    pub fn response(&self) -> Option<&DebugResponse> {
        match self {
            DebugOutcome::Success { response } | DebugOutcome::HttpError { response } => {
                Some(response)
            }
            DebugOutcome::NetworkError { .. } => None,
        }
    }
}
