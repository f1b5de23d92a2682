//! The request pipeline.
//!
//! Every API operation funnels through [`Fetcher::request`]: build the
//! URL and envelope, execute the exchange under the configured deadline,
//! interpret the body by content type, classify the status code, and
//! validate the payload into the caller's type. The debug hook, when
//! installed, sees exactly one record per call.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::debug::{DebugContext, DebugOutcome, DebugRequest, DebugResponse};
use crate::error::{Error, ValidationIssue};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-convene-api-key";

/// Scalar value accepted in a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::String(value) => write!(f, "{value}"),
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::UInt(value) => write!(f, "{value}"),
            QueryValue::Float(value) => write!(f, "{value}"),
            QueryValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// Flat, ordered set of query parameters. Entries whose value is `None`
/// are dropped entirely when the URL is built — they never serialize as
/// `key=` or a placeholder.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    pub fn set<V: Into<QueryValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.entries.push((key.into(), value.map(Into::into)));
    }

    fn present(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (key.as_str(), value)))
    }
}

/// One logical call, as handed to [`Fetcher::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub path: String,
    pub query: Option<QueryParams>,
    pub body: Option<Value>,
}

/// A received response, read exactly once.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    text: String,
}

/// Executes logical calls against one API host. Cheap to share; holds
/// only the immutable configuration and a reqwest client.
#[derive(Debug)]
pub struct Fetcher {
    config: Config,
    http: reqwest::Client,
}

impl Fetcher {
    pub(crate) fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::other(format!("failed to construct HTTP client: {e}")))?;
        Ok(Fetcher { config, http })
    }

    /// Issue a GET for `path` and validate the response into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<T, Error> {
        self.request(RequestOptions {
            method: Method::GET,
            path: path.to_string(),
            query,
            body: None,
        })
        .await
    }

    /// Issue a POST with a JSON `body` and validate the response into `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = serde_json::to_value(body)
            .map_err(|e| Error::other(format!("failed to serialize request body: {e}")))?;
        self.request(RequestOptions {
            method: Method::POST,
            path: path.to_string(),
            query: None,
            body: Some(body),
        })
        .await
    }

    /// Run one logical call through the full pipeline.
    pub async fn request<T: DeserializeOwned>(&self, options: RequestOptions) -> Result<T, Error> {
        let url = build_url(&self.config.base_url, &options.path, options.query.as_ref())?;
        let body_text = options
            .body
            .as_ref()
            .map(|body| {
                serde_json::to_string(body)
                    .map_err(|e| Error::other(format!("failed to serialize request body: {e}")))
            })
            .transpose()?;

        let debug_request = DebugRequest {
            method: options.method.clone(),
            url: url.to_string(),
            headers: self.request_header_record(options.body.is_some()),
            body: options.body.clone(),
        };

        tracing::debug!(method = %options.method, url = %url, "dispatching request");
        let started = Instant::now();

        match self.execute(options.method, url, body_text).await {
            Ok(raw) => {
                let payload = interpret_body(content_type_of(&raw.headers).as_deref(), &raw.text);
                let ok = raw.status.is_success();
                let response = DebugResponse {
                    status: raw.status.as_u16(),
                    ok,
                    headers: headers_to_record(&raw.headers),
                    body: payload.clone(),
                };
                let outcome = if ok {
                    DebugOutcome::Success { response }
                } else {
                    DebugOutcome::HttpError { response }
                };
                self.emit_debug(DebugContext {
                    request: debug_request,
                    outcome,
                    duration_ms: started.elapsed().as_millis(),
                });

                if ok {
                    parse_payload(payload)
                } else {
                    let retry_after = raw
                        .headers
                        .get(RETRY_AFTER)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    Err(error_for_status(raw.status, retry_after.as_deref(), payload))
                }
            }
            Err(error) => {
                self.emit_debug(DebugContext {
                    request: debug_request,
                    outcome: DebugOutcome::NetworkError {
                        message: error.to_string(),
                    },
                    duration_ms: started.elapsed().as_millis(),
                });
                Err(error)
            }
        }
    }

    /// Perform the network exchange under the configured deadline.
    ///
    /// Both the send and the body read count against the same timer.
    /// When the deadline elapses the future is dropped, which aborts the
    /// in-flight connection rather than letting it run out in the
    /// background.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<RawResponse, Error> {
        let timeout = self.config.timeout;
        let exchange = async {
            let mut builder = self
                .http
                .request(method, url)
                .header(API_KEY_HEADER, &self.config.api_key);
            if let Some(text) = body {
                builder = builder.header(CONTENT_TYPE, "application/json").body(text);
            }
            let response = builder
                .send()
                .await
                .map_err(|e| Error::network_caused_by(e.to_string(), e))?;
            let status = response.status();
            let headers = response.headers().clone();
            let text = response
                .text()
                .await
                .map_err(|e| Error::network_caused_by(e.to_string(), e))?;
            Ok(RawResponse {
                status,
                headers,
                text,
            })
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(Error::network(format!(
                "Request timed out after {}ms",
                timeout.as_millis()
            ))),
        }
    }

    fn request_header_record(&self, has_body: bool) -> HashMap<String, String> {
        let mut record = HashMap::new();
        record.insert(API_KEY_HEADER.to_string(), self.config.api_key.clone());
        if has_body {
            record.insert("content-type".to_string(), "application/json".to_string());
        }
        record
    }

    /// Hand the record to the hook, containing any panic it raises so
    /// observability can never change a call's outcome.
    fn emit_debug(&self, context: DebugContext) {
        let Some(hook) = &self.config.debug else {
            return;
        };
        if panic::catch_unwind(AssertUnwindSafe(|| hook(&context))).is_err() {
            tracing::warn!(url = %context.request.url, "debug hook panicked; ignoring");
        }
    }
}

/// Resolve `path` against the base URL and append the normalized query.
fn build_url(base: &Url, path: &str, query: Option<&QueryParams>) -> Result<Url, Error> {
    let mut url = base
        .join(path)
        .map_err(|e| Error::other(format!("invalid request path {path:?}: {e}")))?;
    if let Some(params) = query {
        let mut present = params.present().peekable();
        if present.peek().is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in present {
                pairs.append_pair(normalize_query_key(key), &value.to_string());
            }
        }
    }
    Ok(url)
}

/// Rewrite the generic pagination aliases to their wire names.
fn normalize_query_key(key: &str) -> &str {
    match key {
        "cursor" => "pagination_cursor",
        "limit" => "pagination_limit",
        other => other,
    }
}

fn content_type_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// `application/json` or any `application/*+json` subtype, parameters
/// and case ignored.
fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or("").trim();
    if essence.eq_ignore_ascii_case("application/json") {
        return true;
    }
    let essence = essence.to_ascii_lowercase();
    essence.starts_with("application/") && essence.ends_with("+json")
}

/// Read a body into a payload value.
///
/// Empty text is `Null` regardless of content type. A JSON-family body
/// that fails to parse also becomes `Null` — downstream validation
/// reports the shape mismatch, which keeps endpoints that answer with
/// empty or malformed bodies from turning into parse panics. Non-JSON
/// bodies pass through as raw text.
fn interpret_body(content_type: Option<&str>, text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    match content_type {
        Some(value) if is_json_content_type(value) => {
            serde_json::from_str(text).unwrap_or(Value::Null)
        }
        _ => Value::String(text.to_string()),
    }
}

/// Validate a payload into the caller's type.
fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize(payload).map_err(|error| {
        let path = error.path().to_string();
        let issue = ValidationIssue {
            path: (path != ".").then_some(path),
            message: error.inner().to_string(),
        };
        Error::validation(vec![issue])
    })
}

/// Best human-readable message for a failed response.
fn response_message(payload: &Value, status: StatusCode) -> String {
    if let Some(message) = payload.as_object().and_then(|object| object.get("message")) {
        return match message {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
    }
    format!("Request failed with status {}", status.as_u16())
}

/// Map a non-2xx response to its error kind.
fn error_for_status(status: StatusCode, retry_after: Option<&str>, payload: Value) -> Error {
    let message = response_message(&payload, status);
    match status.as_u16() {
        401 => Error::Authentication {
            message,
            body: payload,
        },
        404 => Error::NotFound {
            message,
            body: payload,
        },
        429 => Error::RateLimit {
            message,
            retry_after: parse_retry_after(retry_after),
            body: payload,
        },
        status => Error::Api {
            message,
            status,
            body: payload,
        },
    }
}

/// Parse a `Retry-After` header value into whole seconds.
///
/// Accepts the two forms HTTP allows: a non-negative integer number of
/// seconds, or an HTTP date (seconds until that instant, never
/// negative). Anything else yields `None`.
pub fn parse_retry_after(header: Option<&str>) -> Option<u64> {
    parse_retry_after_at(header, Utc::now())
}

fn parse_retry_after_at(header: Option<&str>, now: DateTime<Utc>) -> Option<u64> {
    let trimmed = header?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(digits) = trimmed.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse::<u64>().ok();
    }

    let date = DateTime::parse_from_rfc2822(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .ok()?;
    let delay_ms = date
        .with_timezone(&Utc)
        .signed_duration_since(now)
        .num_milliseconds();
    let delay_seconds = (delay_ms as f64 / 1000.0).ceil() as i64;
    Some(delay_seconds.max(0) as u64)
}

fn headers_to_record(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect()
}
