//! Async client for the Convene event/calendar platform API.
//!
//! Construct a [`Client`] with an API key, then call typed endpoint
//! methods through the resource accessors. Every logical call issues
//! exactly one HTTP request — no retries, no caching — and resolves to
//! either a validated response type or one [`Error`] describing what
//! went wrong.
//!
//! ```no_run
//! use convene::{Client, ClientOptions};
//! use convene::types::ListCalendarEventsParams;
//!
//! # async fn run() -> Result<(), convene::Error> {
//! let client = Client::new(ClientOptions::new("convene-api-key"))?;
//!
//! let page = client
//!     .calendar()
//!     .list_events(ListCalendarEventsParams {
//!         limit: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for entry in &page.entries {
//!     println!("{}", entry.event.api_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Pagination is driven by the caller: pass `cursor`/`limit` on list
//! params and feed each response's `next_cursor` back in. Rate limits
//! surface as [`Error::RateLimit`] carrying the server-suggested wait.

mod client;
mod config;
mod debug;
mod error;
mod fetcher;
pub mod resources;

pub use client::Client;
pub use config::{ClientOptions, BASE_URL, DEFAULT_TIMEOUT};
pub use debug::{DebugContext, DebugHook, DebugOutcome, DebugRequest, DebugResponse};
pub use error::{Error, ValidationIssue};
pub use fetcher::{
    parse_retry_after, Fetcher, QueryParams, QueryValue, RequestOptions, API_KEY_HEADER,
};

/// Wire types for every request and response shape.
pub use convene_types as types;

// The HTTP method type used in `RequestOptions` and debug records.
pub use reqwest::Method;
