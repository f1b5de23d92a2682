//! Wire types for the Convene API.
//!
//! Every request, response, and entity shape the Convene API speaks is
//! defined here as a plain serde type. The `convene` crate deserializes
//! API responses into these; applications can also use them standalone,
//! for example to decode webhook deliveries with
//! [`webhook::parse_webhook_payload`].
//!
//! Timestamps are kept as ISO-8601 strings exactly as the API sends
//! them; identifiers (`api_id` fields) are opaque strings.

pub mod calendar;
pub mod common;
pub mod entity;
pub mod event;
pub mod images;
pub mod membership;
pub mod user;
pub mod webhook;

pub use calendar::*;
pub use common::*;
pub use entity::*;
pub use event::*;
pub use images::*;
pub use membership::*;
pub use user::*;
pub use webhook::*;
