//! Webhook resource types and delivery payloads.

use serde::{Deserialize, Serialize};

use crate::calendar::Person;
use crate::common::{Paginated, SuccessResponse};
use crate::event::{Event, Guest, TicketType};

/// Event class a webhook endpoint subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "event.created")]
    EventCreated,
    #[serde(rename = "event.updated")]
    EventUpdated,
    #[serde(rename = "guest.registered")]
    GuestRegistered,
    #[serde(rename = "guest.updated")]
    GuestUpdated,
    #[serde(rename = "ticket.registered")]
    TicketRegistered,
    #[serde(rename = "calendar.event.added")]
    CalendarEventAdded,
    #[serde(rename = "calendar.person.subscribed")]
    CalendarPersonSubscribed,
}

/// Delivery state of a webhook endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    Active,
    Paused,
}

/// A registered webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    pub api_id: String,
    pub url: String,
    pub event_types: Vec<WebhookEventType>,
    pub status: Option<WebhookStatus>,
    pub secret: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ============================================================================
// Operations
// ============================================================================

/// Params for `GET /v1/webhooks/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWebhooksParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

pub type ListWebhooksResponse = Paginated<Webhook>;

/// Params for `GET /v1/webhooks/get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetWebhookParams {
    pub webhook_api_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetWebhookResponse {
    pub webhook: Webhook,
}

/// Body for `POST /v1/webhooks/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    pub url: String,
    pub event_types: Vec<WebhookEventType>,
}

pub type CreateWebhookResponse = GetWebhookResponse;

/// Body for `POST /v1/webhooks/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWebhookRequest {
    pub webhook_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<WebhookEventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

pub type UpdateWebhookResponse = GetWebhookResponse;

/// Body for `POST /v1/webhooks/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWebhookRequest {
    pub webhook_api_id: String,
}

pub type DeleteWebhookResponse = SuccessResponse;

// ============================================================================
// Delivery payloads
// ============================================================================

/// Data carried by event-level deliveries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayloadData {
    pub event: Event,
}

/// Data carried by guest-level deliveries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestPayloadData {
    pub guest: Guest,
    pub event: Event,
}

/// Data carried by ticket registrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPayloadData {
    pub guest: Guest,
    pub event: Event,
    pub ticket_type: Option<TicketType>,
}

/// Data carried when a person subscribes to a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPayloadData {
    pub person: Person,
}

/// A webhook delivery body, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WebhookPayload {
    #[serde(rename = "event.created")]
    EventCreated {
        created_at: String,
        data: EventPayloadData,
    },
    #[serde(rename = "event.updated")]
    EventUpdated {
        created_at: String,
        data: EventPayloadData,
    },
    #[serde(rename = "guest.registered")]
    GuestRegistered {
        created_at: String,
        data: GuestPayloadData,
    },
    #[serde(rename = "guest.updated")]
    GuestUpdated {
        created_at: String,
        data: GuestPayloadData,
    },
    #[serde(rename = "ticket.registered")]
    TicketRegistered {
        created_at: String,
        data: TicketPayloadData,
    },
    #[serde(rename = "calendar.event.added")]
    CalendarEventAdded {
        created_at: String,
        data: EventPayloadData,
    },
    #[serde(rename = "calendar.person.subscribed")]
    CalendarPersonSubscribed {
        created_at: String,
        data: PersonPayloadData,
    },
}

/// Parse and validate an incoming webhook delivery body.
pub fn parse_webhook_payload(body: &str) -> Result<WebhookPayload, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_event_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&WebhookEventType::CalendarPersonSubscribed).unwrap(),
            r#""calendar.person.subscribed""#
        );
        let parsed: WebhookEventType = serde_json::from_str(r#""guest.registered""#).unwrap();
        assert_eq!(parsed, WebhookEventType::GuestRegistered);
    }

    #[test]
    fn test_parse_event_created_payload() {
        let body = r#"{
            "type": "event.created",
            "created_at": "2024-01-15T10:00:00Z",
            "data": {"event": {"api_id": "evt-1", "name": "Launch"}}
        }"#;
        match parse_webhook_payload(body).unwrap() {
            WebhookPayload::EventCreated { created_at, data } => {
                assert_eq!(created_at, "2024-01-15T10:00:00Z");
                assert_eq!(data.event.api_id, "evt-1");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_parse_ticket_registered_without_ticket_type() {
        let body = r#"{
            "type": "ticket.registered",
            "created_at": "2024-01-15T10:00:00Z",
            "data": {
                "guest": {"api_id": "gst-1"},
                "event": {"api_id": "evt-1"}
            }
        }"#;
        match parse_webhook_payload(body).unwrap() {
            WebhookPayload::TicketRegistered { data, .. } => {
                assert_eq!(data.guest.api_id, "gst-1");
                assert!(data.ticket_type.is_none());
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let body = r#"{"type": "event.cancelled", "created_at": "now", "data": {}}"#;
        assert!(parse_webhook_payload(body).is_err());
    }
}
