//! Endpoint surface coverage: every resource method hits its documented
//! path with the right HTTP method, and its response type accepts a
//! representative body.
//!
//! One stub server answers all paths from a canned-response table and
//! records each call it sees.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use convene::types::*;
use convene::{Client, ClientOptions};
use serde_json::{json, Value};
use tokio::net::TcpListener;

type CallLog = Arc<Mutex<Vec<(String, String)>>>;

fn canned_response(path: &str) -> Option<Value> {
    let event = json!({"api_id": "evt-1", "name": "Launch"});
    let guest = json!({"api_id": "gst-1", "approval_status": "approved"});
    let coupon = json!({"api_id": "cpn-1", "code": "SAVE10"});
    let ticket_type = json!({"api_id": "tkt-1", "name": "General"});
    let tag = json!({"api_id": "tag-1", "name": "VIP", "color": "purple"});
    let person = json!({"api_id": "per-1", "email": "ada@example.com"});
    let member = json!({"api_id": "mbr-1", "status": "approved"});
    let webhook = json!({
        "api_id": "wh-1",
        "url": "https://example.com/hook",
        "event_types": ["event.created"],
        "status": "active",
    });
    let page = |entry: Value| json!({"entries": [entry], "has_more": false, "next_cursor": null});

    let body = match path {
        "/v1/user/get-self" => json!({"user": {"api_id": "usr-1", "name": "Ada"}}),
        "/v1/entity/lookup" => {
            json!({"entity": {"api_id": "ent-1", "type": "event", "slug": "launch"}})
        }
        "/v1/images/create-upload-url" => json!({
            "signed_url": "https://uploads.example.com/signed",
            "file_url": "https://cdn.example.com/image.png",
        }),
        "/v1/event/get" | "/v1/event/create" | "/v1/event/update" => json!({"event": event}),
        "/v1/event/get-guest" | "/v1/event/update-guest-status" => json!({"guest": guest}),
        "/v1/event/get-guests" => page(guest),
        "/v1/event/send-invites" => json!({"success": true}),
        "/v1/event/add-guests" => json!({"guests": [guest]}),
        "/v1/event/add-host" => json!({"host": {"api_id": "hst-1", "email": "host@example.com"}}),
        "/v1/event/coupons" => page(coupon),
        "/v1/event/create-coupon" | "/v1/event/update-coupon" => json!({"coupon": coupon}),
        "/v1/event/ticket-types/list" => json!({"ticket_types": [ticket_type]}),
        "/v1/event/ticket-types/get"
        | "/v1/event/ticket-types/create"
        | "/v1/event/ticket-types/update" => json!({"ticket_type": ticket_type}),
        "/v1/event/ticket-types/delete" => json!({"success": true}),
        "/v1/calendar/list-events" => page(json!({"api_id": "ce-1", "event": event})),
        "/v1/calendar/list-person-tags" => page(tag),
        "/v1/calendar/lookup-event" => json!({"event": event, "is_managed": true}),
        "/v1/calendar/list-people" => page(person),
        "/v1/calendar/coupons" => page(coupon),
        "/v1/calendar/coupons/create" | "/v1/calendar/coupons/update" => json!({"coupon": coupon}),
        "/v1/calendar/import-people" => json!({"imported_count": 1, "people": [person]}),
        "/v1/calendar/create-person-tag" | "/v1/calendar/update-person-tag" => json!({"tag": tag}),
        "/v1/calendar/delete-person-tag" => json!({"success": true}),
        "/v1/calendar/add-event" => json!({"success": true, "event": event}),
        "/v1/calendar/person-tags/apply" => json!({"success": true, "applied_count": 2}),
        "/v1/calendar/person-tags/unapply" => json!({"success": true, "removed_count": 1}),
        "/v1/memberships/tiers/list" => {
            page(json!({"api_id": "tier-1", "name": "Supporter", "billing_period": "monthly"}))
        }
        "/v1/memberships/members/add" | "/v1/memberships/members/update-status" => {
            json!({"member": member})
        }
        "/v1/webhooks/list" => page(webhook),
        "/v1/webhooks/get" | "/v1/webhooks/create" | "/v1/webhooks/update" => {
            json!({"webhook": webhook})
        }
        "/v1/webhooks/delete" => json!({"success": true}),
        _ => return None,
    };
    Some(body)
}

async fn api_stub(State(log): State<CallLog>, method: Method, uri: Uri) -> Response {
    log.lock()
        .unwrap()
        .push((method.to_string(), uri.path().to_string()));
    match canned_response(uri.path()) {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_stub() -> (Client, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .fallback(api_stub)
        .with_state(log.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = Client::new(
        ClientOptions::new("test-api-key").base_url(format!("http://{addr}")),
    )
    .unwrap();
    (client, log)
}

fn assert_called(log: &CallLog, expected: &[(&str, &str)]) {
    let calls = log.lock().unwrap();
    let seen: Vec<(&str, &str)> = calls
        .iter()
        .map(|(method, path)| (method.as_str(), path.as_str()))
        .collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn user_and_entity_and_images_surface() {
    let (client, log) = spawn_stub().await;

    let me = client.user().get_self().await.unwrap();
    assert_eq!(me.user.api_id, "usr-1");

    let entity = client
        .entity()
        .lookup(LookupEntityParams {
            slug: "launch".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(entity.entity.unwrap().r#type, EntityType::Event);

    let upload = client
        .images()
        .create_upload_url(&CreateUploadUrlRequest {
            purpose: ImagePurpose::EventCover,
            content_type: "image/png".to_string(),
        })
        .await
        .unwrap();
    assert!(upload.signed_url.starts_with("https://uploads."));

    assert_called(
        &log,
        &[
            ("GET", "/v1/user/get-self"),
            ("GET", "/v1/entity/lookup"),
            ("POST", "/v1/images/create-upload-url"),
        ],
    );
}

#[tokio::test]
async fn event_surface() {
    let (client, log) = spawn_stub().await;
    let events = client.event();

    events
        .get(GetEventParams {
            event_api_id: "evt-1".to_string(),
        })
        .await
        .unwrap();
    events
        .get_guest(GetGuestParams {
            event_api_id: Some("evt-1".to_string()),
            guest_api_id: Some("gst-1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let guests = events.get_guests(GetGuestsParams::new("evt-1")).await.unwrap();
    assert_eq!(guests.entries[0].approval_status, Some(ApprovalStatus::Approved));

    events
        .create(&CreateEventRequest {
            name: "Launch".to_string(),
            start_at: "2024-02-01T14:00:00Z".to_string(),
            timezone: "UTC".to_string(),
            end_at: None,
            description: None,
            require_rsvp_approval: None,
            meeting_url: None,
            geo_address_json: None,
            geo_latitude: None,
            geo_longitude: None,
            cover_url: None,
            visibility: None,
            event_type: None,
        })
        .await
        .unwrap();
    events
        .update_guest_status(&UpdateGuestStatusRequest {
            event_api_id: "evt-1".to_string(),
            guest_api_id: "gst-1".to_string(),
            status: GuestStatus::Approved,
        })
        .await
        .unwrap();
    let invited = events
        .send_invites(&SendInvitesRequest {
            event_api_id: "evt-1".to_string(),
            guest_api_ids: vec!["gst-1".to_string()],
            send_sms: None,
        })
        .await
        .unwrap();
    assert!(invited.success);

    events
        .coupons(GetEventCouponsParams {
            event_api_id: "evt-1".to_string(),
            cursor: None,
            limit: Some(10),
        })
        .await
        .unwrap();
    events
        .list_ticket_types(ListTicketTypesParams {
            event_api_id: "evt-1".to_string(),
            include_hidden: Some(true),
        })
        .await
        .unwrap();
    let deleted = events
        .delete_ticket_type(&DeleteTicketTypeRequest {
            ticket_type_api_id: "tkt-1".to_string(),
        })
        .await
        .unwrap();
    assert!(deleted.success);

    assert_called(
        &log,
        &[
            ("GET", "/v1/event/get"),
            ("GET", "/v1/event/get-guest"),
            ("GET", "/v1/event/get-guests"),
            ("POST", "/v1/event/create"),
            ("POST", "/v1/event/update-guest-status"),
            ("POST", "/v1/event/send-invites"),
            ("GET", "/v1/event/coupons"),
            ("GET", "/v1/event/ticket-types/list"),
            ("POST", "/v1/event/ticket-types/delete"),
        ],
    );
}

#[tokio::test]
async fn event_guest_and_host_mutations() {
    let (client, log) = spawn_stub().await;
    let events = client.event();

    events
        .update(&UpdateEventRequest {
            event_api_id: "evt-1".to_string(),
            name: Some("Renamed".to_string()),
            start_at: None,
            end_at: None,
            timezone: None,
            description: None,
            require_rsvp_approval: None,
            meeting_url: None,
            geo_address_json: None,
            geo_latitude: None,
            geo_longitude: None,
            cover_url: None,
            visibility: None,
        })
        .await
        .unwrap();
    let added = events
        .add_guests(&AddGuestsRequest {
            event_api_id: "evt-1".to_string(),
            guests: vec![AddGuestInput {
                name: Some("Grace".to_string()),
                email: "grace@example.com".to_string(),
                phone_number: None,
            }],
            send_invite_email: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(added.guests.len(), 1);
    events
        .add_host(&AddHostRequest {
            event_api_id: "evt-1".to_string(),
            email: "host@example.com".to_string(),
            name: None,
            phone_number: None,
        })
        .await
        .unwrap();
    events
        .create_coupon(&CreateEventCouponRequest {
            event_api_id: "evt-1".to_string(),
            code: "SAVE10".to_string(),
            discount_type: CouponDiscountType::Percentage,
            discount_amount: None,
            discount_percentage: Some(10.0),
            max_uses: None,
            valid_from: None,
            valid_until: None,
        })
        .await
        .unwrap();
    events
        .update_coupon(&UpdateEventCouponRequest {
            coupon_api_id: "cpn-1".to_string(),
            max_uses: Some(100.0),
            valid_from: None,
            valid_until: None,
        })
        .await
        .unwrap();
    events
        .get_ticket_type(GetTicketTypeParams {
            ticket_type_api_id: "tkt-1".to_string(),
        })
        .await
        .unwrap();
    events
        .create_ticket_type(&CreateTicketTypeRequest {
            event_api_id: "evt-1".to_string(),
            name: "General".to_string(),
            price: Some(25.0),
            currency: Some("usd".to_string()),
            quantity: None,
            description: None,
            min_per_order: None,
            max_per_order: None,
            visibility: None,
            sales_start_at: None,
            sales_end_at: None,
        })
        .await
        .unwrap();
    events
        .update_ticket_type(&UpdateTicketTypeRequest {
            ticket_type_api_id: "tkt-1".to_string(),
            name: None,
            price: Some(30.0),
            currency: None,
            quantity: None,
            description: None,
            min_per_order: None,
            max_per_order: None,
            visibility: None,
            sales_start_at: None,
            sales_end_at: None,
        })
        .await
        .unwrap();

    assert_called(
        &log,
        &[
            ("POST", "/v1/event/update"),
            ("POST", "/v1/event/add-guests"),
            ("POST", "/v1/event/add-host"),
            ("POST", "/v1/event/create-coupon"),
            ("POST", "/v1/event/update-coupon"),
            ("GET", "/v1/event/ticket-types/get"),
            ("POST", "/v1/event/ticket-types/create"),
            ("POST", "/v1/event/ticket-types/update"),
        ],
    );
}

#[tokio::test]
async fn calendar_surface() {
    let (client, log) = spawn_stub().await;
    let calendar = client.calendar();

    let events = calendar
        .list_events(ListCalendarEventsParams::default())
        .await
        .unwrap();
    assert_eq!(events.entries[0].event.api_id, "evt-1");
    calendar
        .list_person_tags(ListPersonTagsParams::default())
        .await
        .unwrap();
    let lookup = calendar
        .lookup_event(LookupCalendarEventParams {
            event_api_id: Some("evt-1".to_string()),
            url: None,
        })
        .await
        .unwrap();
    assert_eq!(lookup.is_managed, Some(true));
    calendar.list_people(ListPeopleParams::default()).await.unwrap();
    calendar
        .coupons(ListCalendarCouponsParams::default())
        .await
        .unwrap();
    calendar
        .create_coupon(&CreateCalendarCouponRequest {
            code: "SAVE10".to_string(),
            discount_type: CouponDiscountType::FixedAmount,
            discount_amount: Some(5.0),
            discount_percentage: None,
            max_uses: None,
            valid_from: None,
            valid_until: None,
        })
        .await
        .unwrap();
    calendar
        .update_coupon(&UpdateCalendarCouponRequest {
            coupon_api_id: "cpn-1".to_string(),
            max_uses: None,
            valid_from: None,
            valid_until: Some("2025-01-01T00:00:00Z".to_string()),
        })
        .await
        .unwrap();
    let imported = calendar
        .import_people(&ImportPeopleRequest {
            people: vec![ImportPersonInput {
                name: Some("Ada".to_string()),
                email: "ada@example.com".to_string(),
                phone_number: None,
                company: None,
                job_title: None,
                bio: None,
            }],
            tag_api_ids: None,
        })
        .await
        .unwrap();
    assert_eq!(imported.imported_count, 1.0);
    calendar
        .create_person_tag(&CreatePersonTagRequest {
            name: "VIP".to_string(),
            color: Some(TagColor::Purple),
        })
        .await
        .unwrap();
    calendar
        .update_person_tag(&UpdatePersonTagRequest {
            tag_api_id: "tag-1".to_string(),
            name: None,
            color: Some(TagColor::Teal),
        })
        .await
        .unwrap();
    calendar
        .delete_person_tag(&DeletePersonTagRequest {
            tag_api_id: "tag-1".to_string(),
        })
        .await
        .unwrap();
    calendar
        .add_event(&AddEventToCalendarRequest {
            event_api_id: Some("evt-1".to_string()),
            url: None,
        })
        .await
        .unwrap();
    let applied = calendar
        .apply_person_tag(&ApplyPersonTagRequest {
            tag_api_id: "tag-1".to_string(),
            user_api_ids: None,
            emails: Some(vec!["ada@example.com".to_string()]),
        })
        .await
        .unwrap();
    assert_eq!(applied.applied_count, Some(2.0));
    calendar
        .remove_person_tag(&RemovePersonTagRequest {
            tag_api_id: "tag-1".to_string(),
            user_api_ids: None,
            emails: Some(vec!["ada@example.com".to_string()]),
        })
        .await
        .unwrap();

    assert_called(
        &log,
        &[
            ("GET", "/v1/calendar/list-events"),
            ("GET", "/v1/calendar/list-person-tags"),
            ("GET", "/v1/calendar/lookup-event"),
            ("GET", "/v1/calendar/list-people"),
            ("GET", "/v1/calendar/coupons"),
            ("POST", "/v1/calendar/coupons/create"),
            ("POST", "/v1/calendar/coupons/update"),
            ("POST", "/v1/calendar/import-people"),
            ("POST", "/v1/calendar/create-person-tag"),
            ("POST", "/v1/calendar/update-person-tag"),
            ("POST", "/v1/calendar/delete-person-tag"),
            ("POST", "/v1/calendar/add-event"),
            ("POST", "/v1/calendar/person-tags/apply"),
            ("POST", "/v1/calendar/person-tags/unapply"),
        ],
    );
}

#[tokio::test]
async fn membership_surface() {
    let (client, log) = spawn_stub().await;
    let membership = client.membership();

    let tiers = membership
        .list_tiers(ListMembershipTiersParams::default())
        .await
        .unwrap();
    assert_eq!(tiers.entries[0].billing_period, Some(BillingPeriod::Monthly));
    membership
        .add_member(&AddMemberToTierRequest {
            tier_api_id: "tier-1".to_string(),
            email: "new@example.com".to_string(),
            name: None,
        })
        .await
        .unwrap();
    let updated = membership
        .update_member_status(&UpdateMemberStatusRequest {
            tier_api_id: "tier-1".to_string(),
            user_api_id: None,
            email: Some("new@example.com".to_string()),
            status: MemberDecision::Approved,
        })
        .await
        .unwrap();
    assert_eq!(updated.member.status, Some(MembershipStatus::Approved));

    assert_called(
        &log,
        &[
            ("GET", "/v1/memberships/tiers/list"),
            ("POST", "/v1/memberships/members/add"),
            ("POST", "/v1/memberships/members/update-status"),
        ],
    );
}

#[tokio::test]
async fn webhook_surface() {
    let (client, log) = spawn_stub().await;
    let webhooks = client.webhook();

    let listed = webhooks.list(ListWebhooksParams::default()).await.unwrap();
    assert_eq!(
        listed.entries[0].event_types,
        vec![WebhookEventType::EventCreated]
    );
    webhooks
        .get(GetWebhookParams {
            webhook_api_id: "wh-1".to_string(),
        })
        .await
        .unwrap();
    let created = webhooks
        .create(&CreateWebhookRequest {
            url: "https://example.com/hook".to_string(),
            event_types: vec![WebhookEventType::EventCreated],
        })
        .await
        .unwrap();
    assert_eq!(created.webhook.status, Some(WebhookStatus::Active));
    webhooks
        .update(&UpdateWebhookRequest {
            webhook_api_id: "wh-1".to_string(),
            url: None,
            event_types: None,
            status: Some(WebhookStatus::Paused),
        })
        .await
        .unwrap();
    let deleted = webhooks
        .delete(&DeleteWebhookRequest {
            webhook_api_id: "wh-1".to_string(),
        })
        .await
        .unwrap();
    assert!(deleted.success);

    assert_called(
        &log,
        &[
            ("GET", "/v1/webhooks/list"),
            ("GET", "/v1/webhooks/get"),
            ("POST", "/v1/webhooks/create"),
            ("POST", "/v1/webhooks/update"),
            ("POST", "/v1/webhooks/delete"),
        ],
    );
}
