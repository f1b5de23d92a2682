//! Event resource types: events, guests, hosts, coupons, and ticket types.

use serde::{Deserialize, Serialize};

use crate::common::{
    ApprovalStatus, CouponDiscountType, EventVisibility, GeoAddress, GuestStatus, LocationType,
    Paginated, SortDirection, SuccessResponse, TicketVisibility,
};

// ============================================================================
// Entities
// ============================================================================

/// A host listed on an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub api_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Admin-level view of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub api_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub description_md: Option<String>,
    pub cover_url: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub timezone: Option<String>,
    pub event_type: Option<String>,
    pub location_type: Option<LocationType>,
    pub geo_address_json: Option<GeoAddress>,
    pub geo_latitude: Option<f64>,
    pub geo_longitude: Option<f64>,
    pub url: Option<String>,
    pub meeting_url: Option<String>,
    pub zoom_meeting_url: Option<String>,
    pub require_rsvp_approval: Option<bool>,
    pub series_api_id: Option<String>,
    pub visibility: Option<String>,
    pub ticket_count: Option<f64>,
    pub guest_count: Option<f64>,
    pub hosts: Option<Vec<Host>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One answer a guest gave to a registration question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: Option<String>,
}

/// A guest registered or invited to an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub api_id: String,
    pub event_api_id: Option<String>,
    pub user_api_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub approval_status: Option<ApprovalStatus>,
    pub avatar_url: Option<String>,
    pub registered_at: Option<String>,
    pub checked_in_at: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub instagram_handle: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub event_start_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub custom_source: Option<String>,
    pub questions_and_answers: Option<Vec<QuestionAnswer>>,
}

/// A discount code scoped to one event or a whole calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub api_id: String,
    pub code: String,
    pub discount_type: Option<CouponDiscountType>,
    pub discount_amount: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub max_uses: Option<f64>,
    pub uses: Option<f64>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
}

/// A purchasable (or free) ticket tier on an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    pub api_id: String,
    pub event_api_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub quantity: Option<f64>,
    pub quantity_sold: Option<f64>,
    pub quantity_remaining: Option<f64>,
    pub min_per_order: Option<f64>,
    pub max_per_order: Option<f64>,
    pub visibility: Option<TicketVisibility>,
    pub sales_start_at: Option<String>,
    pub sales_end_at: Option<String>,
    pub is_free: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ============================================================================
// Event operations
// ============================================================================

/// Params for `GET /v1/event/get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventParams {
    pub event_api_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventResponse {
    pub event: Event,
}

/// Params for `GET /v1/event/get-guest`. At least one identifier is
/// expected by the API; the client passes whatever is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetGuestParams {
    pub event_api_id: Option<String>,
    pub guest_api_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetGuestResponse {
    pub guest: Guest,
}

/// Sort key for guest listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestSortColumn {
    CreatedAt,
    UpdatedAt,
    Name,
}

impl GuestSortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestSortColumn::CreatedAt => "created_at",
            GuestSortColumn::UpdatedAt => "updated_at",
            GuestSortColumn::Name => "name",
        }
    }
}

/// Params for `GET /v1/event/get-guests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetGuestsParams {
    pub event_api_id: String,
    pub approval_status: Option<ApprovalStatus>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub sort_column: Option<GuestSortColumn>,
    pub sort_direction: Option<SortDirection>,
}

impl GetGuestsParams {
    pub fn new(event_api_id: impl Into<String>) -> Self {
        GetGuestsParams {
            event_api_id: event_api_id.into(),
            approval_status: None,
            cursor: None,
            limit: None,
            sort_column: None,
            sort_direction: None,
        }
    }
}

pub type GetGuestsResponse = Paginated<Guest>;

/// Body for `POST /v1/event/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub start_at: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_rsvp_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_address_json: Option<GeoAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<EventVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

pub type CreateEventResponse = GetEventResponse;

/// Body for `POST /v1/event/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub event_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_rsvp_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_address_json: Option<GeoAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<EventVisibility>,
}

pub type UpdateEventResponse = GetEventResponse;

/// Body for `POST /v1/event/update-guest-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGuestStatusRequest {
    pub event_api_id: String,
    pub guest_api_id: String,
    pub status: GuestStatus,
}

pub type UpdateGuestStatusResponse = GetGuestResponse;

/// One guest to add via `POST /v1/event/add-guests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGuestInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Body for `POST /v1/event/add-guests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGuestsRequest {
    pub event_api_id: String,
    pub guests: Vec<AddGuestInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invite_email: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddGuestsResponse {
    pub guests: Vec<Guest>,
}

/// Body for `POST /v1/event/send-invites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvitesRequest {
    pub event_api_id: String,
    pub guest_api_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
}

pub type SendInvitesResponse = SuccessResponse;

/// Body for `POST /v1/event/add-host`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHostRequest {
    pub event_api_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHostResponse {
    pub host: Host,
}

// ============================================================================
// Event coupons
// ============================================================================

/// Params for `GET /v1/event/coupons`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventCouponsParams {
    pub event_api_id: String,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

pub type GetEventCouponsResponse = Paginated<Coupon>;

/// Body for `POST /v1/event/create-coupon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventCouponRequest {
    pub event_api_id: String,
    pub code: String,
    pub discount_type: CouponDiscountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventCouponResponse {
    pub coupon: Coupon,
}

/// Body for `POST /v1/event/update-coupon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventCouponRequest {
    pub coupon_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

pub type UpdateEventCouponResponse = CreateEventCouponResponse;

// ============================================================================
// Ticket types
// ============================================================================

/// Params for `GET /v1/event/ticket-types/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTicketTypesParams {
    pub event_api_id: String,
    pub include_hidden: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTicketTypesResponse {
    pub ticket_types: Vec<TicketType>,
}

/// Params for `GET /v1/event/ticket-types/get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTicketTypeParams {
    pub ticket_type_api_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTicketTypeResponse {
    pub ticket_type: TicketType,
}

/// Body for `POST /v1/event/ticket-types/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketTypeRequest {
    pub event_api_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<TicketVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_end_at: Option<String>,
}

pub type CreateTicketTypeResponse = GetTicketTypeResponse;

/// Body for `POST /v1/event/ticket-types/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTicketTypeRequest {
    pub ticket_type_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<TicketVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_end_at: Option<String>,
}

pub type UpdateTicketTypeResponse = GetTicketTypeResponse;

/// Body for `POST /v1/event/ticket-types/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTicketTypeRequest {
    pub ticket_type_api_id: String,
}

pub type DeleteTicketTypeResponse = SuccessResponse;
