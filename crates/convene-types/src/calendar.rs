//! Calendar resource types: managed events, people, tags, and coupons.

use serde::{Deserialize, Serialize};

use crate::common::{CouponDiscountType, Paginated, SortDirection, SuccessResponse, TagColor};
use crate::event::{Coupon, Event};

/// An event entry as managed by a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventEntry {
    pub api_id: String,
    pub event: Event,
}

/// A label attached to people on a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTag {
    pub api_id: String,
    pub name: String,
    pub color: Option<TagColor>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A person subscribed to a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub api_id: String,
    pub user_api_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub instagram_handle: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub tags: Option<Vec<PersonTag>>,
    pub membership_tier_api_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// ============================================================================
// Listing operations
// ============================================================================

/// Sort key for calendar event listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventSortColumn {
    StartAt,
    CreatedAt,
}

impl CalendarEventSortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarEventSortColumn::StartAt => "start_at",
            CalendarEventSortColumn::CreatedAt => "created_at",
        }
    }
}

/// Params for `GET /v1/calendar/list-events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCalendarEventsParams {
    /// Only include events starting after this instant (ISO-8601).
    pub after: Option<String>,
    /// Only include events starting before this instant (ISO-8601).
    pub before: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub sort_column: Option<CalendarEventSortColumn>,
    pub sort_direction: Option<SortDirection>,
}

pub type ListCalendarEventsResponse = Paginated<CalendarEventEntry>;

/// Sort key for person tag listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonTagSortColumn {
    Name,
    CreatedAt,
}

impl PersonTagSortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonTagSortColumn::Name => "name",
            PersonTagSortColumn::CreatedAt => "created_at",
        }
    }
}

/// Params for `GET /v1/calendar/list-person-tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPersonTagsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub sort_column: Option<PersonTagSortColumn>,
    pub sort_direction: Option<SortDirection>,
}

pub type ListPersonTagsResponse = Paginated<PersonTag>;

/// Params for `GET /v1/calendar/lookup-event`. Identify the event by
/// API id or by its public URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupCalendarEventParams {
    pub event_api_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupCalendarEventResponse {
    pub event: Option<Event>,
    pub is_managed: Option<bool>,
}

/// Sort key for people listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonSortColumn {
    Name,
    CreatedAt,
    UpdatedAt,
}

impl PersonSortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonSortColumn::Name => "name",
            PersonSortColumn::CreatedAt => "created_at",
            PersonSortColumn::UpdatedAt => "updated_at",
        }
    }
}

/// Params for `GET /v1/calendar/list-people`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPeopleParams {
    pub search: Option<String>,
    pub tag_api_id: Option<String>,
    pub membership_tier_api_id: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub sort_column: Option<PersonSortColumn>,
    pub sort_direction: Option<SortDirection>,
}

pub type ListPeopleResponse = Paginated<Person>;

/// Params for `GET /v1/calendar/coupons`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCalendarCouponsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

pub type ListCalendarCouponsResponse = Paginated<Coupon>;

// ============================================================================
// Mutations
// ============================================================================

/// Body for `POST /v1/calendar/coupons/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCalendarCouponRequest {
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
pub struct CreateCalendarCouponResponse {
    pub coupon: Coupon,
}

/// Body for `POST /v1/calendar/coupons/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCalendarCouponRequest {
    pub coupon_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

pub type UpdateCalendarCouponResponse = CreateCalendarCouponResponse;

/// One person to import via `POST /v1/calendar/import-people`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPersonInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Body for `POST /v1/calendar/import-people`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPeopleRequest {
    pub people: Vec<ImportPersonInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_api_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPeopleResponse {
    pub imported_count: f64,
    pub people: Option<Vec<Person>>,
}

/// Body for `POST /v1/calendar/create-person-tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonTagRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonTagResponse {
    pub tag: PersonTag,
}

/// Body for `POST /v1/calendar/update-person-tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePersonTagRequest {
    pub tag_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
}

pub type UpdatePersonTagResponse = CreatePersonTagResponse;

/// Body for `POST /v1/calendar/delete-person-tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePersonTagRequest {
    pub tag_api_id: String,
}

pub type DeletePersonTagResponse = SuccessResponse;

/// Body for `POST /v1/calendar/add-event`. Identify the event by API id
/// or by its public URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEventToCalendarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEventToCalendarResponse {
    pub success: bool,
    pub event: Option<Event>,
}

/// Body for `POST /v1/calendar/person-tags/apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPersonTagRequest {
    pub tag_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_api_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPersonTagResponse {
    pub success: bool,
    pub applied_count: Option<f64>,
}

/// Body for `POST /v1/calendar/person-tags/unapply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePersonTagRequest {
    pub tag_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_api_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePersonTagResponse {
    pub success: bool,
    pub removed_count: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_event_entry_round_trip() {
        let json = r#"{"api_id":"cal-evt-1","event":{"api_id":"evt-1","name":"Meetup"}}"#;
        let entry: CalendarEventEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.api_id, "cal-evt-1");
        assert_eq!(entry.event.api_id, "evt-1");
    }

    #[test]
    fn test_lookup_response_with_null_event() {
        let response: LookupCalendarEventResponse =
            serde_json::from_str(r#"{"event":null,"is_managed":false}"#).unwrap();
        assert!(response.event.is_none());
        assert_eq!(response.is_managed, Some(false));
    }

    #[test]
    fn test_person_tag_color() {
        let tag: PersonTag =
            serde_json::from_str(r#"{"api_id":"tag-1","name":"VIP","color":"purple"}"#).unwrap();
        assert_eq!(tag.color, Some(TagColor::Purple));
    }
}
