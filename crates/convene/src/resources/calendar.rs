//! Calendar endpoints: managed events, people, tags, and coupons.

use convene_types::calendar::{
    AddEventToCalendarRequest, AddEventToCalendarResponse, ApplyPersonTagRequest,
    ApplyPersonTagResponse, CreateCalendarCouponRequest, CreateCalendarCouponResponse,
    CreatePersonTagRequest, CreatePersonTagResponse, DeletePersonTagRequest,
    DeletePersonTagResponse, ImportPeopleRequest, ImportPeopleResponse, ListCalendarCouponsParams,
    ListCalendarCouponsResponse, ListCalendarEventsParams, ListCalendarEventsResponse,
    ListPeopleParams, ListPeopleResponse, ListPersonTagsParams, ListPersonTagsResponse,
    LookupCalendarEventParams, LookupCalendarEventResponse, RemovePersonTagRequest,
    RemovePersonTagResponse, UpdateCalendarCouponRequest, UpdateCalendarCouponResponse,
    UpdatePersonTagRequest, UpdatePersonTagResponse,
};

use crate::error::Error;
use crate::fetcher::{Fetcher, QueryParams};

/// Operations on the calendar the API key belongs to.
pub struct CalendarResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> CalendarResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        CalendarResource { fetcher }
    }

    /// List events managed by the calendar.
    ///
    /// `GET /v1/calendar/list-events`
    pub async fn list_events(
        &self,
        params: ListCalendarEventsParams,
    ) -> Result<ListCalendarEventsResponse, Error> {
        let mut query = QueryParams::new();
        query.set("after", params.after);
        query.set("before", params.before);
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        query.set("sort_column", params.sort_column.map(|c| c.as_str()));
        query.set("sort_direction", params.sort_direction.map(|d| d.as_str()));
        self.fetcher
            .get("/v1/calendar/list-events", Some(query))
            .await
    }

    /// List the tags attached to people on the calendar.
    ///
    /// `GET /v1/calendar/list-person-tags`
    pub async fn list_person_tags(
        &self,
        params: ListPersonTagsParams,
    ) -> Result<ListPersonTagsResponse, Error> {
        let mut query = QueryParams::new();
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        query.set("sort_column", params.sort_column.map(|c| c.as_str()));
        query.set("sort_direction", params.sort_direction.map(|d| d.as_str()));
        self.fetcher
            .get("/v1/calendar/list-person-tags", Some(query))
            .await
    }

    /// Check whether an event exists on the calendar.
    ///
    /// `GET /v1/calendar/lookup-event`
    pub async fn lookup_event(
        &self,
        params: LookupCalendarEventParams,
    ) -> Result<LookupCalendarEventResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", params.event_api_id);
        query.set("url", params.url);
        self.fetcher
            .get("/v1/calendar/lookup-event", Some(query))
            .await
    }

    /// Search people on the calendar.
    ///
    /// `GET /v1/calendar/list-people`
    pub async fn list_people(&self, params: ListPeopleParams) -> Result<ListPeopleResponse, Error> {
        let mut query = QueryParams::new();
        query.set("search", params.search);
        query.set("tag_api_id", params.tag_api_id);
        query.set("membership_tier_api_id", params.membership_tier_api_id);
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        query.set("sort_column", params.sort_column.map(|c| c.as_str()));
        query.set("sort_direction", params.sort_direction.map(|d| d.as_str()));
        self.fetcher
            .get("/v1/calendar/list-people", Some(query))
            .await
    }

    /// List coupon codes valid across the calendar's events.
    ///
    /// `GET /v1/calendar/coupons`
    pub async fn coupons(
        &self,
        params: ListCalendarCouponsParams,
    ) -> Result<ListCalendarCouponsResponse, Error> {
        let mut query = QueryParams::new();
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        self.fetcher.get("/v1/calendar/coupons", Some(query)).await
    }

    /// Create a coupon for events on the calendar.
    ///
    /// `POST /v1/calendar/coupons/create`
    pub async fn create_coupon(
        &self,
        request: &CreateCalendarCouponRequest,
    ) -> Result<CreateCalendarCouponResponse, Error> {
        self.fetcher
            .post("/v1/calendar/coupons/create", request)
            .await
    }

    /// Update a calendar coupon.
    ///
    /// `POST /v1/calendar/coupons/update`
    pub async fn update_coupon(
        &self,
        request: &UpdateCalendarCouponRequest,
    ) -> Result<UpdateCalendarCouponResponse, Error> {
        self.fetcher
            .post("/v1/calendar/coupons/update", request)
            .await
    }

    /// Bulk-import people to the calendar.
    ///
    /// `POST /v1/calendar/import-people`
    pub async fn import_people(
        &self,
        request: &ImportPeopleRequest,
    ) -> Result<ImportPeopleResponse, Error> {
        self.fetcher
            .post("/v1/calendar/import-people", request)
            .await
    }

    /// Create a new tag for people on the calendar.
    ///
    /// `POST /v1/calendar/create-person-tag`
    pub async fn create_person_tag(
        &self,
        request: &CreatePersonTagRequest,
    ) -> Result<CreatePersonTagResponse, Error> {
        self.fetcher
            .post("/v1/calendar/create-person-tag", request)
            .await
    }

    /// Update an existing person tag.
    ///
    /// `POST /v1/calendar/update-person-tag`
    pub async fn update_person_tag(
        &self,
        request: &UpdatePersonTagRequest,
    ) -> Result<UpdatePersonTagResponse, Error> {
        self.fetcher
            .post("/v1/calendar/update-person-tag", request)
            .await
    }

    /// Delete a person tag.
    ///
    /// `POST /v1/calendar/delete-person-tag`
    pub async fn delete_person_tag(
        &self,
        request: &DeletePersonTagRequest,
    ) -> Result<DeletePersonTagResponse, Error> {
        self.fetcher
            .post("/v1/calendar/delete-person-tag", request)
            .await
    }

    /// Add an existing event to the calendar.
    ///
    /// `POST /v1/calendar/add-event`
    pub async fn add_event(
        &self,
        request: &AddEventToCalendarRequest,
    ) -> Result<AddEventToCalendarResponse, Error> {
        self.fetcher.post("/v1/calendar/add-event", request).await
    }

    /// Apply a tag to specific people on the calendar.
    ///
    /// `POST /v1/calendar/person-tags/apply`
    pub async fn apply_person_tag(
        &self,
        request: &ApplyPersonTagRequest,
    ) -> Result<ApplyPersonTagResponse, Error> {
        self.fetcher
            .post("/v1/calendar/person-tags/apply", request)
            .await
    }

    /// Remove a tag from specified people on the calendar.
    ///
    /// `POST /v1/calendar/person-tags/unapply`
    pub async fn remove_person_tag(
        &self,
        request: &RemovePersonTagRequest,
    ) -> Result<RemovePersonTagResponse, Error> {
        self.fetcher
            .post("/v1/calendar/person-tags/unapply", request)
            .await
    }
}
