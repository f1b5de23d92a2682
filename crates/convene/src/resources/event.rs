//! Event endpoints: the event itself, guests, hosts, coupons, and
//! ticket types.

use convene_types::event::{
    AddGuestsRequest, AddGuestsResponse, AddHostRequest, AddHostResponse, CreateEventCouponRequest,
    CreateEventCouponResponse, CreateEventRequest, CreateEventResponse, CreateTicketTypeRequest,
    CreateTicketTypeResponse, DeleteTicketTypeRequest, DeleteTicketTypeResponse,
    GetEventCouponsParams, GetEventCouponsResponse, GetEventParams, GetEventResponse,
    GetGuestParams, GetGuestResponse, GetGuestsParams, GetGuestsResponse, GetTicketTypeParams,
    GetTicketTypeResponse, ListTicketTypesParams, ListTicketTypesResponse, SendInvitesRequest,
    SendInvitesResponse, UpdateEventCouponRequest, UpdateEventCouponResponse, UpdateEventRequest,
    UpdateEventResponse, UpdateGuestStatusRequest, UpdateGuestStatusResponse,
    UpdateTicketTypeRequest, UpdateTicketTypeResponse,
};

use crate::error::Error;
use crate::fetcher::{Fetcher, QueryParams};

/// Operations on a single event.
pub struct EventResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> EventResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        EventResource { fetcher }
    }

    /// Get admin-level details about a specific event.
    ///
    /// `GET /v1/event/get`
    pub async fn get(&self, params: GetEventParams) -> Result<GetEventResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", Some(params.event_api_id));
        self.fetcher.get("/v1/event/get", Some(query)).await
    }

    /// Look up a guest by event and guest identifiers.
    ///
    /// `GET /v1/event/get-guest`
    pub async fn get_guest(&self, params: GetGuestParams) -> Result<GetGuestResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", params.event_api_id);
        query.set("guest_api_id", params.guest_api_id);
        query.set("email", params.email);
        query.set("phone_number", params.phone_number);
        self.fetcher.get("/v1/event/get-guest", Some(query)).await
    }

    /// List guests who have registered or been invited to an event.
    ///
    /// `GET /v1/event/get-guests`
    pub async fn get_guests(&self, params: GetGuestsParams) -> Result<GetGuestsResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", Some(params.event_api_id));
        query.set("approval_status", params.approval_status.map(|s| s.as_str()));
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        query.set("sort_column", params.sort_column.map(|c| c.as_str()));
        query.set("sort_direction", params.sort_direction.map(|d| d.as_str()));
        self.fetcher.get("/v1/event/get-guests", Some(query)).await
    }

    /// Create a new event.
    ///
    /// `POST /v1/event/create`
    pub async fn create(&self, request: &CreateEventRequest) -> Result<CreateEventResponse, Error> {
        self.fetcher.post("/v1/event/create", request).await
    }

    /// Update details of an existing event.
    ///
    /// `POST /v1/event/update`
    pub async fn update(&self, request: &UpdateEventRequest) -> Result<UpdateEventResponse, Error> {
        self.fetcher.post("/v1/event/update", request).await
    }

    /// Approve or decline a guest.
    ///
    /// `POST /v1/event/update-guest-status`
    pub async fn update_guest_status(
        &self,
        request: &UpdateGuestStatusRequest,
    ) -> Result<UpdateGuestStatusResponse, Error> {
        self.fetcher
            .post("/v1/event/update-guest-status", request)
            .await
    }

    /// Send email (and optional SMS) invites to guests.
    ///
    /// `POST /v1/event/send-invites`
    pub async fn send_invites(
        &self,
        request: &SendInvitesRequest,
    ) -> Result<SendInvitesResponse, Error> {
        self.fetcher.post("/v1/event/send-invites", request).await
    }

    /// Add one or more guests to an event.
    ///
    /// `POST /v1/event/add-guests`
    pub async fn add_guests(&self, request: &AddGuestsRequest) -> Result<AddGuestsResponse, Error> {
        self.fetcher.post("/v1/event/add-guests", request).await
    }

    /// Add a host to an event.
    ///
    /// `POST /v1/event/add-host`
    pub async fn add_host(&self, request: &AddHostRequest) -> Result<AddHostResponse, Error> {
        self.fetcher.post("/v1/event/add-host", request).await
    }

    /// Retrieve the coupon codes created for an event.
    ///
    /// `GET /v1/event/coupons`
    pub async fn coupons(
        &self,
        params: GetEventCouponsParams,
    ) -> Result<GetEventCouponsResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", Some(params.event_api_id));
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        self.fetcher.get("/v1/event/coupons", Some(query)).await
    }

    /// Create a coupon code for an event.
    ///
    /// `POST /v1/event/create-coupon`
    pub async fn create_coupon(
        &self,
        request: &CreateEventCouponRequest,
    ) -> Result<CreateEventCouponResponse, Error> {
        self.fetcher.post("/v1/event/create-coupon", request).await
    }

    /// Update coupon limits or validity dates.
    ///
    /// `POST /v1/event/update-coupon`
    pub async fn update_coupon(
        &self,
        request: &UpdateEventCouponRequest,
    ) -> Result<UpdateEventCouponResponse, Error> {
        self.fetcher.post("/v1/event/update-coupon", request).await
    }

    /// List all ticket types for an event.
    ///
    /// `GET /v1/event/ticket-types/list`
    pub async fn list_ticket_types(
        &self,
        params: ListTicketTypesParams,
    ) -> Result<ListTicketTypesResponse, Error> {
        let mut query = QueryParams::new();
        query.set("event_api_id", Some(params.event_api_id));
        query.set("include_hidden", params.include_hidden);
        self.fetcher
            .get("/v1/event/ticket-types/list", Some(query))
            .await
    }

    /// Get a single ticket type by its ID.
    ///
    /// `GET /v1/event/ticket-types/get`
    pub async fn get_ticket_type(
        &self,
        params: GetTicketTypeParams,
    ) -> Result<GetTicketTypeResponse, Error> {
        let mut query = QueryParams::new();
        query.set("ticket_type_api_id", Some(params.ticket_type_api_id));
        self.fetcher
            .get("/v1/event/ticket-types/get", Some(query))
            .await
    }

    /// Create a new ticket type for an event.
    ///
    /// `POST /v1/event/ticket-types/create`
    pub async fn create_ticket_type(
        &self,
        request: &CreateTicketTypeRequest,
    ) -> Result<CreateTicketTypeResponse, Error> {
        self.fetcher
            .post("/v1/event/ticket-types/create", request)
            .await
    }

    /// Update an existing ticket type.
    ///
    /// `POST /v1/event/ticket-types/update`
    pub async fn update_ticket_type(
        &self,
        request: &UpdateTicketTypeRequest,
    ) -> Result<UpdateTicketTypeResponse, Error> {
        self.fetcher
            .post("/v1/event/ticket-types/update", request)
            .await
    }

    /// Soft-delete a ticket type.
    ///
    /// `POST /v1/event/ticket-types/delete`
    pub async fn delete_ticket_type(
        &self,
        request: &DeleteTicketTypeRequest,
    ) -> Result<DeleteTicketTypeResponse, Error> {
        self.fetcher
            .post("/v1/event/ticket-types/delete", request)
            .await
    }
}
