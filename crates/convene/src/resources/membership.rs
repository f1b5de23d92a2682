//! Membership endpoints.

use convene_types::membership::{
    AddMemberToTierRequest, AddMemberToTierResponse, ListMembershipTiersParams,
    ListMembershipTiersResponse, UpdateMemberStatusRequest, UpdateMemberStatusResponse,
};

use crate::error::Error;
use crate::fetcher::{Fetcher, QueryParams};

/// Operations on membership tiers and their members.
pub struct MembershipResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> MembershipResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        MembershipResource { fetcher }
    }

    /// List membership tiers available on the calendar.
    ///
    /// `GET /v1/memberships/tiers/list`
    pub async fn list_tiers(
        &self,
        params: ListMembershipTiersParams,
    ) -> Result<ListMembershipTiersResponse, Error> {
        let mut query = QueryParams::new();
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        self.fetcher
            .get("/v1/memberships/tiers/list", Some(query))
            .await
    }

    /// Add a person to a membership tier.
    ///
    /// `POST /v1/memberships/members/add`
    pub async fn add_member(
        &self,
        request: &AddMemberToTierRequest,
    ) -> Result<AddMemberToTierResponse, Error> {
        self.fetcher
            .post("/v1/memberships/members/add", request)
            .await
    }

    /// Approve or decline a membership application.
    ///
    /// `POST /v1/memberships/members/update-status`
    pub async fn update_member_status(
        &self,
        request: &UpdateMemberStatusRequest,
    ) -> Result<UpdateMemberStatusResponse, Error> {
        self.fetcher
            .post("/v1/memberships/members/update-status", request)
            .await
    }
}
