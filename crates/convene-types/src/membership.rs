//! Membership resource types: tiers and members.

use serde::{Deserialize, Serialize};

use crate::common::{MembershipStatus, Paginated};

/// Billing cadence of a membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
    OneTime,
}

/// A membership tier offered on a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipTier {
    pub api_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub billing_period: Option<BillingPeriod>,
    pub is_free: Option<bool>,
    pub is_default: Option<bool>,
    pub member_count: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A person enrolled in a membership tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub api_id: String,
    pub user_api_id: Option<String>,
    pub tier_api_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<MembershipStatus>,
    pub joined_at: Option<String>,
    pub expires_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Params for `GET /v1/memberships/tiers/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMembershipTiersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

pub type ListMembershipTiersResponse = Paginated<MembershipTier>;

/// Body for `POST /v1/memberships/members/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberToTierRequest {
    pub tier_api_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberToTierResponse {
    pub member: Member,
}

/// Decision on a membership application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberDecision {
    Approved,
    Declined,
}

/// Body for `POST /v1/memberships/members/update-status`. Identify the
/// member by user API id or email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberStatusRequest {
    pub tier_api_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: MemberDecision,
}

pub type UpdateMemberStatusResponse = AddMemberToTierResponse;
