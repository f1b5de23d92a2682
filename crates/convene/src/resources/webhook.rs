//! Webhook endpoints.

use convene_types::webhook::{
    CreateWebhookRequest, CreateWebhookResponse, DeleteWebhookRequest, DeleteWebhookResponse,
    GetWebhookParams, GetWebhookResponse, ListWebhooksParams, ListWebhooksResponse,
    UpdateWebhookRequest, UpdateWebhookResponse,
};

use crate::error::Error;
use crate::fetcher::{Fetcher, QueryParams};

/// Operations on webhook endpoints.
pub struct WebhookResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> WebhookResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        WebhookResource { fetcher }
    }

    /// List existing webhook endpoints.
    ///
    /// `GET /v1/webhooks/list`
    pub async fn list(&self, params: ListWebhooksParams) -> Result<ListWebhooksResponse, Error> {
        let mut query = QueryParams::new();
        query.set("cursor", params.cursor);
        query.set("limit", params.limit);
        self.fetcher.get("/v1/webhooks/list", Some(query)).await
    }

    /// Get details about a single webhook.
    ///
    /// `GET /v1/webhooks/get`
    pub async fn get(&self, params: GetWebhookParams) -> Result<GetWebhookResponse, Error> {
        let mut query = QueryParams::new();
        query.set("webhook_api_id", Some(params.webhook_api_id));
        self.fetcher.get("/v1/webhooks/get", Some(query)).await
    }

    /// Register a new webhook endpoint.
    ///
    /// `POST /v1/webhooks/create`
    pub async fn create(&self, request: &CreateWebhookRequest) -> Result<CreateWebhookResponse, Error> {
        self.fetcher.post("/v1/webhooks/create", request).await
    }

    /// Update an existing webhook.
    ///
    /// `POST /v1/webhooks/update`
    pub async fn update(&self, request: &UpdateWebhookRequest) -> Result<UpdateWebhookResponse, Error> {
        self.fetcher.post("/v1/webhooks/update", request).await
    }

    /// Delete a webhook endpoint.
    ///
    /// `POST /v1/webhooks/delete`
    pub async fn delete(&self, request: &DeleteWebhookRequest) -> Result<DeleteWebhookResponse, Error> {
        self.fetcher.post("/v1/webhooks/delete", request).await
    }
}
