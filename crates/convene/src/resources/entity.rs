//! Entity lookup endpoint.

use convene_types::entity::{LookupEntityParams, LookupEntityResponse};

use crate::error::Error;
use crate::fetcher::{Fetcher, QueryParams};

/// Slug resolution.
pub struct EntityResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> EntityResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        EntityResource { fetcher }
    }

    /// Resolve an entity (event, calendar, or membership tier) by slug.
    ///
    /// `GET /v1/entity/lookup`
    pub async fn lookup(&self, params: LookupEntityParams) -> Result<LookupEntityResponse, Error> {
        let mut query = QueryParams::new();
        query.set("slug", Some(params.slug));
        self.fetcher.get("/v1/entity/lookup", Some(query)).await
    }
}
