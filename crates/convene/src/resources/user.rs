//! User endpoints.

use convene_types::user::GetSelfResponse;

use crate::error::Error;
use crate::fetcher::Fetcher;

/// Operations on the authenticated user.
pub struct UserResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> UserResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        UserResource { fetcher }
    }

    /// Get details about the authenticated API user.
    ///
    /// `GET /v1/user/get-self`
    pub async fn get_self(&self) -> Result<GetSelfResponse, Error> {
        self.fetcher.get("/v1/user/get-self", None).await
    }
}
