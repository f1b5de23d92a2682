//! Image upload endpoint.

use convene_types::images::{CreateUploadUrlRequest, CreateUploadUrlResponse};

use crate::error::Error;
use crate::fetcher::Fetcher;

/// Image upload URLs.
pub struct ImagesResource<'a> {
    fetcher: &'a Fetcher,
}

impl<'a> ImagesResource<'a> {
    pub(crate) fn new(fetcher: &'a Fetcher) -> Self {
        ImagesResource { fetcher }
    }

    /// Create a temporary signed URL for uploading an image.
    ///
    /// `POST /v1/images/create-upload-url`
    pub async fn create_upload_url(
        &self,
        request: &CreateUploadUrlRequest,
    ) -> Result<CreateUploadUrlResponse, Error> {
        self.fetcher
            .post("/v1/images/create-upload-url", request)
            .await
    }
}
