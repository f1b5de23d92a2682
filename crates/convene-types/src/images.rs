//! Image upload types.

use serde::{Deserialize, Serialize};

/// What an uploaded image will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePurpose {
    EventCover,
    CalendarCover,
    UserAvatar,
}

/// Body for `POST /v1/images/create-upload-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUploadUrlRequest {
    pub purpose: ImagePurpose,
    pub content_type: String,
}

/// A temporary signed URL to PUT the image bytes to, plus the stable
/// URL the image will be served from afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUploadUrlResponse {
    pub signed_url: String,
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = CreateUploadUrlRequest {
            purpose: ImagePurpose::EventCover,
            content_type: "image/png".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"purpose":"event_cover","content_type":"image/png"}"#
        );
    }
}
