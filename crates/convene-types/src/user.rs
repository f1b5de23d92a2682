//! User resource types.

use serde::{Deserialize, Serialize};

/// The authenticated API user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub api_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio_short: Option<String>,
    pub instagram_handle: Option<String>,
    pub twitter_handle: Option<String>,
    pub linkedin_handle: Option<String>,
    pub youtube_handle: Option<String>,
    pub tiktok_handle: Option<String>,
    pub website_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSelfResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let json = r#"{"user":{"api_id":"usr-1","email":"me@example.com","name":"Ada"}}"#;
        let response: GetSelfResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.api_id, "usr-1");
        assert_eq!(response.user.first_name, None);
    }
}
