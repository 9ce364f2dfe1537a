use serde::{Deserialize, Serialize};

/// Request payload for `POST /get_token`
#[derive(Debug, Default, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub room: Option<String>,
    /// Participant identity
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default, rename = "isHost")]
    pub is_host: Option<bool>,
}

/// Response structure for token issuance
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

/// Media sources a participant may publish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    Camera,
    Microphone,
    ScreenShare,
}

/// Room-scoped capability grants, in the provider's `video` claim layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub room_admin: bool,
    pub can_publish_data: bool,
    pub can_publish_sources: Vec<TrackSource>,
    pub hidden: bool,
    pub recorder: bool,
}

impl VideoGrants {
    /// Grants for a regular participant; hosts additionally get room admin.
    ///
    /// `recorder` stays false for hosts too. The browser client hides its
    /// record button for non-hosts, but nobody is granted recording here.
    pub fn for_participant(room: &str, is_host: bool) -> Self {
        Self {
            room_join: true,
            room: room.to_string(),
            can_publish: true,
            can_subscribe: true,
            room_admin: is_host,
            can_publish_data: true,
            can_publish_sources: vec![
                TrackSource::Camera,
                TrackSource::Microphone,
                TrackSource::ScreenShare,
            ],
            hidden: false,
            recorder: false,
        }
    }
}

/// JWT claims of an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenClaims {
    pub iss: String, // API key
    pub sub: String, // Participant identity
    pub nbf: usize,
    pub iat: usize,
    pub exp: usize,
    pub video: VideoGrants,
}
