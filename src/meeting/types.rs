use serde::{Deserialize, Serialize};

/// Request payload for creating a new meeting
#[derive(Debug, Default, Deserialize)]
pub struct CreateMeetingRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Response for meeting creation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateMeetingResponse {
    pub status: String, // Always "success"
    pub code: String,
}

impl CreateMeetingResponse {
    pub fn success(code: String) -> Self {
        Self {
            status: "success".to_string(),
            code,
        }
    }
}
