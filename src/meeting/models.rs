use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the meetings table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct MeetingModel {
    pub id: i64,      // Assigned by the store
    pub code: String, // Public join handle, unique
    pub title: String,
    pub start_time: String, // Free text, stored as given
    pub end_time: String,
}

/// A meeting row that has not been inserted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeeting {
    pub code: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewMeeting {
    pub fn new(code: String, title: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            code,
            title: title.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// Same meeting under a different candidate code
    pub fn with_code(&self, code: String) -> Self {
        Self {
            code,
            ..self.clone()
        }
    }

    pub fn into_model(self, id: i64) -> MeetingModel {
        MeetingModel {
            id,
            code: self.code,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
