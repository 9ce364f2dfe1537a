// Public API - what other modules can use
pub use handlers::create_meeting;
pub use service::MeetingService;
pub use types::{CreateMeetingRequest, CreateMeetingResponse};

// Internal modules
pub mod generators;
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
