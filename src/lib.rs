// Library crate for the meeting backend
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod meeting;
pub mod shared;
pub mod token;

// Re-export commonly used types for easier access in tests
pub use app::create_app;
pub use config::{ApiCredentials, AppConfig};
pub use meeting::{
    generators::{is_valid_code, CodeGenerator, RandomHexCodeGenerator},
    models::MeetingModel,
    repository::{InMemoryMeetingRepository, MeetingRepository, SqliteMeetingRepository},
};
pub use shared::{AppError, AppState};
pub use token::TokenIssuer;
