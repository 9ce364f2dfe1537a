// Public API - what other modules can use
pub use handlers::get_token;
pub use issuer::TokenIssuer;
pub use types::{AccessTokenClaims, TokenRequest, TokenResponse, TrackSource, VideoGrants};

// Internal modules
mod handlers;
pub mod issuer;
mod types;
