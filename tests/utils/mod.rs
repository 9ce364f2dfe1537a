pub mod actions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{decode_token_claims, TestResponse};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder, TEST_API_KEY, TEST_API_SECRET};
