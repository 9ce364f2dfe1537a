use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Default token lifetime, matching the provider's own default of 6 hours
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 6 * 60 * 60;
/// Upper bound for `TOKEN_TTL_SECONDS`; larger values fall back to the default
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;
pub const DEFAULT_PORT: u16 = 8888;

/// API key pair shared with the conferencing provider
#[derive(Clone)]
pub struct ApiCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

// Keep the secret out of logs and panic messages
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when either half of the key pair is missing or empty
    pub credentials: Option<ApiCredentials>,
    pub token_ttl_seconds: i64,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let non_empty = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();

        let credentials = match (non_empty("LIVEKIT_API_KEY"), non_empty("LIVEKIT_API_SECRET")) {
            (Some(api_key), Some(api_secret)) => Some(ApiCredentials {
                api_key,
                api_secret,
            }),
            _ => None,
        };

        let token_ttl_seconds = vars
            .get("TOKEN_TTL_SECONDS")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|ttl| *ttl > 0 && *ttl <= MAX_TOKEN_TTL_SECONDS)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);

        let port = vars
            .get("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_dir = non_empty("DATA_DIR").unwrap_or_else(|| "data".to_string());
        let static_dir = non_empty("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        Self {
            credentials,
            token_ttl_seconds,
            port,
            data_dir: PathBuf::from(data_dir),
            static_dir: PathBuf::from(static_dir),
        }
    }

    /// Path of the SQLite file holding the meetings table
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("database.db")
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
