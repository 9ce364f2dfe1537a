use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument, warn};

use super::types::{AccessTokenClaims, VideoGrants};
use crate::config::ApiCredentials;
use crate::shared::AppError;

pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "Missing LIVEKIT_API_KEY or LIVEKIT_API_SECRET in environment variables";

/// Mints signed access tokens for the conferencing provider
pub struct TokenIssuer {
    credentials: Option<ApiCredentials>,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(credentials: Option<ApiCredentials>, ttl_seconds: i64) -> Self {
        Self {
            credentials,
            ttl_seconds,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns the signing credentials, or a configuration error if absent
    pub fn credentials(&self) -> Result<&ApiCredentials, AppError> {
        self.credentials.as_ref().ok_or_else(|| {
            warn!("Token requested but signing credentials are not configured");
            AppError::ConfigurationError(MISSING_CREDENTIALS_MESSAGE.to_string())
        })
    }

    /// Creates a token granting `identity` access to `room`
    #[instrument(skip(self))]
    pub fn issue_token(
        &self,
        room: &str,
        identity: &str,
        is_host: bool,
    ) -> Result<String, AppError> {
        let credentials = self.credentials()?;

        if room.is_empty() || identity.is_empty() {
            return Err(AppError::ValidationError("Missing room or user".to_string()));
        }

        let now = Utc::now();
        let exp = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                warn!(ttl_seconds = self.ttl_seconds, "Token expiry out of range");
                AppError::JwtError(format!(
                    "token lifetime of {} seconds is out of range",
                    self.ttl_seconds
                ))
            })?
            .timestamp() as usize;

        debug!(
            ttl_seconds = self.ttl_seconds,
            exp_timestamp = exp,
            "Creating access token"
        );

        let claims = AccessTokenClaims {
            iss: credentials.api_key.clone(),
            sub: identity.to_string(),
            nbf: now.timestamp() as usize,
            iat: now.timestamp() as usize,
            exp,
            video: VideoGrants::for_participant(room, is_host),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(credentials.api_secret.as_bytes()),
        )
        .map_err(|e| {
            warn!(error = %e, "Failed to encode access token");
            AppError::JwtError(e.to_string())
        })
    }

    /// Verifies a token signed with the configured secret and returns its claims
    #[instrument(skip(self, token))]
    pub fn verify_token(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
        let credentials = self.credentials()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[credentials.api_key.as_str()]);

        decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(credentials.api_secret.as_bytes()),
            &validation,
        )
        .map(|data| {
            debug!(
                identity = %data.claims.sub,
                room = %data.claims.video.room,
                exp = data.claims.exp,
                "Access token decoded successfully"
            );
            data.claims
        })
        .map_err(|e| {
            debug!(error = %e, "Failed to decode access token");
            AppError::JwtError(e.to_string())
        })
    }
}
