use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, instrument};

use super::types::{TokenRequest, TokenResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for issuing a conferencing access token
///
/// POST /get_token
/// Credentials are checked before the body is looked at, so a misconfigured
/// server answers 500 even for malformed requests.
#[instrument(name = "get_token", skip(state, payload))]
pub async fn get_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    state.token_issuer.credentials()?;

    let Json(request) = payload?;
    let room = request.room.unwrap_or_default();
    let identity = request.user.unwrap_or_default();
    let is_host = request.is_host.unwrap_or(false);

    let token = state.token_issuer.issue_token(&room, &identity, is_host)?;

    info!(room = %room, identity = %identity, is_host, "Access token issued");

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use crate::token::issuer::MISSING_CREDENTIALS_MESSAGE;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot`

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/get_token", axum::routing::post(get_token))
            .with_state(state)
    }

    fn token_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/get_token")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_token_handler_for_host() {
        let state = AppStateBuilder::new().build();
        let issuer = state.token_issuer.clone();

        let response = app(state)
            .oneshot(token_request(
                r#"{"room": "r1", "user": "alice", "isHost": true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let token = body["token"].as_str().unwrap();
        let claims = issuer.verify_token(token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.video.room, "r1");
        assert!(claims.video.room_admin);
    }

    #[tokio::test]
    async fn test_get_token_handler_defaults_to_guest() {
        let state = AppStateBuilder::new().build();
        let issuer = state.token_issuer.clone();

        let response = app(state)
            .oneshot(token_request(r#"{"room": "r1", "user": "bob"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let claims = issuer
            .verify_token(body["token"].as_str().unwrap())
            .unwrap();
        assert!(!claims.video.room_admin);
    }

    #[tokio::test]
    async fn test_get_token_handler_missing_user() {
        let app = app(AppStateBuilder::new().build());

        let response = app
            .oneshot(token_request(r#"{"room": "r1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing room or user");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn test_get_token_handler_invalid_json() {
        let app = app(AppStateBuilder::new().build());

        let response = app.oneshot(token_request("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_token_handler_checks_credentials_before_body() {
        for body in ["{not json", "{}"] {
            let app = app(AppStateBuilder::new().without_credentials().build());

            let response = app.oneshot(token_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let json = body_json(response).await;
            assert_eq!(json["error"], MISSING_CREDENTIALS_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_get_token_handler_without_credentials() {
        let app = app(AppStateBuilder::new().without_credentials().build());

        let response = app
            .oneshot(token_request(r#"{"room": "r1", "user": "alice"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Missing LIVEKIT_API_KEY or LIVEKIT_API_SECRET in environment variables"
        );
    }
}
