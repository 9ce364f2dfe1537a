use meetkit::{
    create_app, AppConfig, AppState, MeetingRepository, RandomHexCodeGenerator,
    SqliteMeetingRepository, TokenIssuer,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetkit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting meeting backend");

    let config = AppConfig::from_env();

    let token_issuer = Arc::new(TokenIssuer::new(
        config.credentials.clone(),
        config.token_ttl_seconds,
    ));

    // The server still starts without credentials; token requests report the problem
    if !token_issuer.is_configured() {
        warn!("LIVEKIT_API_KEY or LIVEKIT_API_SECRET not set, token issuance is disabled");
    }

    let meeting_repository = Arc::new(SqliteMeetingRepository::new(config.database_path()));
    meeting_repository
        .init_schema()
        .await
        .expect("Failed to initialize meetings database");
    info!(path = %meeting_repository.path().display(), "Meetings database ready");

    let app_state = AppState::new(
        token_issuer,
        meeting_repository,
        Arc::new(RandomHexCodeGenerator::new()),
    );

    let app = create_app(app_state, &config.static_dir);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .expect("Failed to bind listener");
    info!("Server running on http://{}", bind_address);
    axum::serve(listener, app).await.expect("Server error");
}
