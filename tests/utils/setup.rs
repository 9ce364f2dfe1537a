use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use meetkit::{
    create_app, ApiCredentials, AppState, MeetingRepository, RandomHexCodeGenerator,
    SqliteMeetingRepository, TokenIssuer,
};

pub const TEST_API_KEY: &str = "APIintegration";
pub const TEST_API_SECRET: &str = "integration-secret-with-enough-length";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<SqliteMeetingRepository>,
    pub root: PathBuf,
}

pub struct TestSetupBuilder {
    credentials: Option<ApiCredentials>,
    index_html: Option<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            credentials: Some(ApiCredentials::new(TEST_API_KEY, TEST_API_SECRET)),
            index_html: None,
        }
    }

    pub fn without_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    pub fn with_index_html(mut self, html: &str) -> Self {
        self.index_html = Some(html.to_string());
        self
    }

    pub async fn build(self) -> TestSetup {
        let root = std::env::temp_dir().join(format!("meetkit-it-{}", uuid::Uuid::new_v4()));
        let static_dir = root.join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        if let Some(html) = &self.index_html {
            std::fs::write(static_dir.join("index.html"), html).unwrap();
        }

        let repository = Arc::new(SqliteMeetingRepository::new(
            root.join("data").join("database.db"),
        ));
        repository.init_schema().await.unwrap();

        let state = AppState::new(
            Arc::new(TokenIssuer::new(self.credentials, 3600)),
            repository.clone(),
            Arc::new(RandomHexCodeGenerator::new()),
        );

        TestSetup {
            app: create_app(state, &static_dir),
            repository,
            root,
        }
    }
}

impl Drop for TestSetup {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
