use std::sync::Arc;

use axum_test::TestServer;
use campaign_api::build_router;
use campaign_api::config::{Config, StoreKind};
use campaign_api::services::{CampaignService, InMemoryCampaignService};
use campaign_api::state::AppState;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        store: StoreKind::Memory,
        database_url: None,
        log_json: false,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a test application backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_service(Arc::new(InMemoryCampaignService::new()))
    }

    /// Create a test application around a given campaign service
    pub fn with_service(service: Arc<dyn CampaignService>) -> Self {
        let state = AppState::with_service(test_config(), service);

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
