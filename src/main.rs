use anyhow::Context;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use campaign_api::config::Config;
use campaign_api::handlers::{CampaignRequest, CampaignResponse};
use campaign_api::state::AppState;
use campaign_api::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::campaign::list_campaigns,
        handlers::campaign::create_campaign,
        handlers::campaign::get_campaign,
        handlers::campaign::update_campaign,
        handlers::campaign::delete_campaign,
    ),
    components(schemas(CampaignRequest, CampaignResponse)),
    tags(
        (name = "Campaigns", description = "Marketing campaign management endpoints")
    )
)]
struct ApiDoc;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.server_addr();

    // Initialize tracing
    init_tracing(config.log_json);

    // Initialize application state (connects to the campaign store)
    tracing::info!(store = ?config.store, "Initializing campaign store...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Campaign store ready");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
