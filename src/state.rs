use std::sync::Arc;

use sea_orm::{ConnectOptions, Database};
use sqlx::postgres::PgPool;

use crate::config::{Config, StoreKind};
use crate::services::{CampaignService, DbCampaignService, InMemoryCampaignService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Campaign store the handlers delegate to
    pub campaigns: Arc<dyn CampaignService>,
}

impl AppState {
    /// Create a new AppState, connecting to the configured campaign store
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let campaigns: Arc<dyn CampaignService> = match config.store {
            StoreKind::Memory => Arc::new(InMemoryCampaignService::new()),
            StoreKind::Postgres => Arc::new(connect_postgres(&config).await?),
        };

        Ok(Self { config, campaigns })
    }

    /// Create AppState with a custom campaign service (for testing)
    pub fn with_service(config: Config, campaigns: Arc<dyn CampaignService>) -> Self {
        Self { config, campaigns }
    }
}

async fn connect_postgres(config: &Config) -> Result<DbCampaignService, AppStateError> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppStateError::Postgres("DATABASE_URL is not set".to_string()))?;

    // Connect to PostgreSQL with SQLx (for migrations)
    let pg_pool = PgPool::connect(database_url)
        .await
        .map_err(|e| AppStateError::Postgres(e.to_string()))?;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|e| AppStateError::Migration(e.to_string()))?;
    pg_pool.close().await;

    // Connect to PostgreSQL with SeaORM
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(20)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt)
        .await
        .map_err(|e| AppStateError::Postgres(e.to_string()))?;

    Ok(DbCampaignService::new(db))
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
