use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;
use crate::models::{Campaign, NewCampaign};
use crate::repositories::{CampaignRepository, Repository};
use crate::services::CampaignService;

/// PostgreSQL-backed campaign service
pub struct DbCampaignService {
    db: DatabaseConnection,
}

impl DbCampaignService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CampaignService for DbCampaignService {
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>> {
        CampaignRepository::list(&self.db).await
    }

    async fn create_campaign(&self, input: NewCampaign) -> AppResult<Campaign> {
        let campaign = CampaignRepository::create(&self.db, &input).await?;
        tracing::debug!(id = campaign.id, "campaign inserted");
        Ok(campaign)
    }

    async fn get_campaign(&self, id: i32) -> AppResult<Campaign> {
        CampaignRepository::find_by_id(&self.db, id).await
    }

    async fn update_campaign(&self, campaign: Campaign) -> AppResult<Campaign> {
        CampaignRepository::update(&self.db, &campaign).await
    }

    async fn delete_campaign(&self, id: i32) -> AppResult<bool> {
        let deleted = CampaignRepository::delete(&self.db, id).await?;
        tracing::debug!(id, deleted, "campaign delete executed");
        Ok(deleted)
    }
}
