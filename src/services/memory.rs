use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{Campaign, NewCampaign};
use crate::services::CampaignService;

/// In-process campaign store. Ids are assigned sequentially from 1
/// and never reused, so id order is insertion order.
#[derive(Clone)]
pub struct InMemoryCampaignService {
    inner: Arc<Mutex<InMemoryCampaignsInner>>,
}

struct InMemoryCampaignsInner {
    next_id: i32,
    campaigns: BTreeMap<i32, Campaign>,
}

impl InMemoryCampaignService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(InMemoryCampaignsInner {
                next_id: 1,
                campaigns: BTreeMap::new(),
            })),
        }
    }
}

impl Default for InMemoryCampaignService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignService for InMemoryCampaignService {
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>> {
        let inner = self.inner.lock().await;
        Ok(inner.campaigns.values().cloned().collect())
    }

    async fn create_campaign(&self, input: NewCampaign) -> AppResult<Campaign> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("campaign id space exhausted".to_string()))?;

        let campaign = input.with_id(id);
        inner.campaigns.insert(id, campaign.clone());
        tracing::debug!(id, "campaign stored in memory");
        Ok(campaign)
    }

    async fn get_campaign(&self, id: i32) -> AppResult<Campaign> {
        let inner = self.inner.lock().await;
        inner
            .campaigns
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Campaign".to_string()))
    }

    async fn update_campaign(&self, campaign: Campaign) -> AppResult<Campaign> {
        let mut inner = self.inner.lock().await;
        let slot = inner
            .campaigns
            .get_mut(&campaign.id)
            .ok_or_else(|| AppError::NotFound("Campaign".to_string()))?;
        *slot = campaign.clone();
        Ok(campaign)
    }

    async fn delete_campaign(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.lock().await;
        Ok(inner.campaigns.remove(&id).is_some())
    }
}
