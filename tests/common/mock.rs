use std::sync::Mutex;

use async_trait::async_trait;
use campaign_api::error::{AppError, AppResult};
use campaign_api::models::{Campaign, NewCampaign};
use campaign_api::services::CampaignService;

/// A call received by the mock service
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    List,
    Create(NewCampaign),
    Get(i32),
    Update(Campaign),
    Delete(i32),
}

/// Hand-written stand-in for the campaign store.
/// Returns canned results and records every call it receives;
/// update echoes its argument back.
#[derive(Default)]
pub struct MockCampaignService {
    list_result: Vec<Campaign>,
    create_result: Option<Campaign>,
    get_result: Option<Campaign>,
    delete_result: bool,
    calls: Mutex<Vec<ServiceCall>>,
}

#[allow(dead_code)]
impl MockCampaignService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning_list(mut self, campaigns: Vec<Campaign>) -> Self {
        self.list_result = campaigns;
        self
    }

    pub fn returning_created(mut self, campaign: Campaign) -> Self {
        self.create_result = Some(campaign);
        self
    }

    pub fn returning_campaign(mut self, campaign: Campaign) -> Self {
        self.get_result = Some(campaign);
        self
    }

    pub fn returning_deleted(mut self, deleted: bool) -> Self {
        self.delete_result = deleted;
        self
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CampaignService for MockCampaignService {
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>> {
        self.record(ServiceCall::List);
        Ok(self.list_result.clone())
    }

    async fn create_campaign(&self, input: NewCampaign) -> AppResult<Campaign> {
        self.record(ServiceCall::Create(input));
        self.create_result
            .clone()
            .ok_or_else(|| AppError::Internal("create_campaign not stubbed".to_string()))
    }

    async fn get_campaign(&self, id: i32) -> AppResult<Campaign> {
        self.record(ServiceCall::Get(id));
        self.get_result
            .clone()
            .ok_or_else(|| AppError::NotFound("Campaign".to_string()))
    }

    async fn update_campaign(&self, campaign: Campaign) -> AppResult<Campaign> {
        self.record(ServiceCall::Update(campaign.clone()));
        Ok(campaign)
    }

    async fn delete_campaign(&self, id: i32) -> AppResult<bool> {
        self.record(ServiceCall::Delete(id));
        Ok(self.delete_result)
    }
}

/// Campaign with only id and name set
#[allow(dead_code)]
pub fn campaign(id: i32, name: &str) -> Campaign {
    NewCampaign::named(name).with_id(id)
}
