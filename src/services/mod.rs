pub mod database;
pub mod memory;

pub use database::DbCampaignService;
pub use memory::InMemoryCampaignService;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Campaign, NewCampaign};

/// Campaign store abstraction injected into the HTTP handlers.
/// Owns persistence and any business rules beyond request validation.
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// All campaigns, in the order the store keeps them
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>>;

    /// Store a new campaign and return it with its assigned id
    async fn create_campaign(&self, input: NewCampaign) -> AppResult<Campaign>;

    /// Fetch a single campaign
    async fn get_campaign(&self, id: i32) -> AppResult<Campaign>;

    /// Replace the fields of the campaign identified by `campaign.id`
    async fn update_campaign(&self, campaign: Campaign) -> AppResult<Campaign>;

    /// Remove a campaign; `false` when nothing matched
    async fn delete_campaign(&self, id: i32) -> AppResult<bool>;
}
