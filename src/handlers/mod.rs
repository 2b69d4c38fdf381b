pub mod campaign;
pub mod common;

pub use campaign::{
    create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign,
    CampaignRequest, CampaignResponse,
};
pub use common::{validate_optional, validate_required, ValidJson, ValidPath};
