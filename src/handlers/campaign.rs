use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::{validate_optional, validate_required, ValidJson, ValidPath};
use crate::models::{Campaign, NewCampaign};
use crate::state::AppState;

const NAME_MAX_LEN: usize = 255;
const DESCRIPTION_MAX_LEN: usize = 2000;
const URI_MAX_LEN: usize = 1024;

// ============ Request/Response DTOs ============

/// Campaign body accepted by create and update.
/// Any `id` in an update body is ignored in favour of the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, alias = "From", with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub to: Option<OffsetDateTime>,
    pub picture_uri: Option<String>,
    pub details_uri: Option<String>,
}

impl CampaignRequest {
    /// Check required fields and limits, yielding the service input
    pub fn validate(self) -> AppResult<NewCampaign> {
        let Self {
            name,
            description,
            from,
            to,
            picture_uri,
            details_uri,
        } = self;

        let Some(name) = name else {
            return Err(AppError::Validation("Name is required".to_string()));
        };
        validate_required(Some(name.as_str()), "Name", NAME_MAX_LEN)?;
        validate_optional(description.as_deref(), "Description", DESCRIPTION_MAX_LEN)?;
        validate_optional(picture_uri.as_deref(), "Picture URI", URI_MAX_LEN)?;
        validate_optional(details_uri.as_deref(), "Details URI", URI_MAX_LEN)?;

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AppError::Validation(
                    "Campaign start must not be after its end".to_string(),
                ));
            }
        }

        Ok(NewCampaign {
            name,
            description,
            from,
            to,
            picture_uri,
            details_uri,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub from: Option<OffsetDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub to: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_uri: Option<String>,
}

impl From<Campaign> for CampaignResponse {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            from: c.from,
            to: c.to,
            picture_uri: c.picture_uri,
            details_uri: c.details_uri,
        }
    }
}

// ============ Handlers ============

/// List all campaigns
#[utoipa::path(
    get,
    path = "/api/v1/campaigns",
    responses(
        (status = 200, description = "List of campaigns", body = [CampaignResponse])
    ),
    tag = "Campaigns"
)]
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CampaignResponse>>> {
    let campaigns = state.campaigns.list_campaigns().await?;
    Ok(Json(campaigns.into_iter().map(|c| c.into()).collect()))
}

/// Create a new campaign
#[utoipa::path(
    post,
    path = "/api/v1/campaigns",
    request_body = CampaignRequest,
    responses(
        (status = 201, description = "Campaign created successfully", body = CampaignResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Campaigns"
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CampaignRequest>,
) -> AppResult<(StatusCode, Json<CampaignResponse>)> {
    let new_campaign = payload.validate()?;

    let campaign = state.campaigns.create_campaign(new_campaign).await?;
    tracing::info!(id = campaign.id, "campaign created");
    Ok((StatusCode::CREATED, Json(campaign.into())))
}

/// Get a campaign by ID
#[utoipa::path(
    get,
    path = "/api/v1/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign details", body = CampaignResponse),
        (status = 404, description = "Campaign not found")
    ),
    tag = "Campaigns"
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<CampaignResponse>> {
    let campaign = state.campaigns.get_campaign(id).await?;
    Ok(Json(campaign.into()))
}

/// Replace a campaign's fields
#[utoipa::path(
    put,
    path = "/api/v1/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    request_body = CampaignRequest,
    responses(
        (status = 200, description = "Campaign updated successfully", body = CampaignResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Campaign not found")
    ),
    tag = "Campaigns"
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<CampaignRequest>,
) -> AppResult<Json<CampaignResponse>> {
    let campaign = payload.validate()?.with_id(id);

    let campaign = state.campaigns.update_campaign(campaign).await?;
    tracing::info!(id, "campaign updated");
    Ok(Json(campaign.into()))
}

/// Delete a campaign
#[utoipa::path(
    delete,
    path = "/api/v1/campaigns/{id}",
    params(
        ("id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Whether a campaign was removed", body = bool)
    ),
    tag = "Campaigns"
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<bool>> {
    let deleted = state.campaigns.delete_campaign(id).await?;
    tracing::info!(id, deleted, "campaign delete requested");
    Ok(Json(deleted))
}
