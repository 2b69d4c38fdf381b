use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::entity::campaign::{self, ActiveModel, Column, Entity as CampaignEntity};
use crate::error::{AppError, AppResult};
use crate::models::{Campaign, NewCampaign};
use crate::repositories::Repository;

/// Campaign repository for database operations
pub struct CampaignRepository;

#[async_trait]
impl Repository<Campaign> for CampaignRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Campaign> {
        let model = CampaignEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
        let result = CampaignEntity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn list(db: &DatabaseConnection) -> AppResult<Vec<Campaign>> {
        let models = CampaignEntity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

impl CampaignRepository {
    /// Insert a campaign and let the database assign its id
    pub async fn create(db: &DatabaseConnection, input: &NewCampaign) -> AppResult<Campaign> {
        let now = time::OffsetDateTime::now_utc();
        let model = ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            description: Set(input.description.clone()),
            starts_at: Set(input.from),
            ends_at: Set(input.to),
            picture_uri: Set(input.picture_uri.clone()),
            details_uri: Set(input.details_uri.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// Replace every mutable field of an existing campaign
    pub async fn update(db: &DatabaseConnection, input: &Campaign) -> AppResult<Campaign> {
        let model = CampaignEntity::find_by_id(input.id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign".to_string()))?;

        let mut active: ActiveModel = model.into();
        active.name = Set(input.name.clone());
        active.description = Set(input.description.clone());
        active.starts_at = Set(input.from);
        active.ends_at = Set(input.to);
        active.picture_uri = Set(input.picture_uri.clone());
        active.details_uri = Set(input.details_uri.clone());
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<campaign::Model> for Campaign {
    fn from(m: campaign::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            from: m.starts_at,
            to: m.ends_at,
            picture_uri: m.picture_uri,
            details_uri: m.details_uri,
        }
    }
}
