pub mod campaign;

pub use campaign::CampaignRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Delete entity by ID, reporting whether a row was removed
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<bool>;

    /// List all entities in id order
    async fn list(db: &DatabaseConnection) -> AppResult<Vec<T>>;
}
