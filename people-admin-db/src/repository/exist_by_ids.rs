use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for checking which ids exist
#[async_trait]
pub trait ExistByIds<DB: Database>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<(Uuid, bool)>)` - Each requested id paired with its existence, in request order
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
