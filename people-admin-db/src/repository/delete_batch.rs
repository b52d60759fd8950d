use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for deleting several records by id
///
/// Dependent rows follow the schema's cascade rules.
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// # Returns
    /// * `Ok(usize)` - The number of records actually deleted
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
