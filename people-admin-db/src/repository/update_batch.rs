use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for updating several records in the current transaction
///
/// Items whose id does not exist are skipped and not returned.
#[async_trait]
pub trait UpdateBatch<DB: Database, T: Identifiable>: Send + Sync {
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
