use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for inserting several records in the current transaction
///
/// Returns the saved items with any store-side adjustments applied (for a
/// passport, the expiry extension performed by its lifecycle hook).
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, CarModel> for CarRepositoryImpl {
///     async fn create_batch(&self, items: Vec<CarModel>) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
