use async_trait::async_trait;
use people_admin_db::models::car::CarModel;
use people_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::CarRepositoryImpl;

impl CarRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CarRepositoryImpl,
        items: Vec<CarModel>,
    ) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in &items {
                sqlx::query(r#"INSERT INTO car (id, name) VALUES ($1, $2)"#)
                    .bind(item.id)
                    .bind(item.name.as_str())
                    .execute(&mut **transaction)
                    .await?;
            }
        }

        debug!(count = items.len(), "cars created");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, CarModel> for CarRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CarModel>,
    ) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
