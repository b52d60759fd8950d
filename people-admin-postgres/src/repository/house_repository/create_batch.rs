use async_trait::async_trait;
use people_admin_db::models::house::HouseModel;
use people_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::HouseRepositoryImpl;

impl HouseRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &HouseRepositoryImpl,
        items: Vec<HouseModel>,
    ) -> Result<Vec<HouseModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in &items {
                sqlx::query(
                    r#"
                    INSERT INTO house (id, person_id, house_no, landmark, address)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(item.id)
                .bind(item.person_id)
                .bind(item.house_no)
                .bind(item.landmark.as_str())
                .bind(item.address.as_str())
                .execute(&mut **transaction)
                .await?;
            }
        }

        debug!(count = items.len(), "houses created");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, HouseModel> for HouseRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<HouseModel>,
    ) -> Result<Vec<HouseModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
