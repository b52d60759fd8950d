use async_trait::async_trait;
use people_admin_db::models::car::CarModel;
use people_admin_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::CarRepositoryImpl;

impl CarRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &CarRepositoryImpl,
        items: Vec<CarModel>,
    ) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_items = Vec::with_capacity(items.len());
        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                let result = sqlx::query(r#"UPDATE car SET name = $2 WHERE id = $1"#)
                    .bind(item.id)
                    .bind(item.name.as_str())
                    .execute(&mut **transaction)
                    .await?;
                if result.rows_affected() > 0 {
                    updated_items.push(item);
                }
            }
        }

        debug!(count = updated_items.len(), "cars updated");
        Ok(updated_items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, CarModel> for CarRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<CarModel>,
    ) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use heapless::String as HeaplessString;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::update_batch::UpdateBatch;
    use super::super::test_utils::create_test_car;

    #[tokio::test]
    async fn test_rename_car() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let car_repo = &ctx.repos().car_repository;

        let mut car = car_repo.create_batch(vec![create_test_car("Beetle")]).await?.remove(0);
        car.name = HeaplessString::try_from("Polo").unwrap();
        car_repo.update_batch(vec![car.clone()]).await?;

        assert_eq!(car_repo.load_one(car.id).await?, Some(car));
        Ok(())
    }
}
