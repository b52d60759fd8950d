use async_trait::async_trait;
use people_admin_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::CarRepositoryImpl;

impl CarRepositoryImpl {
    /// Deleting a car drops only its ownership links
    pub(super) async fn delete_batch_impl(
        repo: &CarRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(r#"DELETE FROM car WHERE id = ANY($1)"#)
                .bind(ids)
                .execute(&mut **transaction)
                .await?
                .rows_affected() as usize
        };

        debug!(count = rows_affected, "cars deleted");
        Ok(rows_affected)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for CarRepositoryImpl {
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::person_repository::test_utils::create_test_person;
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::delete_batch::DeleteBatch;
    use super::super::test_utils::create_test_car;

    #[tokio::test]
    async fn test_delete_car_keeps_owner() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let person = repos
            .person_repository
            .create_batch(vec![create_test_person("Driver", Gender::Female)])
            .await?
            .remove(0);
        let cars = repos
            .car_repository
            .create_batch(vec![create_test_car("Civic"), create_test_car("Jazz")])
            .await?;
        repos
            .person_repository
            .set_cars(person.id, &[cars[0].id, cars[1].id])
            .await?;

        assert_eq!(repos.car_repository.delete_batch(&[cars[0].id]).await?, 1);

        assert!(repos.person_repository.load_one(person.id).await?.is_some());
        let remaining = repos.person_repository.find_car_ids(person.id).await?;
        assert_eq!(remaining, vec![cars[1].id]);

        Ok(())
    }
}
