use async_trait::async_trait;
use people_admin_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &PersonRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // passport, house and person_car rows cascade
        let delete_query = r#"DELETE FROM person WHERE id = ANY($1)"#;

        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let result = sqlx::query(delete_query).bind(ids).execute(&mut **transaction).await?;
            result.rows_affected() as usize
        };

        debug!(count = rows_affected, "persons deleted");
        Ok(rows_affected)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for PersonRepositoryImpl {
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::house_repository::test_utils::create_test_house;
    use crate::repository::passport_repository::test_utils::create_test_passport;
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::delete_batch::DeleteBatch;
    use people_admin_db::repository::exist_by_ids::ExistByIds;
    use uuid::Uuid;
    use super::super::test_utils::create_test_person;

    #[tokio::test]
    async fn test_delete_person_cascades_to_passport_and_houses() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let person = repos
            .person_repository
            .create_batch(vec![create_test_person("Doomed", Gender::Male)])
            .await?
            .remove(0);
        let passport = repos
            .passport_repository
            .create_batch(vec![create_test_passport(person.id, "P0000001")])
            .await?
            .remove(0);
        let house = repos
            .house_repository
            .create_batch(vec![create_test_house(person.id, 7)])
            .await?
            .remove(0);

        let deleted = repos.person_repository.delete_batch(&[person.id]).await?;
        assert_eq!(deleted, 1);

        let passports = repos.passport_repository.exist_by_ids(&[passport.id]).await?;
        assert_eq!(passports, vec![(passport.id, false)]);
        let houses = repos.house_repository.exist_by_ids(&[house.id]).await?;
        assert_eq!(houses, vec![(house.id, false)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_batch_with_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let deleted = ctx
            .repos()
            .person_repository
            .delete_batch(&[Uuid::new_v4(), Uuid::new_v4()])
            .await?;
        assert_eq!(deleted, 0);
        Ok(())
    }
}
