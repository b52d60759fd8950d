use async_trait::async_trait;
use people_admin_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &PassportRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let result = sqlx::query(r#"DELETE FROM passport WHERE id = ANY($1)"#)
                .bind(ids)
                .execute(&mut **transaction)
                .await?;
            result.rows_affected() as usize
        };

        debug!(count = rows_affected, "passports deleted");
        Ok(rows_affected)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for PassportRepositoryImpl {
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
    use super::super::test_utils::create_test_passport;

    #[tokio::test]
    async fn test_delete_passport_keeps_person() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let person = repos
            .person_repository
            .create_batch(vec![create_test_person("Keeper", Gender::Male)])
            .await?
            .remove(0);
        let passport = repos
            .passport_repository
            .create_batch(vec![create_test_passport(person.id, "KEP00001")])
            .await?
            .remove(0);

        assert_eq!(repos.passport_repository.delete_batch(&[passport.id]).await?, 1);
        assert!(!repos.person_repository.has_passport(person.id).await?);
        assert!(repos.person_repository.load_one(person.id).await?.is_some());

        Ok(())
    }
}
