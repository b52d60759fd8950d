use async_trait::async_trait;
use people_admin_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::HouseRepositoryImpl;

impl HouseRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &HouseRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(r#"DELETE FROM house WHERE id = ANY($1)"#)
                .bind(ids)
                .execute(&mut **transaction)
                .await?
                .rows_affected() as usize
        };

        debug!(count = rows_affected, "houses deleted");
        Ok(rows_affected)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for HouseRepositoryImpl {
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
