use async_trait::async_trait;
use people_admin_db::models::person::PersonModel;
use people_admin_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_items = Vec::with_capacity(items.len());
        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                let result = sqlx::query(
                    r#"
                    UPDATE person
                    SET first_name = $2, last_name = $3, age = $4, gender = $5
                    WHERE id = $1
                    "#,
                )
                .bind(item.id)
                .bind(item.first_name.as_str())
                .bind(item.last_name.as_str())
                .bind(item.age)
                .bind(item.gender)
                .execute(&mut **transaction)
                .await?;

                if result.rows_affected() > 0 {
                    updated_items.push(item);
                }
            }
        }

        debug!(count = updated_items.len(), "persons updated");
        Ok(updated_items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, PersonModel> for PersonRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
