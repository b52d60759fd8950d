use async_trait::async_trait;
use people_admin_db::models::passport::PassportModel;
use people_admin_db::repository::update_batch::UpdateBatch;
use people_admin_db::rules::SaveEvent;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    /// Issue date is immutable and not written here.
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<PassportModel>,
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_items = Vec::with_capacity(items.len());
        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for mut item in items {
                let issue_date: Option<chrono::NaiveDate> = sqlx::query_scalar(
                    r#"
                    UPDATE passport
                    SET person_id = $2, passport_id = $3, expire_date = $4, country = $5
                    WHERE id = $1
                    RETURNING issue_date
                    "#,
                )
                .bind(item.id)
                .bind(item.person_id)
                .bind(item.passport_id.as_str())
                .bind(item.expire_date)
                .bind(item.country.as_str())
                .fetch_optional(&mut **transaction)
                .await?;

                let Some(issue_date) = issue_date else {
                    continue;
                };
                item.issue_date = issue_date;

                self.run_lifecycle_hook(&mut **transaction, &mut item, SaveEvent::Updated)
                    .await?;
                updated_items.push(item);
            }
        }

        debug!(count = updated_items.len(), "passports updated");
        Ok(updated_items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, PassportModel> for PassportRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<PassportModel>,
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
