use people_admin_db::models::passport::PassportModel;
use people_admin_db::rules::{plan_expiry_shift, BulkShiftError, ExpiryShiftMode, ShiftDirection};
use std::collections::HashMap;
use std::error::Error;
use tracing::info;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    /// Shift the expiry of the selected passports by five years.
    ///
    /// Ids that do not resolve are ignored; a selection with no resolvable id
    /// fails with [`BulkShiftError::EmptySelection`]. The lifecycle hook does
    /// not run for bulk shifts. Returns the updated passports in default
    /// ordering.
    pub async fn shift_expiry(
        &self,
        ids: &[Uuid],
        direction: ShiftDirection,
        mode: ExpiryShiftMode,
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        let selection = self.load_ordered(ids).await?;
        if selection.is_empty() {
            return Err(Box::new(BulkShiftError::EmptySelection));
        }
        let plan = plan_expiry_shift(&selection, direction, mode)?;

        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            for (id, new_expiry) in &plan {
                sqlx::query(r#"UPDATE passport SET expire_date = $2 WHERE id = $1"#)
                    .bind(id)
                    .bind(new_expiry)
                    .execute(&mut **transaction)
                    .await?;
            }
        }

        info!(
            count = plan.len(),
            ?direction,
            ?mode,
            "passport expiry dates shifted"
        );

        let new_dates: HashMap<Uuid, _> = plan.into_iter().collect();
        Ok(selection
            .into_iter()
            .map(|mut passport| {
                if let Some(date) = new_dates.get(&passport.id) {
                    passport.expire_date = *date;
                }
                passport
            })
            .collect())
    }
}
