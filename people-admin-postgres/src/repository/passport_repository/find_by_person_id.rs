use people_admin_db::models::passport::PassportModel;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    /// The passport of a person, if one was issued
    pub async fn find_by_person_id(
        &self,
        person_id: Uuid,
    ) -> Result<Option<PassportModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(r#"SELECT * FROM passport WHERE person_id = $1"#)
                .bind(person_id)
                .fetch_optional(&mut **transaction)
                .await?
        };
        row.as_ref().map(PassportModel::try_from_row).transpose()
    }
}
