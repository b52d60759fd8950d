use async_trait::async_trait;
use people_admin_db::models::passport::PassportModel;
use people_admin_db::repository::load_batch::LoadBatch;
use crate::utils::{collect_rows, TryFromRow};
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &PassportRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<PassportModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM passport WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = PassportModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.get(id).cloned()).collect())
    }

    /// Load the selected passports in the list's default ordering,
    /// dropping ids that do not exist
    pub async fn load_ordered(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(r#"SELECT * FROM passport WHERE id = ANY($1) ORDER BY passport_id, id"#)
                .bind(ids)
                .fetch_all(&mut **transaction)
                .await?
        };
        collect_rows(&rows)
    }

    pub async fn load_one(
        &self,
        id: Uuid,
    ) -> Result<Option<PassportModel>, Box<dyn Error + Send + Sync>> {
        Ok(Self::load_batch_impl(self, &[id]).await?.pop().flatten())
    }
}

#[async_trait]
impl LoadBatch<Postgres, PassportModel> for PassportRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<PassportModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::person_repository::test_utils::create_test_person;
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use uuid::Uuid;
    use super::super::test_utils::create_test_passport;

    #[tokio::test]
    async fn test_load_ordered_sorts_by_passport_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let people = repos
            .person_repository
            .create_batch(vec![
                create_test_person("One", Gender::Male),
                create_test_person("Two", Gender::Female),
            ])
            .await?;
        let passports = repos
            .passport_repository
            .create_batch(vec![
                create_test_passport(people[0].id, "ZZ000001"),
                create_test_passport(people[1].id, "AA000001"),
            ])
            .await?;

        let ordered = repos
            .passport_repository
            .load_ordered(&[passports[0].id, Uuid::new_v4(), passports[1].id])
            .await?;
        let ids: Vec<&str> = ordered.iter().map(|p| p.passport_id.as_str()).collect();
        assert_eq!(ids, vec!["AA000001", "ZZ000001"]);

        Ok(())
    }
}
