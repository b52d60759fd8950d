use async_trait::async_trait;
use people_admin_db::models::passport::PassportModel;
use people_admin_db::repository::create_batch::CreateBatch;
use people_admin_db::rules::SaveEvent;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &PassportRepositoryImpl,
        items: Vec<PassportModel>,
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for mut item in items {
                sqlx::query(
                    r#"
                    INSERT INTO passport (id, person_id, passport_id, issue_date, expire_date, country)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(item.id)
                .bind(item.person_id)
                .bind(item.passport_id.as_str())
                .bind(item.issue_date)
                .bind(item.expire_date)
                .bind(item.country.as_str())
                .execute(&mut **transaction)
                .await?;

                repo.run_lifecycle_hook(&mut **transaction, &mut item, SaveEvent::Created)
                    .await?;
                saved_items.push(item);
            }
        }

        debug!(count = saved_items.len(), "passports created");
        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, PassportModel> for PassportRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<PassportModel>,
    ) -> Result<Vec<PassportModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::person_repository::test_utils::create_test_person;
    use crate::test_helper::{setup_test_context, setup_test_context_with_hook};
    use chrono::NaiveDate;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::load_batch::LoadBatch;
    use people_admin_db::rules::NoopLifecycleHook;
    use std::sync::Arc;
    use super::super::test_utils::{create_test_passport, create_test_passport_expiring};

    #[tokio::test]
    async fn test_create_extends_expiry_by_five_years() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let ada = repos
            .person_repository
            .create_batch(vec![create_test_person("Ada", Gender::Female)])
            .await?
            .remove(0);
        assert!(!repos.person_repository.has_passport(ada.id).await?);

        let passport = create_test_passport_expiring(
            ada.id,
            "ADA00001",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let saved = repos.passport_repository.create_batch(vec![passport.clone()]).await?;
        let expected = NaiveDate::from_ymd_opt(2028, 12, 30).unwrap();
        assert_eq!(saved[0].expire_date, expected);

        let stored = repos.passport_repository.load_batch(&[passport.id]).await?;
        assert_eq!(stored[0].as_ref().map(|p| p.expire_date), Some(expected));
        assert_eq!(stored[0].as_ref().map(|p| p.issue_date), Some(passport.issue_date));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_hook_keeps_expiry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_hook(Arc::new(NoopLifecycleHook)).await?;
        let repos = ctx.repos();

        let person = repos
            .person_repository
            .create_batch(vec![create_test_person("Plain", Gender::Male)])
            .await?
            .remove(0);
        let passport = create_test_passport(person.id, "PLN00001");
        let saved = repos.passport_repository.create_batch(vec![passport.clone()]).await?;
        assert_eq!(saved[0].expire_date, passport.expire_date);

        Ok(())
    }

    #[tokio::test]
    async fn test_second_passport_for_person_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let person = repos
            .person_repository
            .create_batch(vec![create_test_person("Twice", Gender::Other)])
            .await?
            .remove(0);
        repos
            .passport_repository
            .create_batch(vec![create_test_passport(person.id, "TWC00001")])
            .await?;

        let second = repos
            .passport_repository
            .create_batch(vec![create_test_passport(person.id, "TWC00002")])
            .await;
        let err = second.expect_err("a person may hold only one passport");
        let db_err = err
            .downcast_ref::<sqlx::Error>()
            .and_then(|e| e.as_database_error())
            .and_then(|e| e.code().map(|c| c.into_owned()));
        assert_eq!(db_err.as_deref(), Some("23505"));

        Ok(())
    }
}
