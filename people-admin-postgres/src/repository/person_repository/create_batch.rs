use async_trait::async_trait;
use people_admin_db::models::person::PersonModel;
use people_admin_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &PersonRepositoryImpl,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                sqlx::query(
                    r#"
                    INSERT INTO person (id, first_name, last_name, age, gender)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(item.id)
                .bind(item.first_name.as_str())
                .bind(item.last_name.as_str())
                .bind(item.age)
                .bind(item.gender)
                .execute(&mut **transaction)
                .await?;

                saved_items.push(item);
            }
        }

        debug!(count = saved_items.len(), "persons created");
        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, PersonModel> for PersonRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<PersonModel>,
    ) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::load_batch::LoadBatch;
    use super::super::test_utils::create_test_person;

    #[tokio::test]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let person_repo = &ctx.repos().person_repository;

        let persons = vec![
            create_test_person("Ada", Gender::Female),
            create_test_person("Bola", Gender::Male),
            create_test_person("Chidi", Gender::Other),
        ];
        let saved = person_repo.create_batch(persons.clone()).await?;
        assert_eq!(saved, persons);

        let ids: Vec<_> = saved.iter().map(|p| p.id).collect();
        let loaded = person_repo.load_batch(&ids).await?;
        for (loaded, expected) in loaded.into_iter().zip(&persons) {
            assert_eq!(loaded.as_ref(), Some(expected));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_batch_keeps_multibyte_names() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let person_repo = &ctx.repos().person_repository;

        let person = create_test_person("Éléonore-Bénédicte", Gender::Female);
        person_repo.create_batch(vec![person.clone()]).await?;

        let loaded = person_repo.load_batch(&[person.id]).await?;
        assert_eq!(loaded, vec![Some(person)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let saved = ctx.repos().person_repository.create_batch(Vec::new()).await?;
        assert!(saved.is_empty());
        Ok(())
    }
}
