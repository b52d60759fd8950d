use people_admin_api::Gender;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    /// Apply gender edits made inline on the person list
    ///
    /// Returns the number of persons changed; unknown ids are ignored.
    pub async fn update_genders(
        &self,
        edits: &[(Uuid, Gender)],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if edits.is_empty() {
            return Ok(0);
        }

        let mut changed = 0;
        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for (id, gender) in edits {
                let result = sqlx::query(r#"UPDATE person SET gender = $2 WHERE id = $1"#)
                    .bind(id)
                    .bind(gender)
                    .execute(&mut **transaction)
                    .await?;
                changed += result.rows_affected() as usize;
            }
        }

        debug!(changed, "person genders edited inline");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::load_batch::LoadBatch;
    use uuid::Uuid;
    use super::super::test_utils::create_test_person;

    #[tokio::test]
    async fn test_update_genders_only_touches_gender() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let person_repo = &ctx.repos().person_repository;

        let saved = person_repo
            .create_batch(vec![create_test_person("Inline", Gender::Male)])
            .await?;
        let id = saved[0].id;

        let changed = person_repo
            .update_genders(&[(id, Gender::Female), (Uuid::new_v4(), Gender::Other)])
            .await?;
        assert_eq!(changed, 1);

        let loaded = person_repo.load_batch(&[id]).await?.remove(0).unwrap();
        assert_eq!(loaded.gender, Gender::Female);
        assert_eq!(loaded.first_name.as_str(), "Inline");
        assert_eq!(loaded.age, saved[0].age);

        Ok(())
    }
}
