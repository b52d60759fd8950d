use async_trait::async_trait;
use people_admin_db::models::house::HouseModel;
use people_admin_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::HouseRepositoryImpl;

impl HouseRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &HouseRepositoryImpl,
        items: Vec<HouseModel>,
    ) -> Result<Vec<HouseModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_items = Vec::with_capacity(items.len());
        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                let result = sqlx::query(
                    r#"
                    UPDATE house
                    SET person_id = $2, house_no = $3, landmark = $4, address = $5
                    WHERE id = $1
                    "#,
                )
                .bind(item.id)
                .bind(item.person_id)
                .bind(item.house_no)
                .bind(item.landmark.as_str())
                .bind(item.address.as_str())
                .execute(&mut **transaction)
                .await?;

                if result.rows_affected() > 0 {
                    updated_items.push(item);
                }
            }
        }

        debug!(count = updated_items.len(), "houses updated");
        Ok(updated_items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, HouseModel> for HouseRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<HouseModel>,
    ) -> Result<Vec<HouseModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::person_repository::test_utils::create_test_person;
    use crate::test_helper::setup_test_context;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use people_admin_db::repository::update_batch::UpdateBatch;
    use super::super::test_utils::create_test_house;

    #[tokio::test]
    async fn test_move_house_to_new_owner() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let people = repos
            .person_repository
            .create_batch(vec![
                create_test_person("Seller", Gender::Male),
                create_test_person("Buyer", Gender::Female),
            ])
            .await?;
        let mut house = repos
            .house_repository
            .create_batch(vec![create_test_house(people[0].id, 7)])
            .await?
            .remove(0);

        house.person_id = people[1].id;
        house.house_no = 8;
        repos.house_repository.update_batch(vec![house.clone()]).await?;

        assert_eq!(repos.house_repository.load_one(house.id).await?, Some(house));
        assert!(repos.house_repository.find_by_person_id(people[0].id).await?.is_empty());

        Ok(())
    }
}
