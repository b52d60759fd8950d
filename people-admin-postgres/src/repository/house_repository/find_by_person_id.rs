use people_admin_db::models::house::HouseModel;
use crate::utils::collect_rows;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{HouseRepositoryImpl, HOUSE_ORDERING};

impl HouseRepositoryImpl {
    /// Houses owned by `person_id`, in default ordering
    pub async fn find_by_person_id(
        &self,
        person_id: Uuid,
    ) -> Result<Vec<HouseModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT * FROM house WHERE person_id = $1 ORDER BY {HOUSE_ORDERING}");
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(person_id)
                .fetch_all(&mut **transaction)
                .await?
        };
        collect_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::person_repository::test_utils::create_test_person;
    use crate::test_helper::setup_test_context;
    use heapless::String as HeaplessString;
    use people_admin_api::Gender;
    use people_admin_db::repository::create_batch::CreateBatch;
    use super::super::test_utils::create_test_house;

    #[tokio::test]
    async fn test_find_by_person_id_uses_house_ordering() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();

        let owner = repos
            .person_repository
            .create_batch(vec![create_test_person("Landlord", Gender::Male)])
            .await?
            .remove(0);

        let mut by_landmark = create_test_house(owner.id, 5);
        by_landmark.landmark = HeaplessString::try_from("Behind the church").unwrap();
        repos
            .house_repository
            .create_batch(vec![
                create_test_house(owner.id, 9),
                create_test_house(owner.id, 5),
                by_landmark,
            ])
            .await?;

        let houses = repos.house_repository.find_by_person_id(owner.id).await?;
        let keys: Vec<(i32, &str)> = houses
            .iter()
            .map(|h| (h.house_no, h.landmark.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![(5, "Behind the church"), (5, "Near the market"), (9, "Near the market")]
        );

        Ok(())
    }
}
