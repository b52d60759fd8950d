use people_admin_db::models::car::CarModel;
use people_admin_db::models::person::PersonModel;
use crate::utils::collect_rows;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    pub async fn load_one(
        &self,
        id: Uuid,
    ) -> Result<Option<PersonModel>, Box<dyn Error + Send + Sync>> {
        Ok(Self::load_batch_impl(self, &[id]).await?.pop().flatten())
    }

    /// Whether a passport is linked to the person
    pub async fn has_passport(&self, person_id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM passport WHERE person_id = $1)"#)
                .bind(person_id)
                .fetch_one(&mut **transaction)
                .await?;
        Ok(exists)
    }

    /// Cars assigned to the person, ordered by name
    pub async fn owned_cars(&self, person_id: Uuid) -> Result<Vec<CarModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(
                r#"
                SELECT c.* FROM car c
                JOIN person_car pc ON pc.car_id = c.id
                WHERE pc.person_id = $1
                ORDER BY c.name, c.id
                "#,
            )
            .bind(person_id)
            .fetch_all(&mut **transaction)
            .await?
        };
        collect_rows(&rows)
    }
}
