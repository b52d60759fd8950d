use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    /// Replace the cars assigned to a person
    pub async fn set_cars(
        &self,
        person_id: Uuid,
        car_ids: &[Uuid],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        sqlx::query(r#"DELETE FROM person_car WHERE person_id = $1"#)
            .bind(person_id)
            .execute(&mut **transaction)
            .await?;

        if !car_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO person_car (person_id, car_id)
                SELECT $1, UNNEST($2::uuid[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(person_id)
            .bind(car_ids)
            .execute(&mut **transaction)
            .await?;
        }

        debug!(%person_id, cars = car_ids.len(), "person cars assigned");
        Ok(())
    }

    /// Ids of the cars assigned to a person
    pub async fn find_car_ids(
        &self,
        person_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let ids = sqlx::query_scalar(
            r#"
            SELECT pc.car_id FROM person_car pc
            JOIN car c ON c.id = pc.car_id
            WHERE pc.person_id = $1
            ORDER BY c.name, c.id
            "#,
        )
        .bind(person_id)
        .fetch_all(&mut **transaction)
        .await?;
        Ok(ids)
    }
}
