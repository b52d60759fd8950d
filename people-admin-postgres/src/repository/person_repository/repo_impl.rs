use crate::utils::{get_heapless_string, TryFromRow};
use people_admin_db::models::person::PersonModel;
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct PersonRepositoryImpl {
    pub executor: Executor,
}

impl PersonRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for PersonModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PersonModel {
            id: row.try_get("id")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
        })
    }
}
