use crate::utils::{get_heapless_string, TryFromRow};
use people_admin_db::models::car::CarModel;
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct CarRepositoryImpl {
    pub executor: Executor,
}

impl CarRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CarModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CarModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}
