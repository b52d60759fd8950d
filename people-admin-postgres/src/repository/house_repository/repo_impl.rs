use crate::utils::{get_heapless_string, TryFromRow};
use people_admin_db::models::house::HouseModel;
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Default ordering of house listings
pub(crate) const HOUSE_ORDERING: &str = "house_no, landmark, address, id";

pub struct HouseRepositoryImpl {
    pub executor: Executor,
}

impl HouseRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for HouseModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(HouseModel {
            id: row.try_get("id")?,
            person_id: row.try_get("person_id")?,
            house_no: row.try_get("house_no")?,
            landmark: get_heapless_string(row, "landmark")?,
            address: get_heapless_string(row, "address")?,
        })
    }
}
