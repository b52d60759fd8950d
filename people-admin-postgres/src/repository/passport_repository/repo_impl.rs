use crate::utils::{get_heapless_string, TryFromRow};
use people_admin_db::models::passport::PassportModel;
use people_admin_db::rules::{PassportLifecycleHook, SaveEvent};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, PgConnection, Row};
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

pub struct PassportRepositoryImpl {
    pub executor: Executor,
    pub lifecycle_hook: Arc<dyn PassportLifecycleHook>,
}

impl PassportRepositoryImpl {
    pub fn new(executor: Executor, lifecycle_hook: Arc<dyn PassportLifecycleHook>) -> Self {
        Self {
            executor,
            lifecycle_hook,
        }
    }

    /// Run the lifecycle hook for a passport that was just written and
    /// persist the expiry it asks for
    pub(super) async fn run_lifecycle_hook(
        &self,
        connection: &mut PgConnection,
        item: &mut PassportModel,
        event: SaveEvent,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let Some(new_expiry) = self.lifecycle_hook.after_save(item, event) else {
            return Ok(());
        };

        sqlx::query(r#"UPDATE passport SET expire_date = $2 WHERE id = $1"#)
            .bind(item.id)
            .bind(new_expiry)
            .execute(connection)
            .await?;

        debug!(
            passport = %item.id,
            ?event,
            from = %item.expire_date,
            to = %new_expiry,
            "passport expiry adjusted after save"
        );
        item.expire_date = new_expiry;
        Ok(())
    }
}

impl TryFromRow<PgRow> for PassportModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PassportModel {
            id: row.try_get("id")?,
            person_id: row.try_get("person_id")?,
            passport_id: get_heapless_string(row, "passport_id")?,
            issue_date: row.try_get("issue_date")?,
            expire_date: row.try_get("expire_date")?,
            country: get_heapless_string(row, "country")?,
        })
    }
}
