use async_trait::async_trait;
use people_admin_db::models::car::CarModel;
use people_admin_db::repository::list_page::ListPage;
use people_admin_db::repository::pagination::{Page, PageRequest};
use crate::utils::collect_rows;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CarRepositoryImpl;

impl CarRepositoryImpl {
    pub(super) async fn list_page_impl(
        repo: &CarRepositoryImpl,
        page: PageRequest,
    ) -> Result<Page<CarModel>, Box<dyn Error + Send + Sync>> {
        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM car"#)
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(r#"SELECT * FROM car ORDER BY name, id LIMIT $1 OFFSET $2"#)
                .bind(page.limit as i64)
                .bind(page.offset as i64)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let items = collect_rows::<CarModel>(&rows)?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl ListPage<Postgres, CarModel> for CarRepositoryImpl {
    type Filter = ();

    async fn list_page(
        &self,
        _filter: &(),
        page: PageRequest,
    ) -> Result<Page<CarModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, page).await
    }
}
