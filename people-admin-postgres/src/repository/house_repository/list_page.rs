use async_trait::async_trait;
use people_admin_db::models::house::HouseModel;
use people_admin_db::repository::list_page::ListPage;
use people_admin_db::repository::pagination::{Page, PageRequest};
use crate::utils::collect_rows;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{HouseRepositoryImpl, HOUSE_ORDERING};

impl HouseRepositoryImpl {
    pub(super) async fn list_page_impl(
        repo: &HouseRepositoryImpl,
        page: PageRequest,
    ) -> Result<Page<HouseModel>, Box<dyn Error + Send + Sync>> {
        let select = format!("SELECT * FROM house ORDER BY {HOUSE_ORDERING} LIMIT $1 OFFSET $2");
        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM house"#)
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(&select)
                .bind(page.limit as i64)
                .bind(page.offset as i64)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let items = collect_rows::<HouseModel>(&rows)?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl ListPage<Postgres, HouseModel> for HouseRepositoryImpl {
    type Filter = ();

    async fn list_page(
        &self,
        _filter: &(),
        page: PageRequest,
    ) -> Result<Page<HouseModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, page).await
    }
}
