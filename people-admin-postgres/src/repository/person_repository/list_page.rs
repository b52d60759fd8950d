use async_trait::async_trait;
use people_admin_db::models::person::{PersonFilter, PersonModel};
use people_admin_db::repository::list_page::ListPage;
use people_admin_db::repository::pagination::{Page, PageRequest};
use people_admin_db::utils::escape_like;
use crate::utils::collect_rows;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::PersonRepositoryImpl;

/// Appends the WHERE clause for `filter` to a person query
fn push_person_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PersonFilter) {
    builder.push(" WHERE TRUE");
    if let Some(gender) = filter.gender {
        builder.push(" AND gender = ").push_bind(gender);
    }
    if let Some(age) = filter.age {
        builder.push(" AND age = ").push_bind(age);
    }
    if let Some(term) = filter.first_name_contains.as_deref() {
        builder
            .push(" AND first_name ILIKE ")
            .push_bind(format!("%{}%", escape_like(term)));
    }
}

impl PersonRepositoryImpl {
    pub(super) async fn list_page_impl(
        repo: &PersonRepositoryImpl,
        filter: &PersonFilter,
        page: PageRequest,
    ) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM person");
        push_person_filter(&mut count_query, filter);

        let mut select_query = QueryBuilder::<Postgres>::new("SELECT * FROM person");
        push_person_filter(&mut select_query, filter);
        select_query
            .push(" ORDER BY first_name, id LIMIT ")
            .push_bind(page.limit as i64)
            .push(" OFFSET ")
            .push_bind(page.offset as i64);

        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = count_query
                .build_query_scalar()
                .fetch_one(&mut **transaction)
                .await?;
            let rows = select_query.build().fetch_all(&mut **transaction).await?;
            (total, rows)
        };

        let items = collect_rows::<PersonModel>(&rows)?;
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl ListPage<Postgres, PersonModel> for PersonRepositoryImpl {
    type Filter = PersonFilter;

    async fn list_page(
        &self,
        filter: &PersonFilter,
        page: PageRequest,
    ) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, filter, page).await
    }
}
