use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Repository trait backing a list view
///
/// Items are returned in the entity's default ordering, narrowed by
/// `Filter`. Entities without list filters use `()`.
#[async_trait]
pub trait ListPage<DB: Database, T: Identifiable>: Send + Sync {
    type Filter: Send + Sync;

    async fn list_page(
        &self,
        filter: &Self::Filter,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
