use people_admin_db::models::person::{PersonFilter, PersonModel};
use people_admin_db::repository::pagination::{Page, PageRequest};
use std::error::Error;
use tracing::debug;

use super::repo_impl::PersonRepositoryImpl;

impl PersonRepositoryImpl {
    /// Persons whose gender is Male, in default ordering
    pub async fn male(&self, page: PageRequest) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, &PersonFilter::male(), page).await
    }

    /// Persons whose gender is Female, in default ordering
    pub async fn female(&self, page: PageRequest) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, &PersonFilter::female(), page).await
    }

    /// Persons whose gender is Other, in default ordering
    pub async fn other(&self, page: PageRequest) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        Self::list_page_impl(self, &PersonFilter::other(), page).await
    }

    /// Persons with the given gender code; an unrecognized code matches nobody
    pub async fn by_gender_code(
        &self,
        code: &str,
        page: PageRequest,
    ) -> Result<Page<PersonModel>, Box<dyn Error + Send + Sync>> {
        match PersonFilter::by_gender_code(code) {
            Some(filter) => Self::list_page_impl(self, &filter, page).await,
            None => {
                debug!(code, "unrecognized gender code, empty result");
                Ok(Page::empty(page))
            }
        }
    }
}
