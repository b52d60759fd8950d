pub mod cars;
pub mod health;
pub mod houses;
pub mod passports;
pub mod persons;

use people_admin_api::PageView;
use people_admin_db::models::Identifiable;
use people_admin_db::repository::load_batch::LoadBatch;
use people_admin_db::repository::pagination::Page;
use people_admin_postgres::PeopleRepositories;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ConsoleResult;

pub(crate) fn page_view<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> PageView<U> {
    let page_number = page.page_number();
    let total_pages = page.total_pages();
    let page = page.map(f);
    PageView {
        items: page.items,
        total: page.total,
        page: page_number,
        page_size: page.limit,
        total_pages,
    }
}

/// Display strings of the given persons keyed by id; unknown ids are left out
pub(crate) async fn person_labels(
    repos: &PeopleRepositories,
    person_ids: impl IntoIterator<Item = Uuid>,
) -> ConsoleResult<HashMap<Uuid, String>> {
    let mut ids: Vec<Uuid> = person_ids.into_iter().collect();
    ids.sort();
    ids.dedup();

    let persons = repos.person_repository.load_batch(&ids).await?;
    Ok(persons
        .into_iter()
        .flatten()
        .map(|person| (person.get_id(), person.to_string()))
        .collect())
}
