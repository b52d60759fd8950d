pub mod repo_impl;
pub mod create_batch;
pub mod load_batch;
pub mod update_batch;
pub mod update_genders;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod list_page;
pub mod gender_filters;
pub mod car_links;
pub mod relations;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PersonRepositoryImpl;
