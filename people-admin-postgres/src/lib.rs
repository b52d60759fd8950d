pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{PostgresRepositories, RepositorySession};
pub use repository::{PeopleRepoFactory, PeopleRepositories};

#[cfg(test)]
pub mod test_helper;
