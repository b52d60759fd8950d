pub mod car_repository;
pub mod factory;
pub mod house_repository;
pub mod passport_repository;
pub mod person_repository;

pub use car_repository::CarRepositoryImpl;
pub use factory::{PeopleRepoFactory, PeopleRepositories};
pub use house_repository::HouseRepositoryImpl;
pub use passport_repository::PassportRepositoryImpl;
pub use person_repository::PersonRepositoryImpl;
