use people_admin_db::rules::PassportLifecycleHook;
use postgres_unit_of_work::Executor;
use std::sync::Arc;

use super::{CarRepositoryImpl, HouseRepositoryImpl, PassportRepositoryImpl, PersonRepositoryImpl};

/// Factory for the people repositories
///
/// Holds what outlives a single transaction (the passport lifecycle hook)
/// and builds repositories bound to a given executor. One instance serves
/// the whole application.
pub struct PeopleRepoFactory {
    passport_hook: Arc<dyn PassportLifecycleHook>,
}

impl PeopleRepoFactory {
    pub fn new(passport_hook: Arc<dyn PassportLifecycleHook>) -> Arc<Self> {
        Arc::new(Self { passport_hook })
    }

    pub fn build_person_repo(&self, executor: &Executor) -> Arc<PersonRepositoryImpl> {
        Arc::new(PersonRepositoryImpl::new(executor.clone()))
    }

    pub fn build_passport_repo(&self, executor: &Executor) -> Arc<PassportRepositoryImpl> {
        Arc::new(PassportRepositoryImpl::new(
            executor.clone(),
            self.passport_hook.clone(),
        ))
    }

    pub fn build_car_repo(&self, executor: &Executor) -> Arc<CarRepositoryImpl> {
        Arc::new(CarRepositoryImpl::new(executor.clone()))
    }

    pub fn build_house_repo(&self, executor: &Executor) -> Arc<HouseRepositoryImpl> {
        Arc::new(HouseRepositoryImpl::new(executor.clone()))
    }

    /// Build all people repositories over the same executor
    pub fn build_all_repos(&self, executor: &Executor) -> PeopleRepositories {
        PeopleRepositories {
            person_repository: self.build_person_repo(executor),
            passport_repository: self.build_passport_repo(executor),
            car_repository: self.build_car_repo(executor),
            house_repository: self.build_house_repo(executor),
        }
    }
}

/// Container for all people repositories of one unit of work
pub struct PeopleRepositories {
    pub person_repository: Arc<PersonRepositoryImpl>,
    pub passport_repository: Arc<PassportRepositoryImpl>,
    pub car_repository: Arc<CarRepositoryImpl>,
    pub house_repository: Arc<HouseRepositoryImpl>,
}
