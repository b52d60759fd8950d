use people_admin_db::rules::PassportLifecycleHook;
use postgres_unit_of_work::Executor;
use sqlx::migrate::MigrateError;
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use crate::repository::{PeopleRepoFactory, PeopleRepositories};

/// Entry point to the people store
///
/// Holds the connection pool and the repository factory. Every unit of work
/// (one console request, one test) begins its own [`RepositorySession`].
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    factory: Arc<PeopleRepoFactory>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>, passport_hook: Arc<dyn PassportLifecycleHook>) -> Self {
        Self {
            pool,
            factory: PeopleRepoFactory::new(passport_hook),
        }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        sqlx::migrate!().run(&*self.pool).await
    }

    /// Begin a transaction and build all repositories sharing it
    ///
    /// Dropping the session without [`RepositorySession::commit`] rolls the
    /// transaction back.
    pub async fn begin_session(&self) -> Result<RepositorySession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);
        let repos = self.factory.build_all_repos(&executor);

        Ok(RepositorySession { executor, repos })
    }
}

/// One transaction plus the repositories bound to it
pub struct RepositorySession {
    executor: Executor,
    repos: PeopleRepositories,
}

impl RepositorySession {
    pub fn repos(&self) -> &PeopleRepositories {
        &self.repos
    }

    /// Commit the transaction, consuming the session
    pub async fn commit(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        debug!("unit of work committed");
        Ok(())
    }
}
