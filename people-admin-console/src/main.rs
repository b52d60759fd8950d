use std::sync::Arc;

use anyhow::{Context, Result};
use people_admin_console::{build_router, config::ConsoleConfig, state::AppState};
use people_admin_db::rules::ExpiryExtensionHook;
use people_admin_postgres::PostgresRepositories;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ConsoleConfig::from_env().context("failed to load console configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    let passport_hook = Arc::new(ExpiryExtensionHook::new(config.expiry_trigger));
    let repos = PostgresRepositories::new(Arc::new(pool), passport_hook);
    repos
        .run_migrations()
        .await
        .context("failed to apply people admin migrations")?;
    info!(
        trigger = ?config.expiry_trigger,
        shift_mode = ?config.shift_mode,
        "people admin schema ready"
    );

    let app = build_router(AppState::new(
        Arc::new(repos),
        config.shift_mode,
        config.page_size,
    ));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "people admin console started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("people_admin=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
