// Entry point for the workout tracker API server

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workout_tracker::adapters::auth::{BcryptHasher, JwtTokenService, SystemClock};
use workout_tracker::adapters::http::{app_router, AppServices, HttpSettings};
use workout_tracker::adapters::postgres::{
    PgAggregateDatabase, PostgresExerciseRepository, PostgresUserRepository,
};
use workout_tracker::adapters::TransactionalWorkoutSessionStore;
use workout_tracker::config::{AppConfig, AuthConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);
    tracing::info!(environment = ?config.server.environment, "Starting workout tracker API");

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations complete");
    }

    let secret = match config.auth.signing_secret() {
        Some(secret) => secret.to_vec(),
        None => {
            tracing::warn!(
                "No JWT secret configured; using a random one. Tokens will not survive a restart"
            );
            AuthConfig::generate_signing_secret()
        }
    };

    let services = AppServices {
        tokens: Arc::new(JwtTokenService::new(
            &secret,
            config.auth.token_lifetime(),
            Arc::new(SystemClock),
        )),
        hasher: Arc::new(BcryptHasher::new(config.auth.bcrypt_cost)),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        exercises: Arc::new(PostgresExerciseRepository::new(pool.clone())),
        sessions: Arc::new(TransactionalWorkoutSessionStore::new(Arc::new(
            PgAggregateDatabase::new(pool),
        ))),
    };
    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = app_router(&services, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. A listener that fails never resolves, so the
/// server keeps running instead of shutting down at startup.
async fn wait_for_signal(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    #[tokio::test]
    async fn received_signal_resolves() {
        let waited =
            tokio::time::timeout(Duration::from_millis(50), wait_for_signal(async { Ok(()) })).await;

        assert!(waited.is_ok());
    }

    #[tokio::test]
    async fn failed_listener_keeps_server_running() {
        let failing = async { Err(io::Error::new(io::ErrorKind::Other, "no signal handler")) };

        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_signal(failing)).await;

        assert!(waited.is_err());
    }
}
